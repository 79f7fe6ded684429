mod explanation;
mod report;
mod tier;

pub use explanation::*;
pub use report::*;
pub use tier::*;
