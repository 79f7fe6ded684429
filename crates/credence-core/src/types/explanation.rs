use serde::{Deserialize, Serialize};

/// One line of an analysis breakdown.
///
/// Rule checks always carry a point delta (possibly zero). Linguistic notes
/// usually carry none and are purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    /// Signed point adjustment, if this line moved a score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i32>,

    /// Short name of the check, e.g. "Source Reputation"
    pub label: String,

    /// Human-readable reason
    pub detail: String,
}

impl ScoreExplanation {
    /// An explanation that adjusted the score by `delta` points
    #[must_use]
    pub fn scored(delta: i32, label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            delta: Some(delta),
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// A descriptive explanation with no point adjustment
    #[must_use]
    pub fn note(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            delta: None,
            label: label.into(),
            detail: detail.into(),
        }
    }

    /// Points contributed, zero for notes
    #[must_use]
    pub fn points(&self) -> i32 {
        self.delta.unwrap_or(0)
    }

    /// Bracketed delta tag: `[+30]`, `[-15]` or `[+/- 0]`
    #[must_use]
    pub fn delta_tag(&self) -> Option<String> {
        self.delta.map(|d| match d {
            0 => "[+/- 0]".to_string(),
            d if d > 0 => format!("[+{d}]"),
            d => format!("[{d}]"),
        })
    }
}

impl std::fmt::Display for ScoreExplanation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(tag) = self.delta_tag() {
            write!(f, "{tag} ")?;
        }
        write!(f, "{}: {}", self.label, self.detail)
    }
}
