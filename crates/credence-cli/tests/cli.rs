use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ARTICLE: &str = "By Jane Smith\n\
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    The city council approved the new transit budget on Tuesday after a long public hearing. \
    Sources: city records.";

/// A command isolated from the user's saved settings.
fn credence(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("credence").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("CREDENCE_PRESET")
        .env_remove("CREDENCE_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("presets"));
}

#[test]
fn presets_are_listed() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("standard"))
        .stdout(predicate::str::contains("classic"))
        .stdout(predicate::str::contains("balanced"))
        .stdout(predicate::str::contains("+30 / +5 / -35"));
}

#[test]
fn short_text_is_reported_not_scored() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .args(["analyze", "Far too short to judge."])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too short"));
}

#[test]
fn json_report_for_raw_text() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .args(["--output", "json", "analyze", ARTICLE])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"final_score\""))
        .stdout(predicate::str::contains("Author Presence"))
        // 50 + 10 byline + 15 citations - 10 depth
        .stdout(predicate::str::contains("\"score\": 65"))
        .stdout(predicate::str::contains("Source Reputation").not());
}

#[test]
fn text_report_from_stdin() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .args(["-o", "text", "analyze", "--stdin"])
        .write_stdin(ARTICLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("CREDIBILITY ANALYSIS REPORT"))
        .stdout(predicate::str::contains(">>> Rule-Based Analysis (Weight: 40%)"))
        .stdout(predicate::str::contains("[+15] Citations"));
}

#[test]
fn markdown_report_from_file_with_preset() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("article.txt");
    std::fs::write(&file, ARTICLE).unwrap();

    credence(&home)
        .args(["-o", "markdown", "--preset", "classic", "analyze", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Credibility Analysis Report"))
        .stdout(predicate::str::contains("##### Rule-Based Analysis (Weight: 50%)"));
}

#[test]
fn scoring_config_file_sets_weights() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("scoring.toml");
    std::fs::write(&config, "[weights]\nrule_based = 0.7\nml_based = 0.3\n").unwrap();

    credence(&home)
        .args(["-o", "text", "analyze", ARTICLE, "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("(Weight: 70%)"))
        .stdout(predicate::str::contains("(Weight: 30%)"));
}

#[test]
fn invalid_scoring_config_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("scoring.toml");
    std::fs::write(&config, "[weights]\nrule_based = 0.9\nml_based = 0.6\n").unwrap();

    credence(&home)
        .args(["analyze", ARTICLE, "--config"])
        .arg(&config)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid weights"));
}

#[test]
fn explain_goes_to_stderr() {
    let home = TempDir::new().unwrap();
    credence(&home)
        .args(["--explain", "-o", "json", "analyze", ARTICLE])
        .assert()
        .success()
        .stderr(predicate::str::contains("What This Does"))
        .stdout(predicate::str::starts_with("{"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_is_saved_and_used() {
    let home = TempDir::new().unwrap();

    credence(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("credence/config.toml"));

    credence(&home)
        .args(["config", "set", "output_format", "markdown"])
        .assert()
        .success();

    credence(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output_format\": \"markdown\""));

    credence(&home)
        .args(["analyze", ARTICLE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("## Credibility Analysis Report"));

    credence(&home)
        .args(["config", "set", "api_key", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
