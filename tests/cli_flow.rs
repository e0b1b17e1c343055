// Integration test for the statlab command flow
//
// Parses real command lines and runs them against a temporary config
// directory, checking what ends up on the output stream.

use clap::Parser;
use stat_config::CONF_FILE_NAME;
use stat_core::StatError;
use stat_lab::facade::{StatLabCLI, dispatch};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a working directory holding a stat-lab.toml
fn create_conf_env(conf: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(CONF_FILE_NAME);
    fs::write(&path, conf).unwrap();
    (temp, path)
}

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = StatLabCLI::try_parse_from(args)?;
    let mut out = Vec::new();
    dispatch(cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn report_json_from_values() {
    let (_temp, conf) = create_conf_env("");
    let text = run(&[
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "--values",
        "3, 5, 2, 5, 8, 10, 3",
        "--format",
        "json",
    ])
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        v["summary"]["sorted_sample"],
        serde_json::json!([2.0, 3.0, 3.0, 5.0, 5.0, 8.0, 10.0])
    );
    assert_eq!(v["summary"]["median"], serde_json::json!(5.0));
    assert_eq!(v["summary"]["p75"], serde_json::json!(6.5));
}

#[test]
fn report_uses_conf_format_and_delimiter() {
    let (_temp, conf) = create_conf_env(
        r#"
[input]
delimiter = ";"

[report]
format = "table"
precision = 3
extra_percentiles = [90.0]
"#,
    );
    let text = run(&[
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "-v",
        "1; 2; 3; 4",
    ])
    .unwrap();
    assert!(text.contains("| Statistic"));
    assert!(text.contains("2.500"));
    assert!(text.contains("p90"));
}

#[test]
fn report_reads_input_file_from_conf() {
    let (temp, conf) = create_conf_env("[input]\nfile = \"numbers.txt\"\n[report]\nformat = \"json\"\n");
    fs::write(temp.path().join("numbers.txt"), "4\n4\n10\n").unwrap();

    let text = run(&["statlab", "report", "--conf", conf.to_str().unwrap()]).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["summary"]["mode"], serde_json::json!([4.0]));
    assert_eq!(v["summary"]["count"], serde_json::json!(3));
}

#[test]
fn report_lesson_is_default() {
    let (_temp, conf) = create_conf_env("");
    let text = run(&["statlab", "report", "--conf", conf.to_str().unwrap()]).unwrap();
    assert!(text.starts_with("# Learning Statistics"));
    assert!(text.contains("mode(s): [3, 5]"));
}

#[test]
fn invalid_input_prints_nothing() {
    let (_temp, conf) = create_conf_env("");
    let cli = StatLabCLI::try_parse_from([
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "--values",
        "a,b",
    ])
    .unwrap();
    let mut out = Vec::new();
    let err = dispatch(cli, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(err.downcast_ref::<StatError>().unwrap().is_invalid_input());
}

#[test]
fn percentile_command() {
    let (_temp, conf) = create_conf_env("");
    let text = run(&[
        "statlab",
        "percentile",
        "50",
        "--conf",
        conf.to_str().unwrap(),
        "--values",
        "10, 20, 30, 40",
    ])
    .unwrap();
    assert_eq!(text, "p50 = 25.00\n");

    let err = run(&[
        "statlab",
        "percentile",
        "120",
        "--conf",
        conf.to_str().unwrap(),
        "--values",
        "1, 2",
    ])
    .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StatError>(),
        Some(StatError::InvalidPercentile(_))
    ));
}

#[test]
fn init_then_refuse_overwrite() {
    let temp = tempfile::tempdir().unwrap();
    let dir = temp.path().to_str().unwrap();

    let text = run(&["statlab", "init", "--dir", dir]).unwrap();
    assert!(text.starts_with("Created "));
    assert!(temp.path().join(CONF_FILE_NAME).is_file());

    assert!(run(&["statlab", "init", "--dir", dir]).is_err());
    assert!(run(&["statlab", "init", "--dir", dir, "--force"]).is_ok());
}

#[test]
fn broken_conf_is_reported() {
    let (_temp, conf) = create_conf_env("[report]\nhistogram_bins = 0\n");
    let err = run(&["statlab", "report", "--conf", conf.to_str().unwrap()]).unwrap_err();
    assert!(format!("{:#}", err).contains("histogram_bins"));
}

#[test]
fn oversized_bins_flag_is_rejected() {
    let (_temp, conf) = create_conf_env("");
    let err = run(&[
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "-v",
        "1,2,3",
        "--bins",
        "18446744073709551615",
        "--format",
        "table",
    ])
    .unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("--bins"));
    assert!(msg.contains("histogram_bins"));
}

#[test]
fn bins_flag_within_bounds_is_used() {
    let (_temp, conf) = create_conf_env("");
    let text = run(&[
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "-v",
        "1,2,3,4",
        "--bins",
        "2",
        "--format",
        "json",
    ])
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["histogram"]["bins"].as_array().unwrap().len(), 2);
}

#[test]
fn large_precision_flag_is_rejected() {
    let (_temp, conf) = create_conf_env("");
    let err = run(&[
        "statlab",
        "report",
        "--conf",
        conf.to_str().unwrap(),
        "-v",
        "1,2,3",
        "--precision",
        "99",
    ])
    .unwrap_err();
    assert!(format!("{:#}", err).contains("--precision"));
}

#[test]
fn oversized_bins_in_conf_is_rejected() {
    let (_temp, conf) = create_conf_env("[report]\nhistogram_bins = 100000\n");
    let err = run(&["statlab", "report", "--conf", conf.to_str().unwrap()]).unwrap_err();
    assert!(format!("{:#}", err).contains("histogram_bins"));
}
