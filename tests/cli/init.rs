use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .langsweeprc.json

    ----- stderr -----
    ");

    let content = test.read_file(".langsweeprc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["outputDir"], "./translated");
    assert_eq!(parsed["catalogFile"], "./languages.lua");
    assert_eq!(parsed["locale"], "en");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langsweeprc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .langsweeprc.json already exists
    ");

    assert_eq!(test.read_file(".langsweeprc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("addon/init.lua", "print(\"Hello world\")")?;

    let output = test.scan_command().arg("--path").arg("addon").output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(test.root().join(".langsweeprc.json").exists());

    Ok(())
}
