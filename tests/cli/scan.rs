use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_scan_lists_candidates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "addon/init.lua",
        "print(\"Hello world\")\nlocal id = \"ERR_001\"\n",
    )?;

    assert_cmd_snapshot!(test.scan_command().arg("--path").arg("addon"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    candidate: "Hello world"  sentence
      --> init.lua:1:7
      |
    1 | print("Hello world")
      |       ^

    ✓ Found 1 candidate (1 distinct) in 1 file

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_scan_does_not_write() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("addon/init.lua", "print(\"Hello world\")\n")?;

    let output = test.scan_command().arg("--path").arg("addon").output()?;

    assert!(output.status.success());
    assert!(!test.root().join("translated").exists());
    assert!(!test.root().join("languages.lua").exists());
    assert_eq!(test.read_file("addon/init.lua")?, "print(\"Hello world\")\n");

    Ok(())
}

#[test]
fn test_scan_invalid_folder() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan_command().arg("--path").arg("missing").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid folder path: missing"));

    Ok(())
}
