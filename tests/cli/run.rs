use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run_with_input};

fn setup_addon(test: &CliTest) -> Result<()> {
    test.write_file(
        "addon/lua/a.lua",
        "print(\"Hello world\")\nlocal code = \"ERR_001\"\nprint(\"Press %s to continue\")\n",
    )?;
    test.write_file("addon/lua/b.lua", "notify(\"Press %s to continue\")\n")?;
    Ok(())
}

#[test]
fn test_run_rewrites_copy_and_writes_catalog() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;

    let output = run_with_input(
        test.run_command()
            .args(["--table", "MyAddon", "--path", "addon"]),
        "y\ny\n",
    )?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    // Asked once per distinct sentence, never for identifiers.
    assert_eq!(stdout.matches("Sentence: Hello world").count(), 1);
    assert_eq!(stdout.matches("Sentence: Press %s to continue").count(), 1);
    assert!(!stdout.contains("ERR_001"));

    assert_eq!(
        test.read_file("translated/lua/a.lua")?,
        "print(MyAddon:GetLang(1))\nlocal code = \"ERR_001\"\nprint(MyAddon:GetLang(2))\n"
    );
    assert_eq!(
        test.read_file("translated/lua/b.lua")?,
        "notify(MyAddon:GetLang(2))\n"
    );
    assert_eq!(
        test.read_file("languages.lua")?,
        "MyAddon.Lang = {}\n\
         \n\
         MyAddon.Lang[\"en\"] = {\n\
         \t[1] = \"Hello world\",\n\
         \t[2] = \"Press %s to continue\",\n\
         }\n\
         \n\
         function MyAddon:GetLang(iIdx)\n\
         \treturn self.Lang[\"en\"][iIdx]\n\
         end\n"
    );

    // The source tree is never touched.
    assert_eq!(
        test.read_file("addon/lua/b.lua")?,
        "notify(\"Press %s to continue\")\n"
    );

    Ok(())
}

#[test]
fn test_run_rejected_sentence_is_left_alone() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;

    let output = run_with_input(
        test.run_command()
            .args(["--table", "MyAddon", "--path", "addon"]),
        "n\ny\n",
    )?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("translated/lua/a.lua")?,
        "print(\"Hello world\")\nlocal code = \"ERR_001\"\nprint(MyAddon:GetLang(1))\n"
    );
    assert!(test.read_file("languages.lua")?.contains("\t[1] = \"Press %s to continue\",\n"));

    Ok(())
}

#[test]
fn test_run_prompts_for_missing_table_and_path() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;

    let output = run_with_input(&mut test.run_command(), "Hud\naddon\ny\ny\n")?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(stdout.contains("Please enter the name of the table (XXX.Lang) to use:"));
    assert!(stdout.contains("Please enter the folder path to fetch sentences from:"));
    assert_eq!(
        test.read_file("translated/lua/b.lua")?,
        "notify(Hud:GetLang(2))\n"
    );

    Ok(())
}

#[test]
fn test_run_uses_config_values() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;
    test.write_file(
        ".langsweeprc.json",
        r#"{
            "table": "Cfg",
            "sourceRoot": "addon",
            "outputDir": "./out",
            "catalogFile": "./lang/catalog.lua",
            "locale": "de"
        }"#,
    )?;

    let output = run_with_input(&mut test.run_command(), "y\nn\n")?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        test.read_file("out/lua/a.lua")?,
        "print(Cfg:GetLang(1))\nlocal code = \"ERR_001\"\nprint(\"Press %s to continue\")\n"
    );
    let catalog = test.read_file("lang/catalog.lua")?;
    assert!(catalog.starts_with("Cfg.Lang = {}\n\nCfg.Lang[\"de\"] = {\n"));

    Ok(())
}

#[test]
fn test_run_invalid_folder_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;

    let output = run_with_input(
        test.run_command()
            .args(["--table", "MyAddon", "--path", "missing"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid folder path: missing"));
    assert!(!test.root().join("translated").exists());
    assert!(!test.root().join("languages.lua").exists());

    Ok(())
}

#[test]
fn test_run_invalid_table_name_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;

    let output = run_with_input(
        test.run_command()
            .args(["--table", "My Addon", "--path", "addon"]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("translated").exists());

    Ok(())
}

#[test]
fn test_run_refuses_non_empty_output_without_force() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;
    test.write_file("translated/keep.txt", "old")?;
    test.write_file("translated/unrelated.lua", "print(\"Hello world\")\n")?;

    let output = run_with_input(
        test.run_command()
            .args(["--table", "MyAddon", "--path", "addon"]),
        "y\ny\n",
    )?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));
    assert!(!test.root().join("translated/lua").exists());

    let output = run_with_input(
        test.run_command()
            .args(["--table", "MyAddon", "--path", "addon", "--force"]),
        "y\ny\n",
    )?;
    assert!(output.status.success());
    assert_eq!(
        test.read_file("translated/lua/b.lua")?,
        "notify(MyAddon:GetLang(2))\n"
    );
    // Files that were already there are rewritten as well.
    assert_eq!(
        test.read_file("translated/unrelated.lua")?,
        "print(MyAddon:GetLang(1))\n"
    );
    assert_eq!(test.read_file("translated/keep.txt")?, "old");

    Ok(())
}

#[test]
fn test_run_output_inside_source_is_rejected() -> Result<()> {
    let test = CliTest::new()?;
    setup_addon(&test)?;

    let output = run_with_input(
        test.run_command().args([
            "--table", "MyAddon", "--path", "addon", "--output", "addon/out",
        ]),
        "",
    )?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("addon/out").exists());

    Ok(())
}
