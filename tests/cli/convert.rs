use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const COMMON_YAML: &str = r#"
greeting:
  hello:
    ja: こんにちは
    en: Hello
  bye:
    ja: さようなら
    en: Goodbye
"#;

#[test]
fn test_convert_nested_by_default() -> Result<()> {
    let test = CliTest::with_files(&[("translations/common.yaml", COMMON_YAML)])?;

    assert_cmd_snapshot!(test.convert_command());

    assert_eq!(
        test.read_file("locales/ja/common.json")?,
        "{\n  \"greeting\": {\n    \"hello\": \"こんにちは\",\n    \"bye\": \"さようなら\"\n  }\n}\n"
    );
    assert_eq!(
        test.read_file("locales/en/common.json")?,
        "{\n  \"greeting\": {\n    \"hello\": \"Hello\",\n    \"bye\": \"Goodbye\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_convert_flat_with_positional_dirs() -> Result<()> {
    let test = CliTest::with_files(&[("i18n/common.yaml", COMMON_YAML)])?;

    let output = test
        .convert_command()
        .args(["i18n", "public/locales", "--format", "flat"])
        .output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("public/locales/en/common.json")?,
        "{\n  \"greeting.hello\": \"Hello\",\n  \"greeting.bye\": \"Goodbye\"\n}\n"
    );
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_convert_subdirectory_becomes_namespace() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            "translations/pages/home.yaml",
            "title:\n  ja: ホーム\n  en: Home\n",
        ),
        (
            "translations/pages/users.yml",
            "title:\n  ja: ユーザー\n  en: Users\n",
        ),
    ])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("locales/en/pages.json")?,
        "{\n  \"home\": {\n    \"title\": \"Home\"\n  },\n  \"users\": {\n    \"title\": \"Users\"\n  }\n}\n"
    );
    assert!(stdout(&output).contains("Found 2 YAML files"));

    Ok(())
}

#[test]
fn test_convert_explicit_languages() -> Result<()> {
    let test = CliTest::with_files(&[("translations/common.yaml", COMMON_YAML)])?;

    let output = test.convert_command().args(["-l", "en"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert!(test.exists("locales/en/common.json"));
    assert!(!test.exists("locales/ja"));
    assert!(stdout(&output).contains("Languages: en"));

    Ok(())
}

#[test]
fn test_convert_missing_translation_fails() -> Result<()> {
    let test = CliTest::with_files(&[(
        "translations/common.yaml",
        "title:\n  ja: タイトル\n  en: Title\nsubtitle:\n  ja: サブタイトル\n",
    )])?;

    assert_cmd_snapshot!(test.convert_command());
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_convert_stops_at_first_failed_namespace() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/alpha.yaml", "a:\n  ja: あ\n  en: A\n"),
        ("translations/beta.yaml", "b:\n  ja: い\n"),
        ("translations/gamma.yaml", "c:\n  ja: う\n  en: C\n"),
    ])?;

    assert_cmd_snapshot!(test.convert_command());

    assert!(test.exists("locales/en/alpha.json"));
    assert!(!test.exists("locales/en/beta.json"));
    assert!(!test.exists("locales/en/gamma.json"));

    Ok(())
}

#[test]
fn test_convert_keep_going() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/alpha.yaml", "a:\n  ja: あ\n  en: A\n"),
        ("translations/beta.yaml", "b:\n  ja: い\n"),
        ("translations/gamma.yaml", "c:\n  ja: う\n  en: C\n"),
    ])?;

    let output = test.convert_command().arg("--keep-going").output()?;
    assert_eq!(output.status.code(), Some(1));

    assert!(test.exists("locales/en/alpha.json"));
    assert!(!test.exists("locales/en/beta.json"));
    assert!(test.exists("locales/en/gamma.json"));
    assert!(!stdout(&output).contains("skipped"));

    Ok(())
}

#[test]
fn test_convert_duplicate_key_across_files() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/pages.yaml", "home:\n  title:\n    ja: ホーム\n    en: Home\n"),
        (
            "translations/pages/home.yaml",
            "title:\n  ja: ホーム2\n  en: Home2\n",
        ),
    ])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Duplicate key found: home.title"));

    Ok(())
}

#[test]
fn test_convert_blank_message_fails() -> Result<()> {
    let test = CliTest::with_files(&[(
        "translations/common.yaml",
        "title:\n  ja:\n  en:\nbody:\n  ja: 本文\n  en: Body\n",
    )])?;

    assert_cmd_snapshot!(test.convert_command());
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_convert_empty_file_writes_empty_dictionaries() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/common.yaml", COMMON_YAML),
        ("translations/empty.yaml", ""),
    ])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("locales/ja/empty.json")?, "{}\n");
    assert_eq!(test.read_file("locales/en/empty.json")?, "{}\n");

    Ok(())
}

#[test]
fn test_convert_reports_mixed_node_as_warning() -> Result<()> {
    let test = CliTest::with_files(&[(
        "translations/common.yaml",
        "button:\n  ja: ボタン\n  en: Button\n  icon:\n    ja: アイコン\n    en: Icon\n",
    )])?;

    assert_cmd_snapshot!(test.convert_command());

    assert_eq!(
        test.read_file("locales/en/common.json")?,
        "{\n  \"button\": {\n    \"icon\": \"Icon\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_convert_uses_config_file() -> Result<()> {
    let test = CliTest::with_files(&[
        (
            ".yamlocalerc.json",
            r#"{ "sourceDir": "i18n", "outputDir": "public/locales", "format": "flat", "ignores": ["drafts/**"] }"#,
        ),
        ("i18n/common.yaml", COMMON_YAML),
        ("i18n/drafts/wip.yaml", "broken:\n  ja: 未完成\n"),
    ])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert!(test.read_file("public/locales/en/common.json")?.contains("\"greeting.hello\""));
    assert!(!test.exists("public/locales/en/drafts.json"));

    Ok(())
}

#[test]
fn test_convert_cli_overrides_config_format() -> Result<()> {
    let test = CliTest::with_files(&[
        (".yamlocalerc.json", r#"{ "format": "flat" }"#),
        ("translations/common.yaml", COMMON_YAML),
    ])?;

    let output = test.convert_command().args(["-f", "nested"]).output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    assert!(test.read_file("locales/en/common.json")?.contains("\"greeting\": {"));

    Ok(())
}

#[test]
fn test_convert_missing_source_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.convert_command().arg("nowhere"));

    Ok(())
}

#[test]
fn test_convert_no_yaml_files() -> Result<()> {
    let test = CliTest::with_files(&[("translations/readme.txt", "nothing here")])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No YAML files found in translations"));

    Ok(())
}

#[test]
fn test_convert_invalid_yaml_names_file() -> Result<()> {
    let test = CliTest::with_files(&[("translations/common.yaml", "title: [unclosed\n")])?;

    let output = test.convert_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("common.yaml"));
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_convert_rejects_invalid_format() -> Result<()> {
    let test = CliTest::with_files(&[("translations/common.yaml", COMMON_YAML)])?;

    let output = test.convert_command().args(["-f", "tree"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(!test.exists("locales"));

    Ok(())
}
