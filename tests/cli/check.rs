use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_valid_translations() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/common.yaml", "title:\n  ja: タイトル\n  en: Title\n"),
        ("translations/pages/home.yaml", "heading:\n  ja: ホーム\n  en: Home\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command());
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_check_reports_every_namespace() -> Result<()> {
    let test = CliTest::with_files(&[
        ("translations/alpha.yaml", "a:\n  ja: あ\n"),
        ("translations/beta.yaml", "b:\n  ja: い\n  en: B\n"),
        ("translations/gamma.yaml", "c:\n  en: C\n"),
    ])?;

    assert_cmd_snapshot!(test.check_command());
    assert!(!test.exists("locales"));

    Ok(())
}

#[test]
fn test_check_explicit_language_missing_everywhere() -> Result<()> {
    let test = CliTest::with_files(&[(
        "translations/common.yaml",
        "title:\n  ja: タイトル\n  en: Title\n",
    )])?;

    let output = test.check_command().args(["--languages", "ja,en,fr"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("= missing: fr"));

    Ok(())
}

#[test]
fn test_check_positional_source_dir() -> Result<()> {
    let test = CliTest::with_files(&[("i18n/common.yaml", "title:\n  ja: タイトル\n")])?;

    let output = test.check_command().arg("i18n").output()?;
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Detected languages: ja"));

    Ok(())
}

#[test]
fn test_check_invalid_config() -> Result<()> {
    let test = CliTest::with_files(&[
        (".yamlocalerc.json", r#"{ "ignores": ["[unclosed"] }"#),
        ("translations/common.yaml", "title:\n  ja: タイトル\n"),
    ])?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}
