use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✅ Created .i18nauditrc.json

    ----- stderr -----
    ");

    let content = test.read_file(".i18nauditrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["marker"], "useTranslation");
    assert_eq!(parsed["previewLimit"], 5);
    assert_eq!(
        parsed["files"].as_array().map(Vec::len),
        Some(7),
        "Config should list the default screens"
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nauditrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .i18nauditrc.json already exists
    ");
    assert_eq!(test.read_file(".i18nauditrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("app/(tabs)/cases.tsx", r#"<Text>{"No cases found"}</Text>"#)?;

    assert_cmd_snapshot!(test.command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    🌍 i18n Checker - Patrick Travel Services Mobile
    ============================================================

    📄 app/(tabs)/cases.tsx
      ❌ Missing: import { useTranslation } from 'react-i18next';
      ❌ Missing: const { t } = useTranslation();
      Found 1 potential hardcoded strings
        "No cases found" → t('cases.noCasesFound')

    ✅ Check complete!

    See I18N_IMPLEMENTATION.md for full translation guide

    ----- stderr -----
    "#);

    Ok(())
}
