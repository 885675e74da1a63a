//! Tests for configuration module.

use std::io::Write;

use super::*;

#[test_log::test]
fn test_defaults_without_file() {
    tracing::debug!("Loading settings without a config file");
    let settings = Settings::load(None).expect("defaults should load");

    assert_eq!(settings.ical.prod_id, DEFAULT_PROD_ID);
    assert!(!settings.logging.level.is_empty());
}

#[test]
fn test_explicit_file_overrides_defaults() {
    let path = std::env::temp_dir().join(format!(
        "calmap-config-{}.toml",
        crate::util::uid::generate_uid()
    ));
    let mut file = std::fs::File::create(&path).expect("temp file");
    writeln!(
        file,
        "[ical]\nprod_id = \"-//Test//EN\"\n\n[output]\ninclude_defaults = true\npretty = false"
    )
    .expect("write config");

    let settings = Settings::load(Some(&path)).expect("file should load");
    std::fs::remove_file(&path).ok();

    assert_eq!(settings.ical.prod_id, "-//Test//EN");
    assert!(settings.output.include_defaults);
    assert!(!settings.output.pretty);
}

#[test]
fn test_explicit_missing_file_is_error() {
    let path = std::env::temp_dir().join("calmap-config-missing-file.toml");
    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn test_settings_debug() {
    let settings = Settings {
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        ical: IcalConfig {
            prod_id: DEFAULT_PROD_ID.to_string(),
        },
        output: OutputConfig {
            include_defaults: false,
            pretty: true,
        },
    };

    let debug_str = format!("{settings:?}");
    assert!(debug_str.contains("Settings"));
    assert!(debug_str.contains("prod_id"));
}
