//! Parsing of the bundled shell settings

use mocli_core::prelude::*;

use super::types::ShellSettings;

/// Parse and validate settings from TOML source
pub fn parse_settings(content: &str) -> Result<ShellSettings> {
    let settings: ShellSettings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Parse settings, falling back to defaults on any error
///
/// The settings ship inside the page, so a bad file is a packaging mistake;
/// the shell still has to mount.
pub fn settings_or_default(content: &str) -> ShellSettings {
    match parse_settings(content) {
        Ok(settings) => {
            debug!(
                "Loaded shell settings: initial_section={}, reset_after_ms={}",
                settings.navigation.initial_section, settings.feedback.reset_after_ms
            );
            settings
        }
        Err(e) => {
            warn!("Failed to parse shell settings, using defaults: {}", e);
            ShellSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocli_core::Section;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings, ShellSettings::default());
        assert_eq!(settings.navigation.initial_section, Section::GettingStarted);
        assert_eq!(settings.feedback.reset_after_ms, 2000);
    }

    #[test]
    fn test_full_file() {
        let content = r#"
[navigation]
initial_section = "commands"

[feedback]
reset_after_ms = 1500
"#;
        let settings = parse_settings(content).unwrap();
        assert_eq!(settings.navigation.initial_section, Section::Commands);
        assert_eq!(settings.feedback.reset_after_ms, 1500);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let settings = parse_settings("[navigation]\ninitial_section = \"api\"\n").unwrap();
        assert_eq!(settings.navigation.initial_section, Section::Api);
        assert_eq!(settings.feedback.reset_after_ms, 2000);
    }

    #[test]
    fn test_unknown_section_is_a_parse_error() {
        let result = parse_settings("[navigation]\ninitial_section = \"faq\"\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_zero_delay_is_invalid() {
        let result = parse_settings("[feedback]\nreset_after_ms = 0\n");
        assert!(matches!(result, Err(Error::ConfigInvalid { .. })));
    }

    #[test]
    fn test_settings_or_default_falls_back() {
        let settings = settings_or_default("[feedback]\nreset_after_ms = \"soon\"\n");
        assert_eq!(settings, ShellSettings::default());

        let settings = settings_or_default("[feedback]\nreset_after_ms = 0\n");
        assert_eq!(settings, ShellSettings::default());
    }

    #[test]
    fn test_settings_serialize_round_trip() {
        let original = parse_settings("[navigation]\ninitial_section = \"examples\"\n").unwrap();
        let text = toml::to_string(&original).unwrap();
        assert!(text.contains("initial_section = \"examples\""));
        assert_eq!(parse_settings(&text).unwrap(), original);
    }
}
