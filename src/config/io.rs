use super::models::DeckConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use tracing::{debug, info, warn};

/// Parse a TOML document made of the `[selectors]`, `[parallax]`, ... tables.
pub fn parse_config(contents: &str) -> Result<DeckConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("invalid deck config TOML")?;
    Ok(DeckConfig::from(tables).sanitized())
}

/// Parse the same table layout from JSON, as handed over by page scripts.
pub fn parse_config_json(contents: &str) -> Result<DeckConfig> {
    let tables: ConfigTables =
        serde_json::from_str(contents).context("invalid deck config JSON")?;
    Ok(DeckConfig::from(tables).sanitized())
}

pub fn serialize_config(config: &DeckConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize deck config")
}

/// Resolve the embedded config block, falling back to defaults on error.
pub fn load_config(source: Option<&str>) -> DeckConfig {
    let Some(contents) = source.filter(|text| !text.trim().is_empty()) else {
        info!("No embedded deck config; using defaults");
        return DeckConfig::default();
    };

    match parse_config(contents) {
        Ok(cfg) => {
            debug!("Parsed embedded deck config");
            cfg
        }
        Err(err) => {
            warn!("Falling back to default deck config: {err:#}");
            DeckConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg, DeckConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = parse_config(
            r#"
            [parallax]
            hero_factor = 0.5
            debounce = true

            [logging]
            log_level = "trace"
            "#,
        )
        .expect("partial config parses");

        assert_eq!(cfg.hero_factor, 0.5);
        assert!(cfg.parallax_debounce);
        assert_eq!(cfg.parallax_debounce_ms, 10);
        assert_eq!(cfg.image_factor, 0.15);
        assert_eq!(cfg.log_level, LogLevel::Trace);
        assert_eq!(cfg.slide_selector, ".slide");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[parallax\nhero_factor = ").is_err());
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let cfg = load_config(Some("[touch]\nswipe_threshold_px = \"far\""));
        assert_eq!(cfg, DeckConfig::default());
    }

    #[test]
    fn json_config_uses_same_tables() {
        let cfg = parse_config_json(
            r##"{"selectors": {"container": "#deck"}, "touch": {"swipe_threshold_px": 80.0}}"##,
        )
        .expect("json config parses");
        assert_eq!(cfg.container_selector, "#deck");
        assert_eq!(cfg.swipe_threshold_px, 80.0);
        assert_eq!(cfg.nav_link_selector, "#slide-nav a");
    }

    #[test]
    fn enabled_banner_table_keeps_default_subtitle() {
        let implicit = parse_config("").expect("empty config parses");
        let explicit = parse_config("[banner]\nenabled = true").expect("banner table parses");
        assert_eq!(explicit.banner, implicit.banner);
        assert!(explicit.banner.and_then(|banner| banner.subtitle).is_some());
    }

    #[test]
    fn banner_can_be_disabled() {
        let cfg = parse_config("[banner]\nenabled = false").expect("banner table parses");
        assert!(cfg.banner.is_none());
    }

    #[test]
    fn out_of_range_values_are_sanitized() {
        let cfg = parse_config(
            r#"
            [reveal]
            threshold = 4.0

            [tilt]
            divisor = 0.0
            "#,
        )
        .expect("config parses");
        assert_eq!(cfg.reveal_threshold, 1.0);
        assert_eq!(cfg.tilt_divisor, 20.0);
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut original = DeckConfig::default();
        original.active_class = "is-current".to_string();
        original.banner = None;
        let text = serialize_config(&original).expect("config serializes");
        let parsed = parse_config(&text).expect("serialized config parses");
        assert_eq!(parsed, original);
    }
}
