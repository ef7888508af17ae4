use serde::Deserialize;
use std::time::Duration;

/// Flat presentation configuration; built from the TOML tables in `tables.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub container_selector: String,
    pub slide_selector: String,
    pub nav_link_selector: String,
    pub fade_selector: String,
    pub hero_selector: String,
    pub parallax_image_selector: String,
    pub card_selector: String,
    pub visible_class: String,
    pub active_class: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub nav_threshold: f64,
    pub smooth_scroll: bool,
    pub hero_factor: f64,
    pub image_factor: f64,
    pub image_scale: f64,
    pub parallax_debounce: bool,
    pub parallax_debounce_ms: u64,
    pub swipe_threshold_px: f64,
    pub tilt_divisor: f64,
    pub tilt_shift_px: f64,
    pub tilt_perspective_px: f64,
    pub resize_settle_ms: u64,
    pub icon_global: String,
    pub icon_method: String,
    pub log_level: LogLevel,
    pub banner: Option<Banner>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        use crate::config::defaults::*;
        DeckConfig {
            container_selector: default_container_selector(),
            slide_selector: default_slide_selector(),
            nav_link_selector: default_nav_link_selector(),
            fade_selector: default_fade_selector(),
            hero_selector: default_hero_selector(),
            parallax_image_selector: default_parallax_image_selector(),
            card_selector: default_card_selector(),
            visible_class: default_visible_class(),
            active_class: default_active_class(),
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_root_margin(),
            nav_threshold: default_nav_threshold(),
            smooth_scroll: default_smooth_scroll(),
            hero_factor: default_hero_factor(),
            image_factor: default_image_factor(),
            image_scale: default_image_scale(),
            parallax_debounce: default_parallax_debounce(),
            parallax_debounce_ms: default_parallax_debounce_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            tilt_divisor: default_tilt_divisor(),
            tilt_shift_px: default_tilt_shift_px(),
            tilt_perspective_px: default_tilt_perspective_px(),
            resize_settle_ms: default_resize_settle_ms(),
            icon_global: default_icon_global(),
            icon_method: default_icon_method(),
            log_level: default_log_level(),
            banner: default_banner(),
        }
    }
}

impl DeckConfig {
    /// Clamp values the handlers cannot work with back into range.
    pub fn sanitized(mut self) -> Self {
        let defaults = DeckConfig::default();
        self.reveal_threshold = clamp_ratio(self.reveal_threshold, defaults.reveal_threshold);
        self.nav_threshold = clamp_ratio(self.nav_threshold, defaults.nav_threshold);
        if !self.tilt_divisor.is_finite() || self.tilt_divisor <= 0.0 {
            self.tilt_divisor = defaults.tilt_divisor;
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            self.swipe_threshold_px = defaults.swipe_threshold_px;
        }
        for factor in [
            &mut self.hero_factor,
            &mut self.image_factor,
            &mut self.tilt_shift_px,
        ] {
            if !factor.is_finite() {
                *factor = 0.0;
            }
        }
        // Zero or negative scale/perspective would collapse the element.
        if !self.image_scale.is_normal() || self.image_scale < 0.0 {
            self.image_scale = defaults.image_scale;
        }
        if !self.tilt_perspective_px.is_normal() || self.tilt_perspective_px < 0.0 {
            self.tilt_perspective_px = defaults.tilt_perspective_px;
        }
        self
    }

    pub fn resize_settle(&self) -> Duration {
        Duration::from_millis(self.resize_settle_ms)
    }

    pub fn parallax_settle(&self) -> Duration {
        Duration::from_millis(self.parallax_debounce_ms)
    }
}

fn clamp_ratio(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// Start-up banner written to the log once the deck is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: String,
    pub subtitle: Option<String>,
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
