use super::models::{Banner, LogLevel};

pub(crate) fn default_container_selector() -> String {
    "#slide-container".to_string()
}

pub(crate) fn default_slide_selector() -> String {
    ".slide".to_string()
}

pub(crate) fn default_nav_link_selector() -> String {
    "#slide-nav a".to_string()
}

pub(crate) fn default_fade_selector() -> String {
    ".fade-in".to_string()
}

pub(crate) fn default_hero_selector() -> String {
    ".hero-particles".to_string()
}

pub(crate) fn default_parallax_image_selector() -> String {
    ".image-wrapper img".to_string()
}

pub(crate) fn default_card_selector() -> String {
    ".feature-card".to_string()
}

pub(crate) fn default_visible_class() -> String {
    "visible".to_string()
}

pub(crate) fn default_active_class() -> String {
    "active".to_string()
}

pub(crate) fn default_reveal_threshold() -> f64 {
    0.1
}

pub(crate) fn default_reveal_root_margin() -> String {
    "0px 0px -50px 0px".to_string()
}

pub(crate) fn default_nav_threshold() -> f64 {
    0.5
}

pub(crate) fn default_smooth_scroll() -> bool {
    true
}

pub(crate) fn default_hero_factor() -> f64 {
    0.3
}

pub(crate) fn default_image_factor() -> f64 {
    0.15
}

pub(crate) fn default_image_scale() -> f64 {
    1.1
}

pub(crate) fn default_parallax_debounce() -> bool {
    false
}

pub(crate) fn default_parallax_debounce_ms() -> u64 {
    10
}

pub(crate) fn default_swipe_threshold_px() -> f64 {
    50.0
}

pub(crate) fn default_tilt_divisor() -> f64 {
    20.0
}

pub(crate) fn default_tilt_shift_px() -> f64 {
    8.0
}

pub(crate) fn default_tilt_perspective_px() -> f64 {
    1000.0
}

pub(crate) fn default_resize_settle_ms() -> u64 {
    250
}

pub(crate) fn default_icon_global() -> String {
    "lucide".to_string()
}

pub(crate) fn default_icon_method() -> String {
    "createIcons".to_string()
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub(crate) fn default_banner() -> Option<Banner> {
    Some(Banner {
        title: "Smart HRIS Presentation".to_string(),
        subtitle: Some("Developed for Bachelor of IT Project".to_string()),
    })
}
