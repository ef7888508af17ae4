use super::defaults;
use super::models::{Banner, DeckConfig, LogLevel};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    selectors: SelectorsConfig,
    #[serde(default)]
    classes: ClassesConfig,
    #[serde(default)]
    reveal: RevealConfig,
    #[serde(default)]
    navigation: NavigationConfig,
    #[serde(default)]
    parallax: ParallaxConfig,
    #[serde(default)]
    touch: TouchConfig,
    #[serde(default)]
    tilt: TiltConfig,
    #[serde(default)]
    lifecycle: LifecycleConfig,
    #[serde(default)]
    icons: IconsConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    banner: BannerConfig,
}

impl From<ConfigTables> for DeckConfig {
    fn from(tables: ConfigTables) -> Self {
        DeckConfig {
            container_selector: tables.selectors.container,
            slide_selector: tables.selectors.slides,
            nav_link_selector: tables.selectors.nav_links,
            fade_selector: tables.selectors.fade_in,
            hero_selector: tables.selectors.hero_particles,
            parallax_image_selector: tables.selectors.parallax_images,
            card_selector: tables.selectors.cards,
            visible_class: tables.classes.visible,
            active_class: tables.classes.active,
            reveal_threshold: tables.reveal.threshold,
            reveal_root_margin: tables.reveal.root_margin,
            nav_threshold: tables.navigation.threshold,
            smooth_scroll: tables.navigation.smooth,
            hero_factor: tables.parallax.hero_factor,
            image_factor: tables.parallax.image_factor,
            image_scale: tables.parallax.image_scale,
            parallax_debounce: tables.parallax.debounce,
            parallax_debounce_ms: tables.parallax.debounce_ms,
            swipe_threshold_px: tables.touch.swipe_threshold_px,
            tilt_divisor: tables.tilt.divisor,
            tilt_shift_px: tables.tilt.shift_px,
            tilt_perspective_px: tables.tilt.perspective_px,
            resize_settle_ms: tables.lifecycle.resize_settle_ms,
            icon_global: tables.icons.global,
            icon_method: tables.icons.method,
            log_level: tables.logging.log_level,
            banner: if tables.banner.enabled {
                Some(Banner {
                    title: tables.banner.title,
                    subtitle: tables.banner.subtitle,
                })
            } else {
                None
            },
        }
    }
}

impl From<&DeckConfig> for ConfigTables {
    fn from(config: &DeckConfig) -> Self {
        ConfigTables {
            selectors: SelectorsConfig {
                container: config.container_selector.clone(),
                slides: config.slide_selector.clone(),
                nav_links: config.nav_link_selector.clone(),
                fade_in: config.fade_selector.clone(),
                hero_particles: config.hero_selector.clone(),
                parallax_images: config.parallax_image_selector.clone(),
                cards: config.card_selector.clone(),
            },
            classes: ClassesConfig {
                visible: config.visible_class.clone(),
                active: config.active_class.clone(),
            },
            reveal: RevealConfig {
                threshold: config.reveal_threshold,
                root_margin: config.reveal_root_margin.clone(),
            },
            navigation: NavigationConfig {
                threshold: config.nav_threshold,
                smooth: config.smooth_scroll,
            },
            parallax: ParallaxConfig {
                hero_factor: config.hero_factor,
                image_factor: config.image_factor,
                image_scale: config.image_scale,
                debounce: config.parallax_debounce,
                debounce_ms: config.parallax_debounce_ms,
            },
            touch: TouchConfig {
                swipe_threshold_px: config.swipe_threshold_px,
            },
            tilt: TiltConfig {
                divisor: config.tilt_divisor,
                shift_px: config.tilt_shift_px,
                perspective_px: config.tilt_perspective_px,
            },
            lifecycle: LifecycleConfig {
                resize_settle_ms: config.resize_settle_ms,
            },
            icons: IconsConfig {
                global: config.icon_global.clone(),
                method: config.icon_method.clone(),
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            banner: match &config.banner {
                Some(banner) => BannerConfig {
                    enabled: true,
                    title: banner.title.clone(),
                    subtitle: banner.subtitle.clone(),
                },
                None => BannerConfig {
                    enabled: false,
                    ..BannerConfig::default()
                },
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SelectorsConfig {
    #[serde(default = "defaults::default_container_selector")]
    container: String,
    #[serde(default = "defaults::default_slide_selector")]
    slides: String,
    #[serde(default = "defaults::default_nav_link_selector")]
    nav_links: String,
    #[serde(default = "defaults::default_fade_selector")]
    fade_in: String,
    #[serde(default = "defaults::default_hero_selector")]
    hero_particles: String,
    #[serde(default = "defaults::default_parallax_image_selector")]
    parallax_images: String,
    #[serde(default = "defaults::default_card_selector")]
    cards: String,
}

impl Default for SelectorsConfig {
    fn default() -> Self {
        SelectorsConfig {
            container: defaults::default_container_selector(),
            slides: defaults::default_slide_selector(),
            nav_links: defaults::default_nav_link_selector(),
            fade_in: defaults::default_fade_selector(),
            hero_particles: defaults::default_hero_selector(),
            parallax_images: defaults::default_parallax_image_selector(),
            cards: defaults::default_card_selector(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ClassesConfig {
    #[serde(default = "defaults::default_visible_class")]
    visible: String,
    #[serde(default = "defaults::default_active_class")]
    active: String,
}

impl Default for ClassesConfig {
    fn default() -> Self {
        ClassesConfig {
            visible: defaults::default_visible_class(),
            active: defaults::default_active_class(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct RevealConfig {
    #[serde(default = "defaults::default_reveal_threshold")]
    threshold: f64,
    #[serde(default = "defaults::default_reveal_root_margin")]
    root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: defaults::default_reveal_threshold(),
            root_margin: defaults::default_reveal_root_margin(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct NavigationConfig {
    #[serde(default = "defaults::default_nav_threshold")]
    threshold: f64,
    #[serde(default = "defaults::default_smooth_scroll")]
    smooth: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            threshold: defaults::default_nav_threshold(),
            smooth: defaults::default_smooth_scroll(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct ParallaxConfig {
    #[serde(default = "defaults::default_hero_factor")]
    hero_factor: f64,
    #[serde(default = "defaults::default_image_factor")]
    image_factor: f64,
    #[serde(default = "defaults::default_image_scale")]
    image_scale: f64,
    #[serde(default = "defaults::default_parallax_debounce")]
    debounce: bool,
    #[serde(default = "defaults::default_parallax_debounce_ms")]
    debounce_ms: u64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        ParallaxConfig {
            hero_factor: defaults::default_hero_factor(),
            image_factor: defaults::default_image_factor(),
            image_scale: defaults::default_image_scale(),
            debounce: defaults::default_parallax_debounce(),
            debounce_ms: defaults::default_parallax_debounce_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TouchConfig {
    #[serde(default = "defaults::default_swipe_threshold_px")]
    swipe_threshold_px: f64,
}

impl Default for TouchConfig {
    fn default() -> Self {
        TouchConfig {
            swipe_threshold_px: defaults::default_swipe_threshold_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TiltConfig {
    #[serde(default = "defaults::default_tilt_divisor")]
    divisor: f64,
    #[serde(default = "defaults::default_tilt_shift_px")]
    shift_px: f64,
    #[serde(default = "defaults::default_tilt_perspective_px")]
    perspective_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        TiltConfig {
            divisor: defaults::default_tilt_divisor(),
            shift_px: defaults::default_tilt_shift_px(),
            perspective_px: defaults::default_tilt_perspective_px(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LifecycleConfig {
    #[serde(default = "defaults::default_resize_settle_ms")]
    resize_settle_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        LifecycleConfig {
            resize_settle_ms: defaults::default_resize_settle_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct IconsConfig {
    #[serde(default = "defaults::default_icon_global")]
    global: String,
    #[serde(default = "defaults::default_icon_method")]
    method: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        IconsConfig {
            global: defaults::default_icon_global(),
            method: defaults::default_icon_method(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct BannerConfig {
    #[serde(default = "default_banner_enabled")]
    enabled: bool,
    #[serde(default = "default_banner_title")]
    title: String,
    #[serde(default = "default_banner_subtitle")]
    subtitle: Option<String>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        BannerConfig {
            enabled: default_banner_enabled(),
            title: default_banner_title(),
            subtitle: default_banner_subtitle(),
        }
    }
}

fn default_banner_enabled() -> bool {
    defaults::default_banner().is_some()
}

fn default_banner_subtitle() -> Option<String> {
    defaults::default_banner().and_then(|banner| banner.subtitle)
}

fn default_banner_title() -> String {
    defaults::default_banner()
        .map(|banner| banner.title)
        .unwrap_or_default()
}
