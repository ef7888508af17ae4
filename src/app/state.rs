use crate::config::DeckConfig;
use crate::debounce::Debouncer;
use crate::geometry::SlideBounds;
use crate::host::{ElementId, Host};

/// Controller for one presentation page.
///
/// Owns the only mutable state the deck keeps between events: the touch
/// sample and the debounce timers. Everything else is read back from the
/// host when an event arrives.
pub struct Presentation {
    pub(super) config: DeckConfig,
    pub(super) container: Option<ElementId>,
    pub(super) nav_links: Vec<ElementId>,
    pub(super) touch: TouchSample,
    pub(super) resize_debounce: Debouncer,
    pub(super) parallax_debounce: Debouncer,
    pub(super) mounted: bool,
}

/// Screen-Y coordinates of the latest touch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct TouchSample {
    pub(super) start_y: f64,
    pub(super) end_y: f64,
}

impl Presentation {
    pub fn new(config: DeckConfig) -> Self {
        let config = config.sanitized();
        Self {
            resize_debounce: Debouncer::new(config.resize_settle()),
            parallax_debounce: Debouncer::new(config.parallax_settle()),
            config,
            container: None,
            nav_links: Vec::new(),
            touch: TouchSample::default(),
            mounted: false,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Slides in presentation order with their current geometry.
    pub(super) fn slide_bounds<H: Host + ?Sized>(&self, host: &H) -> (Vec<ElementId>, Vec<SlideBounds>) {
        let slides = host.query_all(&self.config.slide_selector);
        let bounds = slides
            .iter()
            .map(|slide| SlideBounds::new(host.offset_top(*slide), host.offset_height(*slide)))
            .collect();
        (slides, bounds)
    }

    pub(super) fn container_scroll_top<H: Host + ?Sized>(&self, host: &H) -> f64 {
        self.container
            .map(|container| host.scroll_top(container))
            .unwrap_or(0.0)
    }
}
