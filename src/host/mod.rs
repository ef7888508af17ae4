//! Capability interface between the deck controller and the page.
//!
//! The browser binding lives in `crate::web`; tests drive the controller
//! through the in-memory `fake::FakeHost`.

#[cfg(test)]
pub(crate) mod fake;

use crate::geometry::Rect;
use crate::transform::Transform;
use std::time::Duration;

/// Opaque handle to a document element, issued by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Opaque handle to a scheduled delayed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Which intersection watch produced a batch of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverKind {
    Reveal,
    SlideNav,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
    Document,
    Window,
    Element(ElementId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listener {
    Click,
    Scroll,
    KeyDown,
    TouchStart,
    TouchEnd,
    MouseMove,
    MouseLeave,
    Resize,
    VisibilityChange,
}

/// A wiring request `Presentation::mount` hands to `Host::subscribe`.
#[derive(Debug, Clone, PartialEq)]
pub enum Subscription {
    Intersections {
        kind: ObserverKind,
        targets: Vec<ElementId>,
        threshold: f64,
        root_margin: Option<String>,
    },
    Listen {
        source: EventSource,
        listener: Listener,
        passive: bool,
    },
}

/// Everything the controller needs from the page.
///
/// Reads take `&self`; mutations take `&mut self`. Missing elements and
/// capabilities are reported as `None`/`false`, never as errors.
pub trait Host {
    fn query_all(&self, selector: &str) -> Vec<ElementId>;

    fn query_first(&self, selector: &str) -> Option<ElementId> {
        self.query_all(selector).into_iter().next()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Nearest ancestor (or the element itself) matching `selector`.
    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId>;

    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn offset_top(&self, element: ElementId) -> f64;

    fn offset_height(&self, element: ElementId) -> f64;

    fn bounding_rect(&self, element: ElementId) -> Rect;

    fn scroll_top(&self, element: ElementId) -> f64;

    fn viewport_height(&self) -> f64;

    fn is_hidden(&self) -> bool;

    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);

    fn set_transform(&mut self, element: ElementId, transform: Transform);

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior);

    /// Run the icon library over the document. `false` when it is not loaded.
    fn render_icons(&mut self) -> bool;

    fn set_timeout(&mut self, delay: Duration) -> TimerToken;

    fn clear_timeout(&mut self, token: TimerToken);

    /// Called before a fired timer is delivered, so the host can release it.
    fn timer_fired(&mut self, _token: TimerToken) {}

    fn subscribe(&mut self, subscription: Subscription);
}
