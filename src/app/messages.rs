use crate::host::{ElementId, ObserverKind, TimerToken};

/// Events delivered by the host to `Presentation::update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Intersections {
        kind: ObserverKind,
        entries: Vec<IntersectionEntry>,
    },
    NavLinkClicked(ElementId),
    ContainerScrolled,
    KeyPressed(Key),
    TouchStarted {
        screen_y: f64,
    },
    TouchEnded {
        screen_y: f64,
    },
    PointerMoved {
        card: ElementId,
        client_x: f64,
        client_y: f64,
    },
    PointerLeft(ElementId),
    Resized,
    VisibilityChanged,
    TimerFired(TimerToken),
}

/// One observed element in an intersection batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Keys the navigator cares about; everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    PageDown,
    PageUp,
    Home,
    End,
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "PageDown" => Key::PageDown,
            "PageUp" => Key::PageUp,
            "Home" => Key::Home,
            "End" => Key::End,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Whether the host must suppress the default action of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disposition {
    #[default]
    Default,
    PreventDefault,
}
