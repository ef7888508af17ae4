//! Glue between raw listener callbacks and `Presentation::update`.
//!
//! Hosts read whatever their native event carries into a [`Payload`], map
//! it with [`translate`], and deliver it through [`dispatch`], which owns
//! the single-borrow rule for the shared runtime.

use super::messages::{Disposition, Event, Key};
use super::state::Presentation;
use crate::host::{EventSource, Host, Listener};
use std::cell::RefCell;
use tracing::trace;

/// A host paired with the deck it drives.
pub struct Runtime<H> {
    pub host: H,
    pub deck: Presentation,
}

/// Data a listener read off its native event.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Key(String),
    /// Screen Y of the first changed touch; `None` when the list was empty.
    Touch(Option<f64>),
    Pointer { client_x: f64, client_y: f64 },
}

/// DOM event type a listener is registered for.
pub fn event_name(listener: Listener) -> &'static str {
    match listener {
        Listener::Click => "click",
        Listener::Scroll => "scroll",
        Listener::KeyDown => "keydown",
        Listener::TouchStart => "touchstart",
        Listener::TouchEnd => "touchend",
        Listener::MouseMove => "mousemove",
        Listener::MouseLeave => "mouseleave",
        Listener::Resize => "resize",
        Listener::VisibilityChange => "visibilitychange",
    }
}

/// Map a listener callback to a deck event. `None` when the payload lacks
/// what the event needs or the listener is bound to the wrong source.
pub fn translate(listener: Listener, source: EventSource, payload: Payload) -> Option<Event> {
    match (listener, source, payload) {
        (Listener::Click, EventSource::Element(link), _) => Some(Event::NavLinkClicked(link)),
        (Listener::Scroll, _, _) => Some(Event::ContainerScrolled),
        (Listener::KeyDown, _, Payload::Key(key)) => Some(Event::KeyPressed(Key::from_dom(&key))),
        (Listener::TouchStart, _, Payload::Touch(Some(screen_y))) => {
            Some(Event::TouchStarted { screen_y })
        }
        (Listener::TouchEnd, _, Payload::Touch(Some(screen_y))) => {
            Some(Event::TouchEnded { screen_y })
        }
        (
            Listener::MouseMove,
            EventSource::Element(card),
            Payload::Pointer { client_x, client_y },
        ) => Some(Event::PointerMoved {
            card,
            client_x,
            client_y,
        }),
        (Listener::MouseLeave, EventSource::Element(card), _) => Some(Event::PointerLeft(card)),
        (Listener::Resize, _, _) => Some(Event::Resized),
        (Listener::VisibilityChange, _, _) => Some(Event::VisibilityChanged),
        _ => None,
    }
}

/// Passive listeners cannot cancel their event, whatever the deck asks for.
pub fn suppresses_default(disposition: Disposition, passive: bool) -> bool {
    disposition == Disposition::PreventDefault && !passive
}

/// Deliver one event. A runtime that is already borrowed means the event
/// arrived from inside another dispatch; it is dropped.
pub fn dispatch<H: Host>(runtime: &RefCell<Runtime<H>>, event: Event) -> Disposition {
    let Ok(mut guard) = runtime.try_borrow_mut() else {
        trace!(?event, "Deck busy; dropping re-entrant event");
        return Disposition::Default;
    };
    let Runtime { host, deck } = &mut *guard;
    if let Event::TimerFired(token) = &event {
        host.timer_fired(*token);
    }
    deck.update(host, event)
}
