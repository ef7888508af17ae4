use super::messages::{Disposition, Event};
use super::state::Presentation;
use crate::host::{ElementId, Host};
use crate::transform::Transform;
use tracing::trace;

mod keyboard;
mod lifecycle;
mod navigation;
mod parallax;
mod reveal;
mod runtime;
mod tilt;
mod touch;

/// Which debouncer a scheduled timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimerPurpose {
    Resize,
    Parallax,
}

/// Page mutations computed by the handlers and performed by `run_effect`.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    AddClass { element: ElementId, class: String },
    RemoveClass { element: ElementId, class: String },
    SetTransform { element: ElementId, transform: Transform },
    ScrollTo(ElementId),
    RenderIcons,
    Debounce(TimerPurpose),
}

impl Presentation {
    /// Apply one host event to the page.
    pub fn update<H: Host + ?Sized>(&mut self, host: &mut H, event: Event) -> Disposition {
        if !self.mounted {
            trace!(?event, "Ignoring event before mount");
            return Disposition::Default;
        }

        let mut effects = Vec::new();
        let disposition = match event {
            Event::Intersections { kind, entries } => {
                self.handle_intersections(&*host, kind, &entries, &mut effects);
                Disposition::Default
            }
            Event::NavLinkClicked(link) => self.handle_nav_click(&*host, link, &mut effects),
            Event::ContainerScrolled => {
                self.handle_container_scrolled(&*host, &mut effects);
                Disposition::Default
            }
            Event::KeyPressed(key) => self.handle_key(&*host, &key, &mut effects),
            Event::TouchStarted { screen_y } => {
                self.handle_touch_start(screen_y);
                Disposition::Default
            }
            Event::TouchEnded { screen_y } => {
                self.handle_touch_end(&*host, screen_y, &mut effects);
                Disposition::Default
            }
            Event::PointerMoved {
                card,
                client_x,
                client_y,
            } => {
                self.handle_pointer_moved(&*host, card, client_x, client_y, &mut effects);
                Disposition::Default
            }
            Event::PointerLeft(card) => {
                self.handle_pointer_left(card, &mut effects);
                Disposition::Default
            }
            Event::Resized => {
                effects.push(Effect::Debounce(TimerPurpose::Resize));
                Disposition::Default
            }
            Event::VisibilityChanged => {
                self.handle_visibility_changed(&*host, &mut effects);
                Disposition::Default
            }
            Event::TimerFired(token) => {
                self.handle_timer_fired(&*host, token, &mut effects);
                Disposition::Default
            }
        };

        for effect in effects {
            self.run_effect(host, effect);
        }
        disposition
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use super::super::state::Presentation;
    use crate::config::DeckConfig;
    use crate::host::fake::FakeHost;

    pub(crate) fn mounted(host: &mut FakeHost) -> Presentation {
        mounted_with(host, DeckConfig::default())
    }

    pub(crate) fn mounted_with(host: &mut FakeHost, config: DeckConfig) -> Presentation {
        let mut deck = Presentation::new(config);
        deck.mount(host);
        deck
    }
}
