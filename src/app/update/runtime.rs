use super::super::state::Presentation;
use super::{Effect, TimerPurpose};
use crate::host::{Host, ScrollBehavior};
use tracing::{debug, trace};

impl Presentation {
    pub(super) fn run_effect<H: Host + ?Sized>(&mut self, host: &mut H, effect: Effect) {
        match effect {
            Effect::AddClass { element, class } => host.add_class(element, &class),
            Effect::RemoveClass { element, class } => host.remove_class(element, &class),
            Effect::SetTransform { element, transform } => {
                trace!(?element, %transform, "Applying transform");
                host.set_transform(element, transform);
            }
            Effect::ScrollTo(element) => {
                let behavior = if self.config.smooth_scroll {
                    ScrollBehavior::Smooth
                } else {
                    ScrollBehavior::Instant
                };
                host.scroll_into_view(element, behavior);
            }
            Effect::RenderIcons => {
                if !host.render_icons() {
                    debug!("Icon library unavailable; skipping icon render");
                }
            }
            Effect::Debounce(purpose) => {
                let debouncer = match purpose {
                    TimerPurpose::Resize => &mut self.resize_debounce,
                    TimerPurpose::Parallax => &mut self.parallax_debounce,
                };
                if let Some(previous) = debouncer.take_pending() {
                    host.clear_timeout(previous);
                }
                let token = host.set_timeout(debouncer.wait());
                debouncer.arm(token);
                trace!(?purpose, ?token, "Armed debounce timer");
            }
        }
    }
}
