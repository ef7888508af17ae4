use super::super::messages::{Disposition, Key};
use super::super::state::Presentation;
use super::Effect;
use crate::geometry::{Step, current_slide_index, step_target};
use crate::host::Host;
use tracing::{debug, info};

impl Presentation {
    pub(super) fn handle_key<H: Host + ?Sized>(
        &self,
        host: &H,
        key: &Key,
        effects: &mut Vec<Effect>,
    ) -> Disposition {
        let Some(step) = Self::step_for_key(key) else {
            return Disposition::Default;
        };
        self.navigate(host, step, effects);
        Disposition::PreventDefault
    }

    pub(super) fn step_for_key(key: &Key) -> Option<Step> {
        match key {
            Key::ArrowDown | Key::PageDown => Some(Step::Next),
            Key::ArrowUp | Key::PageUp => Some(Step::Previous),
            Key::Home => Some(Step::First),
            Key::End => Some(Step::Last),
            Key::Other(_) => None,
        }
    }

    /// Move one step relative to the slide currently at the viewport midpoint.
    pub(super) fn navigate<H: Host + ?Sized>(&self, host: &H, step: Step, effects: &mut Vec<Effect>) {
        let (slides, bounds) = self.slide_bounds(host);
        let current = current_slide_index(
            &bounds,
            self.container_scroll_top(host),
            host.viewport_height(),
        );

        match step_target(current, step, slides.len()) {
            Some(target) => {
                info!(from = current, to = target, ?step, "Navigating to slide");
                effects.push(Effect::ScrollTo(slides[target]));
            }
            None => debug!(current, ?step, count = slides.len(), "No slide in that direction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mounted;
    use crate::app::{Disposition, Event, Key, Presentation};
    use crate::geometry::Step;
    use crate::host::fake::FakeHost;

    fn press(deck: &mut Presentation, host: &mut FakeHost, key: &str) -> Disposition {
        deck.update(host, Event::KeyPressed(Key::from_dom(key)))
    }

    #[test]
    fn maps_dom_keys_to_steps() {
        assert_eq!(Presentation::step_for_key(&Key::from_dom("PageDown")), Some(Step::Next));
        assert_eq!(Presentation::step_for_key(&Key::from_dom("ArrowUp")), Some(Step::Previous));
        assert_eq!(Presentation::step_for_key(&Key::from_dom("Home")), Some(Step::First));
        assert_eq!(Presentation::step_for_key(&Key::from_dom("End")), Some(Step::Last));
        assert_eq!(Presentation::step_for_key(&Key::from_dom("a")), None);
    }

    #[test]
    fn arrows_move_one_slide() {
        let (mut host, container, slides, _) = FakeHost::with_deck(4, 800.0);
        let mut deck = mounted(&mut host);
        host.el(container).scroll_top = 800.0;

        assert_eq!(press(&mut deck, &mut host, "ArrowDown"), Disposition::PreventDefault);
        assert_eq!(press(&mut deck, &mut host, "PageUp"), Disposition::PreventDefault);
        let targets: Vec<_> = host.scrolled_to.iter().map(|(el, _)| *el).collect();
        assert_eq!(targets, vec![slides[2], slides[0]]);
    }

    #[test]
    fn edges_do_not_wrap() {
        let (mut host, container, _, _) = FakeHost::with_deck(3, 800.0);
        let mut deck = mounted(&mut host);

        assert_eq!(press(&mut deck, &mut host, "ArrowUp"), Disposition::PreventDefault);
        host.el(container).scroll_top = 1600.0;
        assert_eq!(press(&mut deck, &mut host, "ArrowDown"), Disposition::PreventDefault);
        assert!(host.scrolled_to.is_empty());
    }

    #[test]
    fn home_and_end_jump_to_the_ends() {
        let (mut host, container, slides, _) = FakeHost::with_deck(5, 800.0);
        let mut deck = mounted(&mut host);

        for scroll in [0.0, 1600.0, 3200.0] {
            host.el(container).scroll_top = scroll;
            press(&mut deck, &mut host, "Home");
            press(&mut deck, &mut host, "End");
        }
        let targets: Vec<_> = host.scrolled_to.iter().map(|(el, _)| *el).collect();
        assert_eq!(
            targets,
            vec![slides[0], slides[4], slides[0], slides[4], slides[0], slides[4]]
        );
    }

    #[test]
    fn other_keys_pass_through() {
        let (mut host, ..) = FakeHost::with_deck(3, 800.0);
        let mut deck = mounted(&mut host);

        assert_eq!(press(&mut deck, &mut host, " "), Disposition::Default);
        assert_eq!(press(&mut deck, &mut host, "ArrowLeft"), Disposition::Default);
        assert!(host.scrolled_to.is_empty());
    }
}
