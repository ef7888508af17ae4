use super::super::messages::IntersectionEntry;
use super::super::state::Presentation;
use super::Effect;
use crate::host::{Host, ObserverKind};
use tracing::trace;

impl Presentation {
    pub(super) fn handle_intersections<H: Host + ?Sized>(
        &self,
        host: &H,
        kind: ObserverKind,
        entries: &[IntersectionEntry],
        effects: &mut Vec<Effect>,
    ) {
        match kind {
            ObserverKind::Reveal => self.reveal_entries(entries, effects),
            ObserverKind::SlideNav => self.sync_nav_entries(host, entries, effects),
        }
    }

    /// Fade-candidates only ever gain the visible class.
    fn reveal_entries(&self, entries: &[IntersectionEntry], effects: &mut Vec<Effect>) {
        for entry in entries.iter().filter(|entry| entry.is_intersecting) {
            trace!(target_el = ?entry.target, ratio = entry.ratio, "Revealing element");
            effects.push(Effect::AddClass {
                element: entry.target,
                class: self.config.visible_class.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::mounted;
    use crate::app::{Event, IntersectionEntry};
    use crate::host::ObserverKind;
    use crate::host::fake::FakeHost;

    fn batch(target: crate::host::ElementId, is_intersecting: bool, ratio: f64) -> Event {
        Event::Intersections {
            kind: ObserverKind::Reveal,
            entries: vec![IntersectionEntry {
                target,
                is_intersecting,
                ratio,
            }],
        }
    }

    #[test]
    fn reveal_is_one_way() {
        let mut host = FakeHost::new(800.0);
        let block = host.add(&[".fade-in"]);
        let mut deck = mounted(&mut host);

        deck.update(&mut host, batch(block, false, 0.0));
        assert!(!host.has_class(block, "visible"));

        deck.update(&mut host, batch(block, true, 0.12));
        assert!(host.has_class(block, "visible"));

        deck.update(&mut host, batch(block, false, 0.0));
        deck.update(&mut host, batch(block, true, 0.5));
        deck.update(&mut host, batch(block, false, 0.0));
        assert!(host.has_class(block, "visible"));
    }

    #[test]
    fn reveal_leaves_other_candidates_alone() {
        let mut host = FakeHost::new(800.0);
        let first = host.add(&[".fade-in"]);
        let second = host.add(&[".fade-in"]);
        let mut deck = mounted(&mut host);

        deck.update(&mut host, batch(first, true, 0.3));
        assert!(host.has_class(first, "visible"));
        assert!(!host.has_class(second, "visible"));
    }
}
