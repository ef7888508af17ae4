use super::super::state::Presentation;
use super::{Effect, TimerPurpose};
use crate::geometry::{SlideBounds, image_parallax_offset, relative_scroll};
use crate::host::Host;
use crate::transform::Transform;
use tracing::trace;

impl Presentation {
    pub(super) fn handle_container_scrolled<H: Host + ?Sized>(
        &self,
        host: &H,
        effects: &mut Vec<Effect>,
    ) {
        if self.config.parallax_debounce {
            effects.push(Effect::Debounce(TimerPurpose::Parallax));
        } else {
            self.handle_parallax(host, effects);
        }
    }

    /// Offset the hero particles and every wrapped image by the distance
    /// scrolled past their slide.
    pub(super) fn handle_parallax<H: Host + ?Sized>(&self, host: &H, effects: &mut Vec<Effect>) {
        let Some(container) = self.container else {
            return;
        };
        let scrolled = host.scroll_top(container);
        let slide_selector = &self.config.slide_selector;

        if let Some(hero) = host.query_first(&self.config.hero_selector) {
            if let Some(slide) = host.closest(hero, slide_selector) {
                let offset = relative_scroll(scrolled, host.offset_top(slide));
                effects.push(Effect::SetTransform {
                    element: hero,
                    transform: Transform::TranslateY(offset * self.config.hero_factor),
                });
            }
        }

        let images = host.query_all(&self.config.parallax_image_selector);
        for image in images {
            let Some(slide) = host.closest(image, slide_selector) else {
                continue;
            };
            let bounds = SlideBounds::new(host.offset_top(slide), host.offset_height(slide));
            // Images far from the viewport keep whatever transform they had.
            if let Some(y) = image_parallax_offset(scrolled, bounds, self.config.image_factor) {
                effects.push(Effect::SetTransform {
                    element: image,
                    transform: Transform::TranslateYScale {
                        y,
                        scale: self.config.image_scale,
                    },
                });
            }
        }
        trace!(scrolled, "Parallax pass");
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{mounted, mounted_with};
    use crate::app::Event;
    use crate::config::DeckConfig;
    use crate::host::ElementId;
    use crate::host::fake::FakeHost;

    fn decorate(host: &mut FakeHost, slide: ElementId) -> (ElementId, ElementId) {
        let hero = host.add(&[".hero-particles"]);
        host.el(hero).parent = Some(slide);
        let image = host.add(&[".image-wrapper img"]);
        host.el(image).parent = Some(slide);
        (hero, image)
    }

    #[test]
    fn hero_and_images_follow_scroll() {
        let (mut host, container, slides, _) = FakeHost::with_deck(3, 1000.0);
        let (hero, image) = decorate(&mut host, slides[1]);
        let mut deck = mounted(&mut host);

        host.el(container).scroll_top = 1200.0;
        deck.update(&mut host, Event::ContainerScrolled);

        assert_eq!(host.transform_css(hero).as_deref(), Some("translateY(60px)"));
        assert_eq!(
            host.transform_css(image).as_deref(),
            Some("translateY(30px) scale(1.1)")
        );
    }

    #[test]
    fn distant_images_keep_stale_transform() {
        let (mut host, container, slides, _) = FakeHost::with_deck(4, 1000.0);
        let (_, image) = decorate(&mut host, slides[1]);
        let mut deck = mounted(&mut host);

        host.el(container).scroll_top = 1000.0;
        deck.update(&mut host, Event::ContainerScrolled);
        let settled = host.transform_css(image);
        assert_eq!(settled.as_deref(), Some("translateY(0px) scale(1.1)"));

        host.el(container).scroll_top = 3000.0;
        deck.update(&mut host, Event::ContainerScrolled);
        assert_eq!(host.transform_css(image), settled);
    }

    #[test]
    fn layers_outside_a_slide_are_skipped() {
        let (mut host, container, _, _) = FakeHost::with_deck(2, 1000.0);
        let hero = host.add(&[".hero-particles"]);
        let mut deck = mounted(&mut host);

        host.el(container).scroll_top = 500.0;
        deck.update(&mut host, Event::ContainerScrolled);
        assert_eq!(host.transform_css(hero), None);
    }

    #[test]
    fn debounced_parallax_waits_for_the_timer() {
        let (mut host, container, slides, _) = FakeHost::with_deck(2, 1000.0);
        let (hero, _) = decorate(&mut host, slides[0]);
        let config = DeckConfig {
            parallax_debounce: true,
            ..DeckConfig::default()
        };
        let mut deck = mounted_with(&mut host, config);

        host.el(container).scroll_top = 100.0;
        deck.update(&mut host, Event::ContainerScrolled);
        deck.update(&mut host, Event::ContainerScrolled);
        assert_eq!(host.transform_css(hero), None);

        let active = host.active_timers();
        assert_eq!(active.len(), 1);
        deck.update(&mut host, Event::TimerFired(active[0]));
        assert_eq!(host.transform_css(hero).as_deref(), Some("translateY(30px)"));
    }
}
