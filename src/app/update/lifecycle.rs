use super::super::state::Presentation;
use super::Effect;
use crate::host::{EventSource, Host, Listener, ObserverKind, Subscription, TimerToken};
use tracing::{debug, info, trace};

impl Presentation {
    /// Discover the deck's elements, render icons and request every
    /// listener and intersection watch from the host.
    ///
    /// Absent elements simply produce no subscriptions. Mounting twice is a
    /// no-op.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            debug!("Deck already mounted");
            return;
        }

        self.run_effect(host, Effect::RenderIcons);

        let fade_targets = host.query_all(&self.config.fade_selector);
        if !fade_targets.is_empty() {
            host.subscribe(Subscription::Intersections {
                kind: ObserverKind::Reveal,
                targets: fade_targets.clone(),
                threshold: self.config.reveal_threshold,
                root_margin: Some(self.config.reveal_root_margin.clone()),
            });
        }

        let slides = host.query_all(&self.config.slide_selector);
        if !slides.is_empty() {
            host.subscribe(Subscription::Intersections {
                kind: ObserverKind::SlideNav,
                targets: slides.clone(),
                threshold: self.config.nav_threshold,
                root_margin: None,
            });
        }

        self.nav_links = host.query_all(&self.config.nav_link_selector);
        for link in &self.nav_links {
            host.subscribe(listen(EventSource::Element(*link), Listener::Click, false));
        }

        self.container = host.query_first(&self.config.container_selector);
        match self.container {
            Some(container) => {
                let scroll = listen(EventSource::Element(container), Listener::Scroll, false);
                host.subscribe(scroll);
            }
            None => debug!(
                selector = %self.config.container_selector,
                "No slide container; parallax disabled"
            ),
        }

        host.subscribe(listen(EventSource::Document, Listener::KeyDown, false));
        host.subscribe(listen(EventSource::Document, Listener::TouchStart, true));
        host.subscribe(listen(EventSource::Document, Listener::TouchEnd, true));

        let cards = host.query_all(&self.config.card_selector);
        for card in &cards {
            host.subscribe(listen(EventSource::Element(*card), Listener::MouseMove, false));
            host.subscribe(listen(EventSource::Element(*card), Listener::MouseLeave, false));
        }

        host.subscribe(listen(EventSource::Window, Listener::Resize, false));
        host.subscribe(listen(
            EventSource::Document,
            Listener::VisibilityChange,
            false,
        ));

        self.mounted = true;
        info!(
            slides = slides.len(),
            nav_links = self.nav_links.len(),
            fade_targets = fade_targets.len(),
            cards = cards.len(),
            "Mounted slide deck"
        );
        if let Some(banner) = &self.config.banner {
            info!(title = %banner.title, subtitle = ?banner.subtitle, "Presentation ready");
        }
    }

    pub(super) fn handle_visibility_changed<H: Host + ?Sized>(
        &self,
        host: &H,
        effects: &mut Vec<Effect>,
    ) {
        if !host.is_hidden() {
            effects.push(Effect::RenderIcons);
        }
    }

    pub(super) fn handle_timer_fired<H: Host + ?Sized>(
        &mut self,
        host: &H,
        token: TimerToken,
        effects: &mut Vec<Effect>,
    ) {
        if self.resize_debounce.fire(token) {
            debug!("Resize settled; re-rendering icons");
            effects.push(Effect::RenderIcons);
        } else if self.parallax_debounce.fire(token) {
            self.handle_parallax(host, effects);
        } else {
            trace!(?token, "Ignoring stale timer");
        }
    }
}

fn listen(source: EventSource, listener: Listener, passive: bool) -> Subscription {
    Subscription::Listen {
        source,
        listener,
        passive,
    }
}
