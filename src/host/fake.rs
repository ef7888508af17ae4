use super::{ElementId, Host, ScrollBehavior, Subscription, TimerToken};
use crate::geometry::Rect;
use crate::transform::Transform;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;

/// One element of the in-memory page. Selectors are matched verbatim
/// against the labels listed in `matches`.
#[derive(Debug, Default, Clone)]
pub(crate) struct FakeElement {
    pub matches: Vec<String>,
    pub parent: Option<ElementId>,
    pub attributes: HashMap<String, String>,
    pub classes: BTreeSet<String>,
    pub offset_top: f64,
    pub offset_height: f64,
    pub rect: Rect,
    pub scroll_top: f64,
    pub transform: Option<Transform>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub elements: Vec<FakeElement>,
    pub viewport_height: f64,
    pub hidden: bool,
    pub icons_available: bool,
    pub icon_renders: usize,
    pub scrolled_to: Vec<(ElementId, ScrollBehavior)>,
    pub timers: Vec<(TimerToken, Duration)>,
    pub cleared_timers: Vec<TimerToken>,
    pub fired_timers: Vec<TimerToken>,
    pub subscriptions: Vec<Subscription>,
    next_timer: u64,
}

impl FakeHost {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            icons_available: true,
            ..Self::default()
        }
    }

    pub fn add(&mut self, selectors: &[&str]) -> ElementId {
        self.elements.push(FakeElement {
            matches: selectors.iter().map(|s| s.to_string()).collect(),
            ..FakeElement::default()
        });
        ElementId(self.elements.len() as u32 - 1)
    }

    pub fn el(&mut self, id: ElementId) -> &mut FakeElement {
        &mut self.elements[id.0 as usize]
    }

    pub fn get(&self, id: ElementId) -> &FakeElement {
        &self.elements[id.0 as usize]
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.get(id).classes.contains(class)
    }

    pub fn transform_css(&self, id: ElementId) -> Option<String> {
        self.get(id).transform.map(|t| t.to_css())
    }

    /// Standard deck: container, `count` slides of `height` each with ids
    /// `slide-N`, and a nav link per slide.
    pub fn with_deck(count: usize, height: f64) -> (Self, ElementId, Vec<ElementId>, Vec<ElementId>) {
        let mut host = FakeHost::new(height);
        let container = host.add(&["#slide-container"]);
        let slides = (0..count)
            .map(|i| {
                let slide = host.add(&[".slide"]);
                let el = host.el(slide);
                el.parent = Some(container);
                el.offset_top = i as f64 * height;
                el.offset_height = height;
                el.attributes.insert("id".into(), format!("slide-{i}"));
                slide
            })
            .collect::<Vec<_>>();
        let links = (0..count)
            .map(|i| {
                let link = host.add(&["#slide-nav a"]);
                host.el(link)
                    .attributes
                    .insert("href".into(), format!("#slide-{i}"));
                link
            })
            .collect::<Vec<_>>();
        (host, container, slides, links)
    }

    pub fn active_timers(&self) -> Vec<TimerToken> {
        self.timers
            .iter()
            .map(|(token, _)| *token)
            .filter(|token| !self.cleared_timers.contains(token))
            .collect()
    }
}

impl Host for FakeHost {
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.matches.iter().any(|m| m == selector))
            .map(|(idx, _)| ElementId(idx as u32))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|el| el.attributes.get("id").map(String::as_str) == Some(id))
            .map(|idx| ElementId(idx as u32))
    }

    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        let mut current = Some(element);
        while let Some(id) = current {
            let el = self.get(id);
            if el.matches.iter().any(|m| m == selector) {
                return Some(id);
            }
            current = el.parent;
        }
        None
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.get(element).attributes.get(name).cloned()
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        self.get(element).offset_top
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        self.get(element).offset_height
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.get(element).rect
    }

    fn scroll_top(&self, element: ElementId) -> f64 {
        self.get(element).scroll_top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        self.el(element).classes.insert(class.to_string());
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        self.el(element).classes.remove(class);
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        self.el(element).transform = Some(transform);
    }

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior) {
        self.scrolled_to.push((element, behavior));
    }

    fn render_icons(&mut self) -> bool {
        if self.icons_available {
            self.icon_renders += 1;
        }
        self.icons_available
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        self.next_timer += 1;
        let token = TimerToken(self.next_timer);
        self.timers.push((token, delay));
        token
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.cleared_timers.push(token);
    }

    fn timer_fired(&mut self, token: TimerToken) {
        self.fired_timers.push(token);
    }

    fn subscribe(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }
}
