//! Browser host for the deck, built on `web-sys`.
//!
//! `WebHost` interns DOM elements into [`ElementId`]s and queues
//! subscriptions; `bind` turns those into real listeners and observers and
//! exposes the wasm entry points.

mod bind;

pub use bind::{default_config, start, start_with_config};

use crate::app::dispatch::{self, Runtime};
use crate::app::Event;
use crate::config::DeckConfig;
use crate::geometry::Rect;
use crate::host::{ElementId, Host, ScrollBehavior, Subscription, TimerToken};
use crate::transform::Transform;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;
use std::time::Duration;
use tracing::{debug, trace, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

pub struct WebHost {
    window: Window,
    document: Document,
    elements: RefCell<Vec<Element>>,
    icon_global: String,
    icon_method: String,
    /// Dropping a `Timeout` cancels it and frees its callback.
    timers: HashMap<TimerToken, Timeout>,
    next_timer: u64,
    pending: Vec<Subscription>,
    runtime: Weak<RefCell<Runtime<WebHost>>>,
}

impl WebHost {
    pub(crate) fn new(
        window: Window,
        document: Document,
        config: &DeckConfig,
        runtime: Weak<RefCell<Runtime<WebHost>>>,
    ) -> Self {
        Self {
            window,
            document,
            elements: RefCell::new(Vec::new()),
            icon_global: config.icon_global.clone(),
            icon_method: config.icon_method.clone(),
            timers: HashMap::new(),
            next_timer: 0,
            pending: Vec::new(),
            runtime,
        }
    }

    /// Stable id for `element`; the same node always maps to the same id.
    pub(crate) fn intern(&self, element: Element) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        let wanted: &JsValue = element.as_ref();
        if let Some(idx) = elements.iter().position(|known| {
            let known: &JsValue = known.as_ref();
            known == wanted
        }) {
            return ElementId(idx as u32);
        }
        elements.push(element);
        ElementId(elements.len() as u32 - 1)
    }

    pub(crate) fn element(&self, id: ElementId) -> Option<Element> {
        self.elements.borrow().get(id.0 as usize).cloned()
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn take_pending(&mut self) -> Vec<Subscription> {
        std::mem::take(&mut self.pending)
    }

    fn html(&self, id: ElementId) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }
}

impl Host for WebHost {
    fn query_all(&self, selector: &str) -> Vec<ElementId> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                debug!(%selector, ?err, "Selector rejected by document");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|idx| list.item(idx))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| self.intern(element))
            .collect()
    }

    fn query_first(&self, selector: &str) -> Option<ElementId> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|element| self.intern(element)),
            Err(err) => {
                debug!(%selector, ?err, "Selector rejected by document");
                None
            }
        }
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.document
            .get_element_by_id(id)
            .map(|element| self.intern(element))
    }

    fn closest(&self, element: ElementId, selector: &str) -> Option<ElementId> {
        let found = self.element(element)?.closest(selector).ok()??;
        Some(self.intern(found))
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.get_attribute(name)
    }

    fn offset_top(&self, element: ElementId) -> f64 {
        self.html(element)
            .map(|el| el.offset_top() as f64)
            .unwrap_or(0.0)
    }

    fn offset_height(&self, element: ElementId) -> f64 {
        self.html(element)
            .map(|el| el.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        let Some(element) = self.element(element) else {
            return Rect::default();
        };
        let rect = element.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn scroll_top(&self, element: ElementId) -> f64 {
        self.element(element)
            .map(|el| el.scroll_top() as f64)
            .unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }

    fn is_hidden(&self) -> bool {
        self.document.hidden()
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.element(element) {
            if let Err(err) = el.class_list().add_1(class) {
                debug!(%class, ?err, "Failed to add class");
            }
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(el) = self.element(element) {
            if let Err(err) = el.class_list().remove_1(class) {
                debug!(%class, ?err, "Failed to remove class");
            }
        }
    }

    fn set_transform(&mut self, element: ElementId, transform: Transform) {
        let Some(el) = self.html(element) else {
            return;
        };
        if let Err(err) = el.style().set_property("transform", &transform.to_css()) {
            debug!(?err, "Failed to set transform");
        }
    }

    fn scroll_into_view(&mut self, element: ElementId, behavior: ScrollBehavior) {
        let Some(el) = self.element(element) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn render_icons(&mut self) -> bool {
        let library = match js_sys::Reflect::get(&self.window, &JsValue::from_str(&self.icon_global)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return false,
        };
        let Some(render) = js_sys::Reflect::get(&library, &JsValue::from_str(&self.icon_method))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
        else {
            return false;
        };
        if let Err(err) = render.call0(&library) {
            warn!(library = %self.icon_global, ?err, "Icon library failed to render");
        }
        true
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerToken {
        self.next_timer += 1;
        let token = TimerToken(self.next_timer);
        let runtime = self.runtime.clone();
        let millis = delay.as_millis().min(u32::MAX as u128) as u32;
        let timeout = Timeout::new(millis, move || {
            if let Some(runtime) = runtime.upgrade() {
                dispatch::dispatch(&runtime, Event::TimerFired(token));
            }
        });
        self.timers.insert(token, timeout);
        trace!(?token, millis, "Scheduled timer");
        token
    }

    fn clear_timeout(&mut self, token: TimerToken) {
        self.timers.remove(&token);
    }

    fn timer_fired(&mut self, token: TimerToken) {
        self.timers.remove(&token);
    }

    fn subscribe(&mut self, subscription: Subscription) {
        self.pending.push(subscription);
    }
}
