use super::WebHost;
use crate::app::dispatch::{self, Payload, Runtime, event_name, suppresses_default, translate};
use crate::app::{Event, IntersectionEntry, Presentation};
use crate::config::{DeckConfig, load_config, parse_config_json, serialize_config};
use crate::host::{ElementId, EventSource, Listener, ObserverKind, Subscription};
use crate::telemetry::{init_tracing, set_log_level};
use anyhow::{Context, Result, anyhow};
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{error, trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, TouchEvent,
};

const CONFIG_ELEMENT_ID: &str = "deck-config";

type Shared = Rc<RefCell<Runtime<WebHost>>>;

thread_local! {
    static RUNTIME: OnceCell<Shared> = const { OnceCell::new() };
}

/// Boot the deck using the TOML block in `<script id="deck-config">`, if any.
///
/// The page calls this once after the module's `init()` resolves; nothing
/// is wired before that. Later calls are ignored.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    init_tracing();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let source = window
        .document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    boot(load_config(source.as_deref())).map_err(to_js)
}

/// Boot the deck from a JSON object using the same table layout as the TOML
/// config. Used instead of `start`, not after it.
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(json: &str) -> Result<(), JsValue> {
    init_tracing();
    let config = parse_config_json(json).map_err(to_js)?;
    boot(config).map_err(to_js)
}

/// The default configuration rendered as TOML, for pages that embed their own.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<String, JsValue> {
    serialize_config(&DeckConfig::default()).map_err(to_js)
}

fn boot(config: DeckConfig) -> Result<()> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;

    if document.ready_state() == "loading" {
        let callback = Closure::once_into_js(move || {
            if let Err(err) = mount_page(config) {
                error!("Failed to mount deck: {err:#}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .map_err(js_err)
            .context("failed to wait for DOMContentLoaded")?;
        return Ok(());
    }
    mount_page(config)
}

fn mount_page(config: DeckConfig) -> Result<()> {
    if RUNTIME.with(|cell| cell.get().is_some()) {
        warn!("Deck already started; ignoring second start");
        return Ok(());
    }
    set_log_level(init_tracing(), config.log_level.as_filter_str());

    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;
    let runtime = Rc::new_cyclic(|weak| {
        let host = WebHost::new(window, document, &config, weak.clone());
        RefCell::new(Runtime {
            host,
            deck: Presentation::new(config),
        })
    });

    let subscriptions = {
        let mut guard = runtime.borrow_mut();
        let Runtime { host, deck } = &mut *guard;
        deck.mount(host);
        host.take_pending()
    };
    for subscription in subscriptions {
        wire(&runtime, subscription)?;
    }

    RUNTIME.with(|cell| cell.set(runtime).map_err(|_| anyhow!("deck runtime already set")))
}

fn wire(runtime: &Shared, subscription: Subscription) -> Result<()> {
    match subscription {
        Subscription::Intersections {
            kind,
            targets,
            threshold,
            root_margin,
        } => observe(runtime, kind, &targets, threshold, root_margin.as_deref()),
        Subscription::Listen {
            source,
            listener,
            passive,
        } => listen(runtime, source, listener, passive),
    }
}

fn observe(
    runtime: &Shared,
    kind: ObserverKind,
    targets: &[ElementId],
    threshold: f64,
    root_margin: Option<&str>,
) -> Result<()> {
    let weak = Rc::downgrade(runtime);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let Some(runtime) = weak.upgrade() else {
                return;
            };
            let entries = {
                let Ok(guard) = runtime.try_borrow() else {
                    trace!(?kind, "Deck busy; dropping intersection batch");
                    return;
                };
                entries
                    .iter()
                    .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry {
                        target: guard.host.intern(entry.target()),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                    .collect::<Vec<_>>()
            };
            dispatch::dispatch(&runtime, Event::Intersections { kind, entries });
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(js_err)
        .with_context(|| format!("failed to create {kind:?} observer"))?;

    let guard = runtime.borrow();
    for target in targets {
        if let Some(element) = guard.host.element(*target) {
            observer.observe(&element);
        }
    }
    callback.forget();
    Ok(())
}

fn listen(runtime: &Shared, source: EventSource, listener: Listener, passive: bool) -> Result<()> {
    let target: EventTarget = {
        let guard = runtime.borrow();
        match source {
            EventSource::Document => guard.host.document().clone().into(),
            EventSource::Window => guard.host.window().clone().into(),
            EventSource::Element(id) => match guard.host.element(id) {
                Some(element) => element.into(),
                None => return Ok(()),
            },
        }
    };

    let weak = Rc::downgrade(runtime);
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let Some(deck_event) = translate(listener, source, payload(listener, &event)) else {
            return;
        };
        if suppresses_default(dispatch::dispatch(&runtime, deck_event), passive) {
            event.prevent_default();
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event_name(listener),
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)
        .with_context(|| format!("failed to listen for {}", event_name(listener)))?;
    callback.forget();
    Ok(())
}

fn payload(listener: Listener, event: &web_sys::Event) -> Payload {
    match listener {
        Listener::KeyDown => event
            .dyn_ref::<KeyboardEvent>()
            .map_or(Payload::Empty, |key| Payload::Key(key.key())),
        Listener::TouchStart | Listener::TouchEnd => Payload::Touch(first_touch_y(event)),
        Listener::MouseMove => {
            event
                .dyn_ref::<MouseEvent>()
                .map_or(Payload::Empty, |mouse| Payload::Pointer {
                    client_x: mouse.client_x() as f64,
                    client_y: mouse.client_y() as f64,
                })
        }
        _ => Payload::Empty,
    }
}

fn first_touch_y(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(touch.screen_y() as f64)
}

fn js_err(value: JsValue) -> anyhow::Error {
    anyhow!("{value:?}")
}

fn to_js(err: anyhow::Error) -> JsValue {
    JsValue::from_str(&format!("{err:#}"))
}
