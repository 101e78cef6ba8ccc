use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::dom;
use crate::timer::{BrowserScheduler, Scheduler, TimerHandle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: &'static str,
    pub offset_px: u32,
    pub duration_s: f64,
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    pub stagger_ms: Option<u32>,
}

pub const CONTENT_FADE: RevealConfig = RevealConfig {
    selector: ".about-container, .skills-title, .timeline-item, .contact-container",
    offset_px: 30,
    duration_s: 0.6,
    threshold: 0.1,
    root_margin: Some("0px 0px -50px 0px"),
    stagger_ms: None,
};

pub const SKILL_CARDS: RevealConfig = RevealConfig {
    selector: ".skill-card",
    offset_px: 20,
    duration_s: 0.5,
    threshold: 0.1,
    root_margin: None,
    stagger_ms: Some(100),
};

pub const ABOUT_BOXES: RevealConfig = RevealConfig {
    selector: ".about-box",
    offset_px: 30,
    duration_s: 0.6,
    threshold: 0.2,
    root_margin: None,
    stagger_ms: Some(150),
};

impl RevealConfig {
    pub fn hidden_styles(&self) -> [(&'static str, String); 3] {
        [
            ("opacity", "0".to_string()),
            ("transform", format!("translateY({}px)", self.offset_px)),
            (
                "transition",
                format!(
                    "opacity {d}s ease, transform {d}s ease",
                    d = self.duration_s
                ),
            ),
        ]
    }
}

pub const SHOWN_STYLES: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub delay_ms: u32,
}

pub struct RevealGroup {
    stagger_ms: Option<u32>,
    revealed: Vec<bool>,
}

impl RevealGroup {
    pub fn new(config: &RevealConfig, len: usize) -> Self {
        Self {
            stagger_ms: config.stagger_ms,
            revealed: vec![false; len],
        }
    }

    // entries are (element index, is_intersecting) in notification order;
    // the stagger follows the position in the batch
    pub fn on_notify(&mut self, entries: &[(usize, bool)]) -> Vec<Reveal> {
        let mut reveals = Vec::new();
        for (position, &(index, intersecting)) in entries.iter().enumerate() {
            if !intersecting {
                continue;
            }
            match self.revealed.get_mut(index) {
                Some(done) if !*done => *done = true,
                _ => continue,
            }
            let delay_ms = self
                .stagger_ms
                .map_or(0, |step| step.saturating_mul(position as u32));
            reveals.push(Reveal { index, delay_ms });
        }
        reveals
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|done| !**done).count()
    }
}

pub fn schedule_reveals(
    reveals: &[Reveal],
    scheduler: &dyn Scheduler,
    apply: Rc<dyn Fn(usize)>,
) -> Vec<TimerHandle> {
    let mut timers = Vec::new();
    for reveal in reveals {
        if reveal.delay_ms == 0 {
            apply(reveal.index);
        } else {
            let apply = apply.clone();
            let index = reveal.index;
            timers.push(scheduler.schedule(reveal.delay_ms, Box::new(move || apply(index))));
        }
    }
    timers
}

pub struct RevealHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn install(
    config: RevealConfig,
    scheduler: Rc<dyn Scheduler>,
) -> Result<RevealHandle, JsValue> {
    let document = dom::document()?;
    let nodes = document.query_selector_all(config.selector)?;
    let elements: Rc<Vec<HtmlElement>> = Rc::new(
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
    );

    for element in elements.iter() {
        for (property, value) in config.hidden_styles() {
            element.style().set_property(property, &value)?;
        }
    }

    let group = Rc::new(RefCell::new(RevealGroup::new(&config, elements.len())));
    let timers: Rc<RefCell<Vec<TimerHandle>>> = Rc::default();
    let apply: Rc<dyn Fn(usize)> = {
        let elements = elements.clone();
        Rc::new(move |index| {
            if let Some(element) = elements.get(index) {
                if let Err(e) = dom::set_styles(element, &SHOWN_STYLES) {
                    log::warn!("reveal: could not style element: {:?}", e);
                }
            }
        })
    };

    let callback = {
        let elements = elements.clone();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<(usize, bool)> = entries
                .iter()
                .filter_map(|entry| {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target: JsValue = entry.target().into();
                    elements
                        .iter()
                        .position(|el| AsRef::<JsValue>::as_ref(el) == &target)
                        .map(|index| (index, entry.is_intersecting()))
                })
                .collect();

            let mut group = group.borrow_mut();
            let reveals = group.on_notify(&batch);
            for reveal in &reveals {
                observer.unobserve(&elements[reveal.index]);
            }
            if group.remaining() == 0 {
                observer.disconnect();
            }
            let pending = schedule_reveals(&reveals, scheduler.as_ref(), apply.clone());
            timers.borrow_mut().extend(pending);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    if let Some(margin) = config.root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in elements.iter() {
        observer.observe(element);
    }

    log::debug!("reveal: observing {} x {}", elements.len(), config.selector);
    Ok(RevealHandle {
        observer,
        _callback: callback,
    })
}

#[hook]
pub fn use_reveal(config: RevealConfig) {
    use_effect_with_deps(
        move |config| {
            let handle = match install(*config, Rc::new(BrowserScheduler)) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("reveal: {} not installed: {:?}", config.selector, e);
                    None
                }
            };
            move || drop(handle)
        },
        config,
    );
}
