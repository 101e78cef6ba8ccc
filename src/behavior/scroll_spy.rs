use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

pub const SPY_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn from_layout(offset_top: f64, offset_height: f64) -> Self {
        Self {
            top: offset_top - SPY_OFFSET,
            height: offset_height,
        }
    }

    pub fn contains(&self, scroll_y: f64) -> bool {
        self.top < scroll_y && scroll_y <= self.top + self.height
    }
}

// on overlap the first section wins
pub fn active_section(spans: &[Option<SectionSpan>], scroll_y: f64) -> Option<usize> {
    spans
        .iter()
        .position(|span| span.map_or(false, |s| s.contains(scroll_y)))
}

fn measure(ids: &[&str]) -> Vec<Option<SectionSpan>> {
    let document = match dom::document() {
        Ok(document) => document,
        Err(_) => return vec![None; ids.len()],
    };
    ids.iter()
        .map(|id| {
            dom::html_element_by_id(&document, id).map(|section| {
                SectionSpan::from_layout(
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
        })
        .collect()
}

#[hook]
pub fn use_scroll_spy(ids: &'static [&'static str]) -> Option<usize> {
    let (_, scroll_y) = use_window_scroll();
    let active = use_state_eq(|| None::<usize>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |scroll_y| {
                active.set(active_section(&measure(ids), *scroll_y));
                || ()
            },
            scroll_y,
        );
    }

    *active
}
