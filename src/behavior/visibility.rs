use yew::prelude::*;

use crate::dom::{self, Subscription};

pub fn play_state(page_visible: bool) -> &'static str {
    if page_visible {
        "running"
    } else {
        "paused"
    }
}

#[hook]
pub fn use_page_visible() -> bool {
    let visible = use_state_eq(|| dom::document().map(|d| !d.hidden()).unwrap_or(true));

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = dom::document().and_then(|document| {
                    let target = document.clone();
                    Subscription::listen(&document, "visibilitychange", move |_| {
                        visible.set(!target.hidden());
                    })
                });
                if let Err(e) = &subscription {
                    log::warn!("visibilitychange listener not installed: {:?}", e);
                }
                move || drop(subscription)
            },
            (),
        );
    }

    *visible
}
