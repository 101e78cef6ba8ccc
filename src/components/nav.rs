use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::behavior::scroll_spy::use_scroll_spy;
use crate::components::anchor_link::AnchorLink;
use crate::config;
use crate::content::{SECTIONS, SECTION_IDS};

const SHADOW_AFTER_PX: f64 = 100.0;

pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_AFTER_PX {
        "var(--shadow-md)"
    } else {
        "var(--shadow-sm)"
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let active = use_scroll_spy(SECTION_IDS);

    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(true))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header class="header" style={format!("box-shadow: {}", header_shadow(scroll_y))}>
            <nav class="nav container">
                <AnchorLink href="#home" class="nav-logo">
                    { config::OWNER_NAME }
                </AnchorLink>

                <div id="nav-menu" class={classes!("nav-menu", (*menu_open).then(|| "show"))}>
                    <ul class="nav-list">
                        { for SECTIONS.iter().enumerate().map(|(i, section)| html! {
                            <li class="nav-item">
                                <AnchorLink
                                    href={format!("#{}", section.id)}
                                    class={classes!("nav-link", (active == Some(i)).then(|| "active"))}
                                    on_navigate={on_navigate.clone()}
                                >
                                    { section.title }
                                </AnchorLink>
                            </li>
                        }) }
                    </ul>
                    <button id="nav-close" class="nav-close" aria-label="Close menu" onclick={close_menu}>
                        {"✕"}
                    </button>
                </div>

                <button
                    id="nav-toggle"
                    class="nav-toggle"
                    aria-label="Open menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={open_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}
