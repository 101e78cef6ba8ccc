use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod dom;
mod timer;
mod contact {
    pub mod delivery;
    pub mod form;
    pub mod validation;
}
mod behavior {
    pub mod anchor;
    pub mod reveal;
    pub mod scroll_spy;
    pub mod visibility;
}
mod components {
    pub mod anchor_link;
    pub mod contact_form;
    pub mod marquee;
    pub mod nav;
    pub mod skip_link;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::skip_link::SkipLink;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

fn greet_developers() {
    gloo_console::log!(
        "%c👋 Hello Developer!",
        "color: #3b82f6; font-size: 20px; font-weight: bold;"
    );
    gloo_console::log!(
        "%cLike what you see? Let's connect!",
        "color: #6b7280; font-size: 14px;"
    );
    gloo_console::log!(
        format!("%cEmail: {}", config::CONTACT_EMAIL),
        "color: #3b82f6; font-size: 12px;"
    );
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Portfolio loaded successfully!");
            if let Some(body) = dom::document().ok().and_then(|d| d.body()) {
                if let Err(e) = body.class_list().add_1("loaded") {
                    log::warn!("could not mark body loaded: {:?}", e);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <BrowserRouter>
            <SkipLink />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    greet_developers();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
