use yew::prelude::*;

use crate::behavior::visibility::{play_state, use_page_visible};
use crate::content::Project;

// copies tagged `true`; half the strip width lines up with the start
pub fn looped<T: Clone>(items: &[T]) -> Vec<(T, bool)> {
    items
        .iter()
        .cloned()
        .map(|item| (item, false))
        .chain(items.iter().cloned().map(|item| (item, true)))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub projects: &'static [Project],
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let visible = use_page_visible();

    html! {
        <div class="marquee-wrapper">
            <div
                id="marquee"
                class="marquee"
                style={format!("animation-play-state: {}", play_state(visible))}
            >
                { for looped(props.projects).into_iter().map(|(project, copy)| html! {
                    <article class="project-card" aria-hidden={copy.then(|| "true")}>
                        <h3 class="project-title">{ project.title }</h3>
                        <p class="project-summary">{ project.summary }</p>
                        <ul class="project-tags">
                            { for project.tags.iter().map(|tag| html! { <li>{ *tag }</li> }) }
                        </ul>
                        <a class="project-link" href={project.link} target="_blank" rel="noopener noreferrer">
                            {"View project"}
                        </a>
                    </article>
                }) }
            </div>
        </div>
    }
}
