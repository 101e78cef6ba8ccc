use yew::prelude::*;

const HIDDEN_TOP: &str = "-40px";
const FOCUSED_TOP: &str = "10px";

fn skip_link_style(focused: bool) -> String {
    format!(
        "position: absolute; top: {}; left: 0; background: var(--accent-color); color: white; \
         padding: 8px 16px; text-decoration: none; z-index: 1000; border-radius: 4px;",
        if focused { FOCUSED_TOP } else { HIDDEN_TOP }
    )
}

#[function_component(SkipLink)]
pub fn skip_link() -> Html {
    let focused = use_state_eq(|| false);

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    html! {
        <a href="#home" class="skip-link" style={skip_link_style(*focused)} {onfocus} {onblur}>
            {"Skip to main content"}
        </a>
    }
}
