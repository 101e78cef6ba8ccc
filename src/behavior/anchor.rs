use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

pub const HEADER_SELECTOR: &str = ".header";

// bare `#` yields None
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

pub fn smooth_scroll_to(href: &str) -> Result<bool, JsValue> {
    let id = match fragment_target(href) {
        Some(id) => id,
        None => return Ok(false),
    };
    let window = dom::window()?;
    let document = dom::document()?;
    let section = match dom::html_element_by_id(&document, id) {
        Some(section) => section,
        None => {
            log::warn!("anchor: no section #{}", id);
            return Ok(false);
        }
    };
    let header_height = document
        .query_selector(HEADER_SELECTOR)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| f64::from(header.offset_height()));

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top()), header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_named_fragments_are_targets() {
        assert_eq!(fragment_target("#about"), Some("about"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target(""), None);
        assert_eq!(fragment_target("/blog#about"), None);
        assert_eq!(fragment_target("https://example.com"), None);
    }

    #[test]
    fn target_clears_the_header() {
        assert_eq!(scroll_target(1200.0, 72.0), 1128.0);
        assert_eq!(scroll_target(0.0, 72.0), -72.0);
    }
}
