use crate::contact::delivery::Delivery;

pub const OWNER_NAME: &str = "Alex Morgan";
pub const OWNER_ROLE: &str = "Software Engineer";
pub const CONTACT_EMAIL: &str = "hello@example.com";
pub const MAIL_SUBJECT: &str = "Hello from your portfolio";

const SIMULATED_SEND_MS: u32 = 1_500;

#[cfg(debug_assertions)]
pub fn get_form_delivery() -> Delivery {
    Delivery::Simulated {
        delay_ms: SIMULATED_SEND_MS,
    }
}

/// Set `PORTFOLIO_FORM_ENDPOINT` at build time (e.g. a Formspree form URL) to
/// deliver messages for real.
#[cfg(not(debug_assertions))]
pub fn get_form_delivery() -> Delivery {
    match option_env!("PORTFOLIO_FORM_ENDPOINT") {
        Some(url) if !url.is_empty() => Delivery::Endpoint {
            url: url.to_string(),
        },
        _ => Delivery::Simulated {
            delay_ms: SIMULATED_SEND_MS,
        },
    }
}

pub fn mailto_link() -> String {
    format!(
        "mailto:{}?subject={}",
        CONTACT_EMAIL,
        urlencoding::encode(MAIL_SUBJECT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link(),
            "mailto:hello@example.com?subject=Hello%20from%20your%20portfolio"
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_builds_simulate_delivery() {
        assert_eq!(get_form_delivery(), Delivery::Simulated { delay_ms: 1_500 });
    }
}
