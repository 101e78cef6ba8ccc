use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    Simulated { delay_ms: u32 },
    // JSON POST, e.g. a Formspree form
    Endpoint { url: String },
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("form service answered {status}")]
    Rejected { status: u16 },
}

impl Delivery {
    pub async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        match self {
            Delivery::Simulated { delay_ms } => {
                gloo_timers::future::TimeoutFuture::new(*delay_ms).await;
                Ok(())
            }
            Delivery::Endpoint { url } => {
                let response = Request::post(url)
                    .header("Accept", "application/json")
                    .json(message)
                    .map_err(|e| DeliveryError::Encode(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| DeliveryError::Network(e.to_string()))?;
                if response.ok() {
                    Ok(())
                } else {
                    Err(DeliveryError::Rejected {
                        status: response.status(),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_as_flat_object() {
        let message = ContactMessage {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            message: "Hello there!".into(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Alice",
                "email": "alice@example.com",
                "message": "Hello there!"
            })
        );
    }

    #[test]
    fn rejection_mentions_status() {
        let err = DeliveryError::Rejected { status: 422 };
        assert_eq!(err.to_string(), "form service answered 422");
    }
}
