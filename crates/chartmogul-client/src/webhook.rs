//! Inbound direction: decoding webhook callbacks.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Decode the body of an inbound webhook request into `T`.
///
/// ChartMogul delivers webhooks as JSON POST requests; any other method is
/// rejected. The caller's web framework buffers the body and hands it in as
/// bytes along with the request method.
///
/// # Errors
///
/// Returns [`Error::Generic`] when `method` is not `POST`, and
/// [`Error::Serialization`] when the body is not valid JSON for `T`.
pub fn handle_webhook<T: DeserializeOwned>(method: &str, body: &[u8]) -> Result<T> {
    if method != "POST" {
        return Err(Error::Generic(format!(
            "invalid request: method {method} not allowed"
        )));
    }

    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Event {
        event: String,
        customer_uuid: String,
    }

    #[test]
    fn post_body_is_decoded() {
        let body = br#"{"event":"customer.created","customer_uuid":"cus_1"}"#;
        let event: Event = handle_webhook("POST", body).unwrap();
        assert_eq!(
            event,
            Event {
                event: "customer.created".to_string(),
                customer_uuid: "cus_1".to_string(),
            }
        );
    }

    #[test]
    fn non_post_method_is_rejected() {
        let body = br#"{"event":"customer.created","customer_uuid":"cus_1"}"#;
        let err = handle_webhook::<Event>("GET", body).unwrap_err();
        assert!(matches!(err, Error::Generic(_)));
        assert!(err.to_string().contains("GET"));
    }

    #[test]
    fn malformed_body_is_a_serialization_error() {
        let err = handle_webhook::<Event>("POST", b"not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
