//! Contact form: field validation, the local submission gate, and the
//! form-encoded POST to the form-processing endpoint.
//!
//! Validation and gating are pure so they can be tested on the host; only
//! `send_message` touches the network. There is no automatic retry; a failed
//! submission is reported and the user resubmits.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response, UrlSearchParams};

pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mbdrzrbq";

/// Minimum interval between two submissions; a resubmit inside this window
/// is rejected locally without issuing a request.
pub const MIN_RESUBMIT_MS: f64 = 5_000.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// DOM id of the corresponding input, used to focus the first invalid
    /// field on submit.
    pub fn dom_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn first_invalid(&self) -> Option<Field> {
        if self.name.is_some() {
            Some(Field::Name)
        } else if self.email.is_some() {
            Some(Field::Email)
        } else if self.message.is_some() {
            Some(Field::Message)
        } else {
            None
        }
    }
}

pub fn validate_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some("Please enter your name.")
    } else if trimmed.chars().count() < 2 {
        Some("Name must be at least 2 characters.")
    } else if trimmed.chars().count() > 100 {
        Some("Name is too long (max 100 characters).")
    } else {
        None
    }
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Please enter your email address.");
    }
    if trimmed.len() > 254 {
        return Some("Email is too long.");
    }
    if trimmed.contains("..") {
        return Some("Email contains invalid characters.");
    }
    let shaped = match trimmed.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !trimmed.chars().any(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };
    if shaped { None } else { Some("Please enter a valid email address.") }
}

pub fn validate_message(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Please enter your message.");
    }
    if trimmed.chars().count() < 10 {
        return Some("Message must be at least 10 characters.");
    }
    if trimmed.chars().count() > 5000 {
        return Some("Message is too long (max 5000 characters).");
    }
    let lowered = trimmed.to_ascii_lowercase();
    let suspicious = ["[url]", "[link]", "http://", "https://", "<script", "onclick=", "javascript:"];
    if suspicious.iter().any(|p| lowered.contains(p)) {
        return Some("Message contains suspicious content. Please remove any links or scripts.");
    }
    None
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    FieldErrors {
        name: validate_name(&fields.name),
        email: validate_email(&fields.email),
        message: validate_message(&fields.message),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlock {
    /// The hidden honeypot field was filled in; treat as automated spam.
    Honeypot,
    /// A previous submission happened less than `MIN_RESUBMIT_MS` ago.
    RateLimited,
}

impl SubmitBlock {
    pub fn message(self) -> &'static str {
        match self {
            SubmitBlock::Honeypot => "Submission blocked. Please try again.",
            SubmitBlock::RateLimited => "Please wait a few seconds before submitting again.",
        }
    }
}

/// Local gate checked before any network activity. A blocked submission must
/// never issue a request.
pub fn submission_gate(
    honeypot: &str,
    last_submit_ms: Option<f64>,
    now_ms: f64,
) -> Result<(), SubmitBlock> {
    if !honeypot.is_empty() {
        return Err(SubmitBlock::Honeypot);
    }
    if let Some(last) = last_submit_ms {
        if now_ms - last < MIN_RESUBMIT_MS {
            return Err(SubmitBlock::RateLimited);
        }
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendError {
    /// Non-2xx response; carries the endpoint's error text when it sent one.
    Endpoint(String),
    Network,
}

impl SendError {
    pub fn message(&self) -> String {
        match self {
            SendError::Endpoint(detail) => detail.clone(),
            SendError::Network => "Network error. Please check your connection.".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct EndpointFailure {
    error: Option<String>,
    errors: Option<Vec<EndpointFieldError>>,
}

#[derive(Deserialize)]
struct EndpointFieldError {
    message: String,
}

/// Extracts a human-readable message from the endpoint's JSON error body.
fn endpoint_error(body: &str) -> Option<String> {
    let failure: EndpointFailure = serde_json::from_str(body).ok()?;
    if let Some(error) = failure.error {
        return Some(error);
    }
    let messages: Vec<String> = failure
        .errors?
        .into_iter()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
        .collect();
    if messages.is_empty() { None } else { Some(messages.join(", ")) }
}

/// POSTs the form-encoded fields. Success is any 2xx response; anything else
/// is an error the caller surfaces as a dismissible status message.
pub async fn send_message(fields: &ContactFields, timestamp_ms: f64) -> Result<(), SendError> {
    let params = UrlSearchParams::new().map_err(|_| SendError::Network)?;
    params.append("name", fields.name.trim());
    params.append("email", fields.email.trim());
    params.append("message", fields.message.trim());
    params.append("_gotcha", "");
    params.append("_timestamp", &format!("{}", timestamp_ms as u64));

    let headers = Headers::new().map_err(|_| SendError::Network)?;
    let _ = headers.set("Accept", "application/json");
    let _ = headers.set("X-Requested-With", "XMLHttpRequest");

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(params));
    init.set_headers(&JsValue::from(headers));

    let window = web_sys::window().ok_or(SendError::Network)?;
    let resp = JsFuture::from(window.fetch_with_str_and_init(FORM_ENDPOINT, &init))
        .await
        .map_err(|_| SendError::Network)?;
    let resp: Response = resp.dyn_into().map_err(|_| SendError::Network)?;

    if resp.ok() {
        return Ok(());
    }

    let body = match resp.text() {
        Ok(promise) => JsFuture::from(promise).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    };
    let detail = body
        .as_deref()
        .and_then(endpoint_error)
        .unwrap_or_else(|| format!("Server error ({}). Please try again.", resp.status()));
    Err(SendError::Endpoint(detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_bounds() {
        assert!(validate_name("").is_some());
        assert!(validate_name("  a  ").is_some());
        assert!(validate_name("Jo").is_none());
        assert!(validate_name(&"x".repeat(101)).is_some());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("user@example.com").is_none());
        assert!(validate_email("  user@example.com  ").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("no-at-sign").is_some());
        assert!(validate_email("user@nodot").is_some());
        assert!(validate_email("user@ex..com").is_some());
        assert!(validate_email("user name@example.com").is_some());
    }

    #[test]
    fn message_rejects_links_and_scripts() {
        assert!(validate_message("A perfectly ordinary inquiry about your work.").is_none());
        assert!(validate_message("short").is_some());
        assert!(validate_message("Check out HTTPS://spam.example now!").is_some());
        assert!(validate_message("hello <script>alert(1)</script> world").is_some());
    }

    #[test]
    fn honeypot_blocks_before_any_network_activity() {
        assert_eq!(submission_gate("bot text", None, 0.0), Err(SubmitBlock::Honeypot));
        // Honeypot wins over the rate limit: a spammer is never retried.
        assert_eq!(submission_gate("x", Some(0.0), 1.0), Err(SubmitBlock::Honeypot));
    }

    #[test]
    fn rapid_resubmission_is_rejected_until_the_interval_elapses() {
        assert_eq!(submission_gate("", None, 1_000.0), Ok(()));
        assert_eq!(
            submission_gate("", Some(10_000.0), 10_000.0 + MIN_RESUBMIT_MS - 1.0),
            Err(SubmitBlock::RateLimited)
        );
        assert_eq!(submission_gate("", Some(10_000.0), 10_000.0 + MIN_RESUBMIT_MS), Ok(()));
    }

    #[test]
    fn endpoint_error_prefers_the_top_level_message() {
        assert_eq!(
            endpoint_error(r#"{"error":"Form disabled"}"#),
            Some("Form disabled".to_string())
        );
        assert_eq!(
            endpoint_error(r#"{"errors":[{"message":"email invalid"},{"message":"too fast"}]}"#),
            Some("email invalid, too fast".to_string())
        );
        assert_eq!(endpoint_error("not json"), None);
        assert_eq!(endpoint_error("{}"), None);
    }

    #[test]
    fn all_fields_validated_and_first_invalid_reported_in_form_order() {
        let errors = validate(&ContactFields {
            name: "Jo".into(),
            email: "bad".into(),
            message: "too short".into(),
        });
        assert!(errors.name.is_none());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
        assert_eq!(errors.first_invalid(), Some(Field::Email));
        assert!(!errors.is_clean());
    }
}
