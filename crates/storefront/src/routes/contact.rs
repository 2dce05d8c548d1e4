//! Contact form route handlers.
//!
//! There is no mail or CRM backend: a valid submission is logged and
//! acknowledged. The form posts either JSON (`{name, email, subject?,
//! message}`, answered with JSON) or a plain urlencoded form (answered with
//! the re-rendered page).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::services::SessionCart;
use crate::state::AppState;

const INVALID_EMAIL: &str = "Please enter a valid email address.";
const MISSING_FIELDS: &str = "Name and message are required.";
const THANK_YOU: &str = "Thanks for reaching out! We'll get back to you soon.";

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Response for form submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: ContactForm,
    pub notice: Option<String>,
    pub success: bool,
    pub cart_count: u32,
}

/// A submission and the encoding it arrived in.
#[derive(Debug)]
pub struct ContactSubmission {
    pub form: ContactForm,
    pub json: bool,
}

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));

        let form = if json {
            Json::<ContactForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?
                .0
        } else {
            Form::<ContactForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?
                .0
        };

        Ok(Self { form, json })
    }
}

/// Check a submission, returning the message to show when it is rejected.
fn validate(form: &ContactForm) -> Result<(), &'static str> {
    if !is_valid_email(form.email.trim()) {
        return Err(INVALID_EMAIL);
    }
    if form.name.trim().is_empty() || form.message.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(())
}

/// Display contact page.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let cart = SessionCart::load(session).await;
    ContactTemplate {
        form: ContactForm::default(),
        notice: None,
        success: false,
        cart_count: cart.summary(&state.catalog()).item_count(),
    }
}

/// Submit the contact form.
///
/// POST /contact
#[instrument(skip(state, session, submission), fields(email = %submission.form.email.trim()))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    submission: ContactSubmission,
) -> Response {
    let ContactSubmission { form, json } = submission;
    let outcome = validate(&form);

    if outcome.is_ok() {
        tracing::info!(
            name = %form.name.trim(),
            subject = form.subject.as_deref().unwrap_or("").trim(),
            message_len = form.message.trim().len(),
            "Contact form submitted"
        );
    }

    let status = if outcome.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    let message = outcome.err().unwrap_or(THANK_YOU);

    if json {
        return (
            status,
            Json(ContactResponse {
                success: status.is_success(),
                message: Some(message.to_string()),
            }),
        )
            .into_response();
    }

    let cart = SessionCart::load(session).await;
    let success = status.is_success();
    (
        status,
        ContactTemplate {
            // A successful submission clears the form.
            form: if success { ContactForm::default() } else { form },
            notice: Some(message.to_string()),
            success,
            cart_count: cart.summary(&state.catalog()).item_count(),
        },
    )
        .into_response()
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: None,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("buyer@example.com"));
        assert!(!is_valid_email("buyer@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("buyer"));
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(&form("Ann", "ann@example.com", "Hi")), Ok(()));
        assert_eq!(
            validate(&form("Ann", "not-an-email", "Hi")),
            Err(INVALID_EMAIL)
        );
        assert_eq!(
            validate(&form("  ", "ann@example.com", "Hi")),
            Err(MISSING_FIELDS)
        );
        assert_eq!(
            validate(&form("Ann", "ann@example.com", "")),
            Err(MISSING_FIELDS)
        );
    }
}
