//! Outbound message composition.
//!
//! Independent of submit: a message link can be composed from the current
//! field values under a reduced requirement set ("soft validation"). The
//! composed link carries a throwaway ticket id that is never persisted.

use thiserror::Error;
use url::Url;

use crate::error::IntakeError;
use crate::ticket::generate_ticket_id;
use crate::types::IntakeForm;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(
        "Please fill at least Name, Phone, Document, From/To, and Deadline to compose the message."
    )]
    MissingFields,

    #[error(transparent)]
    Endpoint(#[from] IntakeError),
}

/// Reduced requirement set for composing a message: name, phone, document
/// type, both languages, and deadline must be present. Nothing else is
/// checked and nothing is persisted.
pub fn soft_validate(form: &IntakeForm) -> Result<(), ComposeError> {
    let minimal = [
        &form.full_name,
        &form.phone,
        &form.doc_type,
        &form.from_lang,
        &form.to_lang,
        &form.deadline,
    ];
    if minimal.iter().any(|v| v.trim().is_empty()) {
        return Err(ComposeError::MissingFields);
    }
    Ok(())
}

/// Build the human-readable summary for one request. Empty fields are
/// omitted entirely rather than rendered blank.
pub fn build_message(form: &IntakeForm, ticket_id: &str) -> String {
    let mut lines = vec![
        "Hello, I submitted a translation request.".to_string(),
        format!("Ticket: {ticket_id}"),
        format!("Name: {}", form.full_name),
        format!("Phone: {}", form.phone),
    ];
    if !form.email.trim().is_empty() {
        lines.push(format!("Email: {}", form.email));
    }
    let mut document = format!("Document: {}", form.doc_type);
    if !form.doc_other.trim().is_empty() {
        document.push_str(&format!(" — {}", form.doc_other));
    }
    lines.push(document);
    lines.push(format!("From → To: {} → {}", form.from_lang, form.to_lang));
    if let Some(t_type) = form.translation_type.as_deref().filter(|t| !t.is_empty()) {
        lines.push(format!("Type: {t_type}"));
    }
    if !form.authority.trim().is_empty() {
        lines.push(format!("Authority: {}", form.authority));
    }
    if !form.pages.trim().is_empty() {
        lines.push(format!("Pages: {}", form.pages));
    }
    lines.push(format!("Deadline: {}", form.deadline));
    if !form.notes.trim().is_empty() {
        lines.push(format!("Notes: {}", form.notes));
    }
    lines.join("\n")
}

/// Compose the outbound link: soft-validate, generate a throwaway ticket id,
/// and attach the percent-encoded summary as the `text` query parameter.
pub fn compose_url(endpoint: &Url, form: &IntakeForm) -> Result<Url, ComposeError> {
    soft_validate(form)?;
    let ticket_id = generate_ticket_id();
    let text = build_message(form, &ticket_id);
    let mut url = endpoint.clone();
    url.query_pairs_mut().clear().append_pair("text", &text);
    Ok(url)
}
