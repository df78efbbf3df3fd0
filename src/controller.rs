//! The intake form controller: validation, persistence, and message
//! composition behind one surface. Each submit attempt is independent:
//! `Editing → Validating → {Invalid | Persisting → Confirmed}`.

use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::BrandConfig;
use crate::error::IntakeError;
use crate::message::{ComposeError, compose_url};
use crate::store::TicketStore;
use crate::ticket::{generate_ticket_id, iso_timestamp};
use crate::types::{IntakeForm, IntakeRecord};
use crate::validate::{ValidationErrors, validate};

#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form failed validation; the store and form are untouched.
    #[error("submission rejected:\n{0}")]
    Invalid(ValidationErrors),

    #[error(transparent)]
    Storage(#[from] IntakeError),
}

/// What a successful submit produced.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub ticket_id: String,
    pub record: IntakeRecord,
}

pub struct IntakeController<S: TicketStore> {
    store: S,
    config: BrandConfig,
}

impl<S: TicketStore> IntakeController<S> {
    pub fn new(store: S, config: BrandConfig) -> Self {
        IntakeController { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submit the form: validate, generate a ticket id, append the record,
    /// then reset the form for the next request. A rejected form is
    /// returned with its complete error set and nothing is persisted.
    pub fn submit(&self, form: &mut IntakeForm) -> Result<SubmitOutcome, SubmitError> {
        let data = validate(form).map_err(SubmitError::Invalid)?;

        let ticket_id = generate_ticket_id();
        let record = IntakeRecord::new(ticket_id.clone(), data, iso_timestamp());
        self.store.append(&record)?;
        debug!(ticket = %ticket_id, "intake submission accepted");

        // Post-submit reset, the moral equivalent of form.reset()
        form.clear();

        Ok(SubmitOutcome { ticket_id, record })
    }

    /// Compose the outbound message link from the current field values.
    /// Independent of submit: uses a throwaway ticket id and persists
    /// nothing.
    pub fn compose(&self, form: &IntakeForm) -> Result<Url, ComposeError> {
        let endpoint = self.config.message_endpoint()?;
        compose_url(&endpoint, form)
    }
}
