//! Contact form state and the single-shot submission behind it.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

use crate::utils::api::Api;

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ContactPayload<'a> {
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("Failed to reach contact endpoint: {0}")]
    Transport(String),
    #[error("Contact endpoint answered with status {0}")]
    Rejected(u16),
    #[error("Failed to encode contact payload: {0}")]
    Encode(String),
}

/// Delivers a contact payload somewhere. One call, one attempt.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn deliver(&self, payload: &ContactPayload<'_>) -> Result<(), ContactError>;
}

/// Posts the payload as JSON to the configured endpoint.
pub struct HttpContactTransport {
    endpoint: String,
}

impl HttpContactTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ContactTransport for HttpContactTransport {
    async fn deliver(&self, payload: &ContactPayload<'_>) -> Result<(), ContactError> {
        let response = Api::post(&self.endpoint)
            .json(payload)
            .map_err(|e| ContactError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(ContactError::Rejected(response.status()))
        }
    }
}

/// Result of one submission, tagged with the ticket it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: u64,
    pub outcome: Result<(), ContactError>,
}

pub struct ContactSubmitter<T> {
    transport: T,
    issued: Cell<u64>,
}

impl<T: ContactTransport> ContactSubmitter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            issued: Cell::new(0),
        }
    }

    /// Hands out the ticket for the next submission. Later tickets supersede earlier ones.
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    pub async fn submit(&self, ticket: u64, email: &str, message: &str) -> Submission {
        let payload = ContactPayload { email, message };
        let outcome = self.transport.deliver(&payload).await;
        if let Err(e) = &outcome {
            log::error!("Contact submission {} failed: {}", ticket, e);
        }
        Submission { ticket, outcome }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub email: String,
    pub message: String,
    pub response: String,
    latest_ticket: u64,
}

impl ContactFormState {
    pub fn latest_ticket(&self) -> u64 {
        self.latest_ticket
    }
}

pub enum ContactAction {
    SetEmail(String),
    SetMessage(String),
    /// A submission went out under this ticket.
    Submitted(u64),
    Resolved(Submission),
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetEmail(email) => next.email = email,
            ContactAction::SetMessage(message) => next.message = message,
            ContactAction::Submitted(ticket) => {
                next.latest_ticket = next.latest_ticket.max(ticket);
            }
            ContactAction::Resolved(submission) => {
                if submission.ticket != next.latest_ticket {
                    log::info!(
                        "Dropping result of superseded submission {} (latest is {})",
                        submission.ticket,
                        next.latest_ticket
                    );
                    return self;
                }
                match submission.outcome {
                    Ok(()) => {
                        next.response = SUCCESS_MESSAGE.to_string();
                        next.email.clear();
                        next.message.clear();
                    }
                    Err(_) => next.response = FAILURE_MESSAGE.to_string(),
                }
            }
        }
        Rc::new(next)
    }
}
