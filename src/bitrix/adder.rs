use std::fmt;

use log::debug;

use crate::bitrix::{StageError, WebhookResponse, WebhookTransport};
use crate::models::StageRequest;

/// Webhook method that creates a status (stage) record
pub const STATUS_ADD_METHOD: &str = "crm.status.add";

/// What the webhook said about a submitted stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    Added {
        name: String,
        sort_order: i64,
        status_id: String,
    },
    Rejected {
        error: String,
    },
}

impl StageOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, StageOutcome::Added { .. })
    }
}

impl fmt::Display for StageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageOutcome::Added { name, sort_order, status_id } => {
                writeln!(f, "Added stage: '{}' (Sort: {})", name, sort_order)?;
                write!(f, "   Status ID: {}", status_id)
            }
            StageOutcome::Rejected { error } => write!(f, "Failed: {}", error),
        }
    }
}

/// Adds stages to the Applicants pipeline through a webhook transport
pub struct StageAdder<T: WebhookTransport> {
    transport: T,
}

impl<T: WebhookTransport> StageAdder<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Submit one stage and interpret the reply.
    ///
    /// The HTTP status is not consulted: a non-2xx reply with a JSON body is
    /// read like any other. A body that is not a JSON object is an error.
    pub fn submit(&self, request: &StageRequest) -> Result<StageOutcome, StageError> {
        let status_id = request.status_id();
        debug!(
            "Submitting stage {} (sort {}, color {})",
            status_id, request.sort_order, request.color
        );

        let reply = self.transport.post_form(STATUS_ADD_METHOD, &request.form_fields())?;
        let response = WebhookResponse::parse(&reply.body)
            .map_err(|source| StageError::Decode { status: reply.status, source })?;

        if response.is_ok() {
            Ok(StageOutcome::Added {
                name: request.name.clone(),
                sort_order: request.sort_order,
                status_id,
            })
        } else {
            Ok(StageOutcome::Rejected { error: response.error_message() })
        }
    }

    /// Add a stage, print the outcome, and report whether it was accepted.
    ///
    /// `None` color sends the default green.
    pub fn add_stage(&self, name: &str, sort_order: i64, color: Option<&str>) -> Result<bool, StageError> {
        let request = StageRequest::new(name, sort_order, color);
        let outcome = self.submit(&request)?;
        println!("{}", outcome);
        Ok(outcome.is_added())
    }
}
