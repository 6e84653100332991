//! Public subscribe and inquiry forms
//!
//! Each controller owns its typed draft and the submit-button state the
//! page reflects: the button is disabled while a submission is in flight,
//! a success banner shows once one has landed, and a failed submission
//! keeps the visitor's input for another try.

use crate::error::Result;
use sleeve_client::SleeveClient;
use sleeve_core::types::{INQUIRIES_TABLE, SUBSCRIPTIONS_TABLE};
use sleeve_core::{InquiryDraft, SubscriptionDraft};
use tracing::{info, warn};

/// What became of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the row
    Accepted,
    /// A previous submission was still in flight; this one was ignored
    Dropped,
}

/// Mailing-list signup form
#[derive(Debug, Default)]
pub struct SubscribeForm {
    pub draft: SubscriptionDraft,
    pub in_flight: bool,
    /// Whether a submission has succeeded (shows the thank-you banner)
    pub submitted: bool,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the draft. Success resets the form; failure keeps it.
    pub async fn submit(&mut self, client: &SleeveClient) -> Result<SubmitOutcome> {
        if self.in_flight {
            return Ok(SubmitOutcome::Dropped);
        }

        self.in_flight = true;
        let result = client
            .insert_one::<serde_json::Value, _>(SUBSCRIPTIONS_TABLE, &self.draft)
            .await;
        self.in_flight = false;

        match result {
            Ok(_) => {
                self.submitted = true;
                self.draft = SubscriptionDraft::default();
                info!("Subscription recorded");
                Ok(SubmitOutcome::Accepted)
            }
            Err(e) => {
                warn!("Subscription failed: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Contact inquiry form
#[derive(Debug, Default)]
pub struct InquiryForm {
    pub draft: InquiryDraft,
    pub in_flight: bool,
    /// Whether a submission has succeeded (shows the thank-you banner)
    pub submitted: bool,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the draft. Success resets the form; failure keeps it.
    pub async fn submit(&mut self, client: &SleeveClient) -> Result<SubmitOutcome> {
        if self.in_flight {
            return Ok(SubmitOutcome::Dropped);
        }

        self.in_flight = true;
        let result = client
            .insert_one::<serde_json::Value, _>(INQUIRIES_TABLE, &self.draft)
            .await;
        self.in_flight = false;

        match result {
            Ok(_) => {
                self.submitted = true;
                self.draft = InquiryDraft::default();
                info!("Inquiry recorded");
                Ok(SubmitOutcome::Accepted)
            }
            Err(e) => {
                warn!("Inquiry failed: {}", e);
                Err(e.into())
            }
        }
    }
}
