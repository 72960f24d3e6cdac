//! Membership form.
//!
//! The form moves `Idle -> Submitting -> Success | Error`. Submission is
//! delegated to a [`Submitter`]; the bundled [`SimulatedSubmitter`] only waits
//! and never stores or sends anything. Every submission is bound to a
//! [`CancellationToken`] so an owner going away (a closed connection, server
//! shutdown) can abandon it, which puts the form back to `Idle`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::content::Catalog;
use crate::error::{Error, Result};

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Thank you! We'll get back to you soon.";

/// Shown after a failed submission.
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// What an applicant filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinApplication {
    pub name: String,
    pub email: String,
    /// Preferred group id; empty for no preference.
    pub group: String,
    pub message: String,
}

impl JoinApplication {
    /// Check required fields and the group reference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidApplication`] naming the first bad field.
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_application("name", "please enter your name"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::invalid_application("email", "please enter your email"));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ => {
                return Err(Error::invalid_application(
                    "email",
                    format!("{email} is not an email address"),
                ))
            }
        }

        if !self.group.is_empty() && catalog.group(&self.group).is_none() {
            return Err(Error::invalid_application(
                "group",
                format!("unknown group {}", self.group),
            ));
        }

        Ok(())
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JoinStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// The submitter failed; carries its reason for logs.
    Error(String),
}

impl JoinStatus {
    /// Message to show the applicant, if any.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error(_) => Some(ERROR_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Error(_))
    }
}

/// How a call to [`JoinForm::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
    /// The token fired before the submitter finished.
    Cancelled,
}

/// Delivers applications somewhere.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Deliver one application.
    ///
    /// # Errors
    ///
    /// Returns an error if the application could not be delivered.
    async fn submit(&self, application: &JoinApplication) -> Result<()>;
}

/// Waits for a fixed delay and reports success. Nothing is sent or kept.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _application: &JoinApplication) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

/// The join form and its state.
#[derive(Debug, Clone, Default)]
pub struct JoinForm {
    application: JoinApplication,
    status: JoinStatus,
}

impl JoinForm {
    #[must_use]
    pub fn new(application: JoinApplication) -> Self {
        Self {
            application,
            status: JoinStatus::Idle,
        }
    }

    #[must_use]
    pub fn application(&self) -> &JoinApplication {
        &self.application
    }

    #[must_use]
    pub fn status(&self) -> &JoinStatus {
        &self.status
    }

    /// Back to `Idle`, keeping the entered values.
    pub fn reset(&mut self) {
        self.status = JoinStatus::Idle;
    }

    /// Validate and claim the form for a submission.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SubmissionInProgress`] if a submission is pending, or
    /// the validation error. The state is unchanged on error.
    pub fn begin(&mut self, catalog: &Catalog) -> Result<()> {
        if self.status == JoinStatus::Submitting {
            return Err(Error::SubmissionInProgress);
        }
        self.application.validate(catalog)?;
        self.status = JoinStatus::Submitting;
        Ok(())
    }

    /// Record the submitter's result. Success clears the entered values.
    pub fn finish(&mut self, result: Result<()>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                info!(
                    group = %self.application.group,
                    "Join application accepted"
                );
                self.application = JoinApplication::default();
                self.status = JoinStatus::Success;
                SubmitOutcome::Accepted
            }
            Err(e) => {
                warn!(error = %e, "Join application failed");
                self.status = JoinStatus::Error(e.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Abandon a pending submission.
    pub fn cancel(&mut self) -> SubmitOutcome {
        debug!("Join submission cancelled");
        self.status = JoinStatus::Idle;
        SubmitOutcome::Cancelled
    }

    /// Run a full submission: validate, deliver, record the result.
    ///
    /// # Errors
    ///
    /// Returns an error only when the submission could not start (see
    /// [`JoinForm::begin`]). Delivery failures are reported through the
    /// outcome and the `Error` state.
    pub async fn submit(
        &mut self,
        catalog: &Catalog,
        submitter: &dyn Submitter,
        cancel: &CancellationToken,
    ) -> Result<SubmitOutcome> {
        self.begin(catalog)?;

        let result = tokio::select! {
            () = cancel.cancelled() => None,
            result = submitter.submit(&self.application) => Some(result),
        };

        Ok(match result {
            Some(result) => self.finish(result),
            None => self.cancel(),
        })
    }
}
