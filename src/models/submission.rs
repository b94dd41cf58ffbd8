use async_trait::async_trait;
use serde_json::Value;

use super::lead::{validate, FieldEdit, LeadDraft, ValidationError};

pub const SUBMITTING_MESSAGE: &str = "Submitting your details...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Our team will contact you soon.";
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Where the form stands in its submit lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// Draft failed a local rule; nothing was sent
    Invalid(String),
    Loading(String),
    Success(String),
    Failed(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Invalid(m)
            | SubmissionStatus::Loading(m)
            | SubmissionStatus::Success(m)
            | SubmissionStatus::Failed(m) => Some(m),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionStatus::Loading(_))
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_) | SubmissionStatus::Failed(_))
    }

    /// Invalid and Failed both render as errors
    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Invalid(_) | SubmissionStatus::Failed(_))
    }
}

/// Why a lead did not make it into the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    /// The backend answered and gave a reason
    #[error("{0}")]
    Rejected(String),
    /// The backend answered without a usable reason, or with a body we can't read
    #[error("Something went wrong.")]
    Unexpected,
    #[error("{0}")]
    Transport(String),
}

impl LeadError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            LeadError::Unexpected
        } else {
            LeadError::Transport(message)
        }
    }
}

/// Anything that can take a lead draft: the backend HTTP client, the server relay, a test double
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn post_lead(&self, lead: &LeadDraft) -> Result<(), LeadError>;
}

/// Body returned by the lead-storage service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadReceipt {
    pub success: bool,
    /// Non-empty string `detail`, if the body carried one
    pub detail: Option<String>,
}

impl LeadReceipt {
    /// Reads a JSON object body. Anything that isn't an object is `None`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
            return None;
        };
        let success = map.get("success").is_some_and(is_truthy);
        let detail = map
            .get("detail")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        Some(LeadReceipt { success, detail })
    }

    /// Accepts only when the HTTP status was a success and `success` is truthy.
    pub fn interpret(status_ok: bool, body: &[u8]) -> Result<(), LeadError> {
        let Some(receipt) = Self::parse(body) else {
            return Err(LeadError::Unexpected);
        };
        if status_ok && receipt.success {
            return Ok(());
        }
        Err(receipt.detail.map_or(LeadError::Unexpected, LeadError::Rejected))
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Why `begin_submit` refused to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A submission is already in progress")]
    InFlight,
}

/// One lead form: the draft being edited and the status of the last submit.
///
/// `submit` runs the full lifecycle against a [`LeadSink`]. Callers that
/// can't hold `&mut self` across the request (a reactive signal, say) drive
/// the same lifecycle with [`begin_submit`](Self::begin_submit) and
/// [`settle`](Self::settle).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    draft: LeadDraft,
    status: SubmissionStatus,
}

impl LeadSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &LeadDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Replaces one field. No validation happens until submit.
    pub fn update_field(&mut self, edit: FieldEdit) {
        self.draft.apply(edit);
    }

    /// Validates and moves to `Loading`, handing back the snapshot to send.
    pub fn begin_submit(&mut self) -> Result<LeadDraft, SubmitBlocked> {
        if self.status.is_loading() {
            return Err(SubmitBlocked::InFlight);
        }
        if let Err(e) = validate(&self.draft) {
            self.status = SubmissionStatus::Invalid(e.to_string());
            return Err(e.into());
        }
        self.status = SubmissionStatus::Loading(SUBMITTING_MESSAGE.to_string());
        Ok(self.draft.clone())
    }

    /// Records the outcome of the request started by `begin_submit`.
    /// Outcomes that arrive while not loading are dropped.
    pub fn settle(&mut self, outcome: Result<(), LeadError>) {
        if !self.status.is_loading() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                self.draft = LeadDraft::default();
            }
            Err(e) => self.status = SubmissionStatus::Failed(e.to_string()),
        }
    }

    pub async fn submit<S: LeadSink + ?Sized>(&mut self, sink: &S) -> Result<(), SubmitBlocked> {
        let snapshot = self.begin_submit()?;
        let outcome = sink.post_lead(&snapshot).await;
        self.settle(outcome);
        Ok(())
    }
}
