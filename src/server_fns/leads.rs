use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::models::LeadSink;
use crate::models::{LeadDraft, LeadError};

/// Forwards a lead to the lead-storage service.
#[server]
pub async fn submit_lead(lead: LeadDraft) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::state::AppState;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    relay_lead(state.leads.as_ref(), &lead).await
}

/// Validates the draft again and hands it to `sink`; an invalid draft never reaches the sink.
#[cfg(feature = "ssr")]
pub async fn relay_lead(sink: &dyn LeadSink, lead: &LeadDraft) -> Result<(), ServerFnError> {
    use crate::models::validate;
    use uuid::Uuid;

    let submission_id = Uuid::new_v4();

    if let Err(e) = validate(lead) {
        tracing::info!(%submission_id, error = %e, "lead failed validation");
        return Err(ServerFnError::new(e));
    }

    match sink.post_lead(lead).await {
        Ok(()) => {
            tracing::info!(
                %submission_id,
                income_range = lead.income_range.as_str(),
                "lead accepted"
            );
            Ok(())
        }
        Err(e) => {
            tracing::warn!(%submission_id, error = %e, "lead not accepted");
            Err(ServerFnError::new(e))
        }
    }
}

impl From<ServerFnError> for LeadError {
    fn from(e: ServerFnError) -> Self {
        match e {
            ServerFnError::ServerError(message) => LeadError::transport(message),
            other => LeadError::transport(other.to_string()),
        }
    }
}
