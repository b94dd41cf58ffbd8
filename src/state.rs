use std::sync::Arc;

use crate::models::LeadSink;

#[derive(Clone)]
pub struct AppState {
    pub leads: Arc<dyn LeadSink>,
}
