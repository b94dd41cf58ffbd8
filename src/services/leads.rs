use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::models::{LeadDraft, LeadError, LeadReceipt, LeadSink};

/// HTTP client for the external lead-storage service
pub struct LeadsClient {
    http: Client,
    endpoint: String,
}

impl LeadsClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.leads_timeout).build()?;
        Ok(Self {
            http,
            endpoint: config.leads_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSink for LeadsClient {
    async fn post_lead(&self, lead: &LeadDraft) -> Result<(), LeadError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(lead)
            .send()
            .await
            .map_err(|e| LeadError::transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| LeadError::transport(e.to_string()))?;

        let outcome = LeadReceipt::interpret(status.is_success(), &body);
        if let Err(e) = &outcome {
            tracing::warn!(%status, error = %e, "lead service did not accept lead");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    async fn spawn_backend(
        status: StatusCode,
        reply: Value,
    ) -> (String, Arc<Mutex<Vec<Value>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let app = Router::new().route(
            "/api/leads",
            post(move |Json(body): Json<Value>| {
                let captured = captured.clone();
                let reply = reply.clone();
                async move {
                    captured.lock().unwrap().push(body);
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    fn client_for(base: &str) -> LeadsClient {
        let config = Config {
            backend_url: base.to_string(),
            leads_timeout: Duration::from_secs(5),
        };
        LeadsClient::new(&config).unwrap()
    }

    fn jane() -> LeadDraft {
        LeadDraft {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-123-4567".into(),
            income_range: "$25k - $50k".into(),
            message: String::new(),
            consent: true,
        }
    }

    #[tokio::test]
    async fn posts_all_six_fields_as_json() {
        let (base, seen) = spawn_backend(StatusCode::OK, json!({ "success": true })).await;
        let client = client_for(&base);

        client.post_lead(&jane()).await.unwrap();

        let bodies = seen.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(
            bodies[0],
            json!({
                "full_name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555-123-4567",
                "income_range": "$25k - $50k",
                "message": "",
                "consent": true
            })
        );
    }

    #[tokio::test]
    async fn surfaces_backend_detail() {
        let (base, _) = spawn_backend(
            StatusCode::BAD_REQUEST,
            json!({ "success": false, "detail": "Duplicate lead" }),
        )
        .await;

        let err = client_for(&base).post_lead(&jane()).await.unwrap_err();
        assert_eq!(err, LeadError::Rejected("Duplicate lead".into()));
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(&format!("http://{addr}"))
            .post_lead(&jane())
            .await
            .unwrap_err();
        assert!(matches!(err, LeadError::Transport(_)), "got {err:?}");
    }

    #[test]
    fn endpoint_built_from_config() {
        assert_eq!(
            client_for("http://leads.internal:9000").endpoint(),
            "http://leads.internal:9000/api/leads"
        );
    }
}
