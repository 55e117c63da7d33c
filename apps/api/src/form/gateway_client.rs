//! `Optimizer` backed by the optimize endpoint over HTTP.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::form::{FormError, OptimizationRequest, Optimizer};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptimizeSuccess {
    optimized_resume: String,
}

#[derive(Debug, Deserialize)]
struct OptimizeFailure {
    error: String,
}

#[derive(Clone)]
pub struct GatewayOptimizer {
    client: Client,
    endpoint: String,
}

impl GatewayOptimizer {
    /// `endpoint` is the full URL of the optimize route, e.g. `http://host/api/optimize`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Optimizer for GatewayOptimizer {
    async fn optimize(&self, request: &OptimizationRequest) -> Result<String, FormError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<OptimizeFailure>(&body)
                .map(|failure| failure.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(FormError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        let success: OptimizeSuccess = response.json().await?;
        Ok(success.optimized_resume)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::form::{OptimizationForm, SubmitOutcome};
    use crate::llm_client::{LlmError, TextGenerator};
    use crate::routes::build_router;
    use crate::state::AppState;

    struct EchoGenerator {
        fail_with: Option<&'static str>,
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            match self.fail_with {
                Some(message) => Err(LlmError::Api {
                    status: 529,
                    message: message.to_string(),
                }),
                None => Ok(format!("rewritten ({} chars of prompt)", prompt.len())),
            }
        }
    }

    /// Serves the real router, backed by a fake upstream, on an ephemeral port.
    async fn spawn_gateway(fail_with: Option<&'static str>) -> String {
        let app = build_router(AppState {
            generator: Arc::new(EchoGenerator { fail_with }),
        });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/optimize")
    }

    fn request() -> OptimizationRequest {
        OptimizationRequest {
            resume: "Jean Dupont".to_string(),
            job_description: "Développeur Frontend".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_returns_optimized_resume() {
        let optimizer = GatewayOptimizer::new(spawn_gateway(None).await);
        let out = optimizer.optimize(&request()).await.unwrap();
        assert!(out.starts_with("rewritten ("));
    }

    #[tokio::test]
    async fn test_gateway_error_message_is_surfaced() {
        let optimizer = GatewayOptimizer::new(spawn_gateway(Some("Overloaded")).await);
        match optimizer.optimize(&request()).await {
            Err(FormError::Gateway { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("Overloaded"));
            }
            other => panic!("expected gateway error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_form_through_gateway() {
        let optimizer = GatewayOptimizer::new(spawn_gateway(Some("Overloaded")).await);
        let form = OptimizationForm::new();
        form.set_resume("cv");
        form.set_job_description("poste");

        assert_eq!(form.submit(&optimizer).await, SubmitOutcome::Failed);
        assert!(form.error().unwrap().contains("Overloaded"));
        assert!(form.is_submit_enabled());
    }
}
