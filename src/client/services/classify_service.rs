use log::{debug, error, info};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use url::Url;

use crate::client::config::ClientConfig;
use crate::client::models::submission::SubmissionInput;
use crate::common::protocol::{ApiError, Classification};

/// How a submission can fail once validation has passed. Input validation never
/// reaches this type: an empty form is rejected before a service call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// The server answered with a non-2xx status and an `erro` message.
    #[error("{0}")]
    Backend(String),
    /// The request never completed, or the body could not be understood.
    #[error("{0}")]
    Connection(String),
}

/// Talks to the triage server. One `POST /processar` per submission; no retry,
/// no request timeout (the caller waits on the transport).
pub struct ClassifyService {
    client: reqwest::Client,
    endpoint: Url,
}

impl ClassifyService {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let base = Url::parse(&config.server_url)?;
        let endpoint = base.join("processar")?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint })
    }

    /// Submit one email for classification. The input is consumed; a failed
    /// submission is never retried here.
    pub async fn classify(&self, input: SubmissionInput) -> Result<Classification, ClassifyError> {
        let form = match input {
            SubmissionInput::File { name, bytes } => {
                info!("submitting file '{}' ({} bytes)", name, bytes.len());
                let part = Part::bytes(bytes)
                    .file_name(name)
                    .mime_str("application/octet-stream")
                    .map_err(|e| ClassifyError::Connection(e.to_string()))?;
                Form::new().part("file", part)
            }
            SubmissionInput::Text(text) => {
                info!("submitting pasted text ({} chars)", text.len());
                Form::new().text("email_texto", text)
            }
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("request to {} failed: {}", self.endpoint, e);
                ClassifyError::Connection(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Connection(e.to_string()))?;
        debug!("classify response: status={}", status);

        decode_response(status, &body)
    }
}

/// Interpret the server's answer. The body is parsed as JSON regardless of the
/// status code; a body that cannot be parsed is reported as a connection-level
/// failure, the same bucket the original form handler dropped it into.
pub fn decode_response(status: StatusCode, body: &str) -> Result<Classification, ClassifyError> {
    if status.is_success() {
        serde_json::from_str::<Classification>(body).map_err(|e| {
            error!("unreadable success body: {}", e);
            ClassifyError::Connection(e.to_string())
        })
    } else {
        match serde_json::from_str::<ApiError>(body) {
            Ok(api) => Err(ClassifyError::Backend(api.erro)),
            Err(e) => {
                error!("unreadable error body (status {}): {}", status, e);
                Err(ClassifyError::Connection(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let body = r#"{"categoria_principal":"A","sub_categoria":"B","resposta_sugerida":"C"}"#;
        let parsed = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(parsed.categoria_principal, "A");
        assert_eq!(parsed.sub_categoria, "B");
        assert_eq!(parsed.resposta_sugerida, "C");
    }

    #[test]
    fn backend_error_carries_the_erro_field() {
        let result = decode_response(StatusCode::BAD_REQUEST, r#"{"erro":"bad input"}"#);
        assert_eq!(result, Err(ClassifyError::Backend("bad input".to_string())));
    }

    #[test]
    fn malformed_success_body_is_a_connection_failure() {
        let result = decode_response(StatusCode::OK, "<html>proxy error</html>");
        assert!(matches!(result, Err(ClassifyError::Connection(_))));
    }

    #[test]
    fn success_body_missing_fields_is_a_connection_failure() {
        let result = decode_response(StatusCode::OK, r#"{"categoria_principal":"A"}"#);
        assert!(matches!(result, Err(ClassifyError::Connection(_))));
    }

    #[test]
    fn malformed_error_body_is_a_connection_failure() {
        let result = decode_response(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(result, Err(ClassifyError::Connection(_))));
    }
}
