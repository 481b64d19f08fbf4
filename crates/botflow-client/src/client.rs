//! The studio HTTP client.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use botflow_core::{DocumentError, FlowDocument, FlowGraph, Viewport};

use crate::error::ClientError;
use crate::types::{Bot, CreateBot, UpdateBot};

/// Client for one botflow API server.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct StudioClient {
    http: reqwest::Client,
    base_url: String,
}

impl StudioClient {
    /// Creates a client for the server at `base_url`
    /// (e.g. `http://127.0.0.1:3000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        StudioClient {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `POST /bot/create`
    pub async fn create_bot(&self, new: CreateBot) -> Result<Bot, ClientError> {
        let response = self
            .http
            .post(self.url("/bot/create"))
            .json(&new)
            .send()
            .await?;
        read_json(response).await
    }

    /// `GET /bot/` windowed by `skip` and `limit`.
    pub async fn list_bots(&self, skip: usize, limit: usize) -> Result<Vec<Bot>, ClientError> {
        let response = self
            .http
            .get(self.url("/bot/"))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await?;
        read_json(response).await
    }

    /// `GET /bot/{id}` -- the full record including the stored flow blob.
    pub async fn get_bot(&self, id: Uuid) -> Result<Bot, ClientError> {
        let response = self.http.get(self.url(&format!("/bot/{id}"))).send().await?;
        read_json(response).await
    }

    /// `PUT /bot/{id}` -- partial update; unset fields keep their value.
    pub async fn update_bot(&self, id: Uuid, update: UpdateBot) -> Result<Bot, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/bot/{id}")))
            .json(&update)
            .send()
            .await?;
        read_json(response).await
    }

    /// `DELETE /bot/{id}`
    pub async fn delete_bot(&self, id: Uuid) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/bot/{id}")))
            .send()
            .await?;
        read_ok(response).await
    }

    /// Persists the flow for `id`: the whole element sequence plus viewport,
    /// as one document. The document is built from the domain graph, so
    /// selection highlights and derived styling are structurally absent.
    pub async fn save_flow(
        &self,
        id: Uuid,
        graph: &FlowGraph,
        viewport: Viewport,
    ) -> Result<(), ClientError> {
        let document = FlowDocument::from_graph(graph, viewport);
        let response = self
            .http
            .post(self.url(&format!("/bot/{id}/data")))
            .json(&document)
            .send()
            .await?;
        read_ok(response).await
    }

    /// Fetches the flow stored for `id`.
    ///
    /// A bot that has never saved (the server reports `data` as absent or
    /// `{}`) restores as an empty graph at the default viewport. Anything
    /// else must parse as a flow document; a blob that does not is a
    /// [`ClientError::Document`].
    pub async fn restore_flow(&self, id: Uuid) -> Result<(FlowGraph, Viewport), ClientError> {
        let bot = self.get_bot(id).await?;
        let blob = match bot.data {
            Some(value) if !is_empty_object(&value) => value,
            _ => {
                tracing::debug!(bot_id = %id, "no stored flow, restoring empty");
                return Ok((FlowGraph::new(), Viewport::default()));
            }
        };
        let document: FlowDocument =
            serde_json::from_value(blob).map_err(DocumentError::from)?;
        let (graph, viewport) = document.into_graph()?;
        Ok((graph, viewport))
    }
}

fn is_empty_object(value: &serde_json::Value) -> bool {
    value.as_object().map_or(false, |map| map.is_empty())
}

/// Checks the status and parses the body as `T`.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }
    Ok(serde_json::from_str(&body)?)
}

/// Checks the status and discards the body (endpoints answering
/// `{"success": true}`).
async fn read_ok(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(api_error(status.as_u16(), &body));
    }
    Ok(())
}

/// Error envelope the server wraps failures in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Builds the [`ClientError::Api`] for a non-2xx response, pulling the
/// message out of the structured envelope when there is one.
fn api_error(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string());
    tracing::warn!(status, %message, "api request failed");
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_the_envelope_message() {
        let body = r#"{"success": false, "error": {"code": "NOT_FOUND", "message": "botId `x` does not exist."}}"#;
        match api_error(404, body) {
            ClientError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "botId `x` does not exist.");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_the_raw_body() {
        match api_error(502, "upstream gone\n") {
            ClientError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream gone");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_detection() {
        assert!(is_empty_object(&serde_json::json!({})));
        assert!(!is_empty_object(&serde_json::json!({"zoom": 1.0})));
        assert!(!is_empty_object(&serde_json::json!(null)));
        assert!(!is_empty_object(&serde_json::json!([])));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = StudioClient::new("http://localhost:3000/");
        assert_eq!(client.url("/bot/"), "http://localhost:3000/bot/");
    }
}
