use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::usecase::ports::source::SourceError;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

impl GraphQlResponse {
    pub fn into_data(self) -> Result<Value, SourceError> {
        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            return Err(SourceError::GraphQl(
                errors.into_iter().map(|entry| entry.message).collect(),
            ));
        }
        self.data.ok_or(SourceError::MissingData("data"))
    }
}

#[derive(Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value, SourceError> {
        log::debug!("POST {} ({} bytes of query)", self.endpoint, query.len());
        let response = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables })
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GraphQlResponse = response.json().await?;
        body.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn errors_take_precedence_over_data() {
        let response: GraphQlResponse = serde_json::from_value(json!({
            "data": { "card_details": [] },
            "errors": [{ "message": "field not found" }, { "message": "denied" }]
        }))
        .expect("response should decode");

        let err = response.into_data().expect_err("errors should fail the response");

        assert_eq!(err.to_string(), "field not found; denied");
    }

    #[test]
    fn missing_data_is_an_error() {
        let response: GraphQlResponse =
            serde_json::from_value(json!({})).expect("response should decode");

        let err = response.into_data().expect_err("missing data should fail");

        assert!(matches!(err, SourceError::MissingData("data")));
    }

    #[test]
    fn request_body_has_query_and_variables() {
        let request = GraphQlRequest {
            query: "query { x }",
            variables: json!({ "id": "1" }),
        };

        assert_eq!(
            serde_json::to_value(&request).expect("request should serialize"),
            json!({ "query": "query { x }", "variables": { "id": "1" } })
        );
    }
}
