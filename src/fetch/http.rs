//! Remote suggestion source over HTTP
//!
//! Sends `GET <endpoint>?<param>=<query>` and accepts three body shapes:
//! an array of suggestion items, an array of plain labels, or the OpenSearch
//! suggestions array `[query, [labels], [descriptions]?, ...]`.

use std::time::Duration;

use futures::FutureExt;
use serde_json::Value;

use super::source::{FetchError, FetchFuture, SuggestionSource};
use crate::error::TypeaheadError;
use crate::item::SuggestionItem;

#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    client: reqwest::Client,
    endpoint: String,
    query_param: String,
}

impl HttpSuggestionSource {
    pub fn new(
        endpoint: impl Into<String>,
        query_param: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TypeaheadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TypeaheadError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            query_param: query_param.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SuggestionSource for HttpSuggestionSource {
    fn fetch(&self, query: &str) -> FetchFuture {
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), query)]);

        async move {
            let response = request
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body: Value = response
                .json()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))?;

            parse_response(body)
        }
        .boxed()
    }
}

/// Interpret a suggestion response body
pub fn parse_response(body: Value) -> Result<Vec<SuggestionItem>, FetchError> {
    let Value::Array(entries) = body else {
        return Err(FetchError::Decode("expected a JSON array".to_string()));
    };

    if entries.iter().all(Value::is_object) {
        return serde_json::from_value(Value::Array(entries))
            .map_err(|e| FetchError::Decode(e.to_string()));
    }

    if entries.iter().all(Value::is_string) {
        return Ok(labels_to_items(entries.iter().filter_map(Value::as_str), None));
    }

    // OpenSearch: ["query", ["label", ...], ["description", ...], ...]
    if let [Value::String(_), Value::Array(labels), rest @ ..] = entries.as_slice() {
        let descriptions = match rest.first() {
            Some(Value::Array(descriptions)) => Some(descriptions.as_slice()),
            _ => None,
        };
        return Ok(labels_to_items(
            labels.iter().filter_map(Value::as_str),
            descriptions,
        ));
    }

    Err(FetchError::Decode(
        "unrecognized suggestion response".to_string(),
    ))
}

/// Plain labels double as ids
fn labels_to_items<'a>(
    labels: impl Iterator<Item = &'a str>,
    descriptions: Option<&[Value]>,
) -> Vec<SuggestionItem> {
    labels
        .enumerate()
        .map(|(idx, label)| {
            let item = SuggestionItem::new(label, label);
            match descriptions
                .and_then(|d| d.get(idx))
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
            {
                Some(description) => item.with_description(description),
                None => item,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
