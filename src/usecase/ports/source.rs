use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

use crate::domain::entities::card::{CardPage, CardSummary};
use crate::domain::entities::filter::FilterFacet;
use crate::domain::entities::query::QueryVariables;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("socket error: {0}")]
    Socket(String),
    #[error("subscription protocol error: {0}")]
    Protocol(String),
    #[error("response has no `{0}` field")]
    MissingData(&'static str),
}

pub type CardStream = BoxStream<'static, Result<Vec<CardSummary>, SourceError>>;

#[async_trait]
pub trait CardSource: Send + Sync {
    async fn filter_facets(&self, game: &str) -> Result<Vec<FilterFacet>, SourceError>;
    async fn count(&self, vars: &QueryVariables) -> Result<i64, SourceError>;
    async fn list(&self, vars: &QueryVariables) -> Result<Vec<CardSummary>, SourceError>;
    async fn watch(&self, vars: &QueryVariables) -> Result<CardStream, SourceError>;
    async fn card_page(&self, id: &str, similar_limit: i64) -> Result<CardPage, SourceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    Static,
    #[default]
    Live,
}

impl DataSource {
    pub fn from_live_flag(live: bool) -> Self {
        if live {
            DataSource::Live
        } else {
            DataSource::Static
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    pub fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            data: None,
            loading: false,
            error: Some(error.to_string()),
        }
    }

    pub fn from_result<E: ToString>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(err) => Self::failed(err),
        }
    }
}
