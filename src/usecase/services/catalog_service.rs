use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::domain::entities::card::CardSummary;
use crate::domain::entities::filter::FilterFacet;
use crate::domain::entities::query::QueryVariables;
use crate::usecase::ports::source::{CardSource, CardStream, DataSource, FetchState, SourceError};

pub struct CatalogService {
    source: Arc<dyn CardSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        Self { source }
    }

    pub async fn filter_facets(&self, game: &str) -> Result<Vec<FilterFacet>, SourceError> {
        self.source.filter_facets(game).await
    }

    pub async fn total_count(&self, vars: &QueryVariables) -> Result<i64, SourceError> {
        self.source.count(vars).await
    }

    pub async fn listing(
        &self,
        mode: DataSource,
        vars: &QueryVariables,
    ) -> Result<CardStream, SourceError> {
        match mode {
            DataSource::Static => {
                let cards = self.source.list(vars).await;
                Ok(stream::once(async move { cards }).boxed())
            }
            DataSource::Live => self.source.watch(vars).await,
        }
    }

    pub async fn follow_listing<F>(&self, mode: DataSource, vars: &QueryVariables, mut on_update: F)
    where
        F: FnMut(FetchState<Vec<CardSummary>>),
    {
        on_update(FetchState::loading());
        let mut updates = match self.listing(mode, vars).await {
            Ok(updates) => updates,
            Err(err) => {
                log::warn!("listing failed to start: {err}");
                on_update(FetchState::failed(err));
                return;
            }
        };
        while let Some(update) = updates.next().await {
            if let Err(err) = &update {
                log::warn!("listing update failed: {err}");
            }
            on_update(FetchState::from_result(update));
        }
        log::debug!("listing stream for offset {} finished", vars.offset);
    }
}
