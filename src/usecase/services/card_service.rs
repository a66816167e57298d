use std::sync::Arc;

use crate::domain::entities::card::CardPage;
use crate::usecase::ports::source::{CardSource, SourceError};

pub struct CardService {
    source: Arc<dyn CardSource>,
    similar_limit: i64,
}

impl CardService {
    pub fn new(source: Arc<dyn CardSource>, similar_limit: i64) -> Self {
        Self {
            source,
            similar_limit,
        }
    }

    pub async fn card_page(&self, id: &str) -> Result<CardPage, SourceError> {
        self.source.card_page(id, self.similar_limit).await
    }
}
