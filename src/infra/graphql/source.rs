use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use serde_json::{json, Value};

use crate::config::Config;
use crate::domain::entities::card::{CardDetail, CardPage, CardSummary, SimilarCard};
use crate::domain::entities::filter::{facets_from_response, FilterFacet};
use crate::domain::entities::query::QueryVariables;
use crate::infra::graphql::client::GraphQlClient;
use crate::infra::graphql::documents::{
    CARD_BY_ID, CARD_LIST, CARD_LIST_SUBSCRIPTION, FILTER_TYPES, PAGINATION_COUNT,
};
use crate::infra::graphql::ws;
use crate::usecase::ports::source::{CardSource, CardStream, SourceError};

pub struct GraphqlSource {
    client: GraphQlClient,
    ws_url: String,
    timeout: Duration,
}

impl GraphqlSource {
    pub fn new(config: &Config) -> Self {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        Self {
            client: GraphQlClient::new(config.graphql_http_url.clone(), timeout),
            ws_url: config.graphql_ws_url.clone(),
            timeout,
        }
    }
}

pub fn decode_cards(data: Value) -> Result<Vec<CardSummary>, SourceError> {
    let rows = match data {
        Value::Object(mut fields) => fields
            .remove("card_details")
            .ok_or(SourceError::MissingData("card_details"))?,
        _ => return Err(SourceError::MissingData("card_details")),
    };
    Ok(serde_json::from_value(rows)?)
}

pub fn decode_count(data: &Value) -> Result<i64, SourceError> {
    data.pointer("/card_details_aggregate/aggregate/count")
        .and_then(Value::as_i64)
        .ok_or(SourceError::MissingData("card_details_aggregate"))
}

pub fn decode_card_page(data: Value) -> Result<CardPage, SourceError> {
    let card = match data.get("card_generic_by_pk") {
        Some(Value::Null) | None => None,
        Some(value) => Some(serde_json::from_value::<CardDetail>(value.clone())?),
    };
    let similar = match data.get("similar_cards") {
        Some(Value::Null) | None => Vec::new(),
        Some(value) => serde_json::from_value::<Vec<SimilarCard>>(value.clone())?,
    };
    Ok(CardPage { card, similar })
}

#[async_trait]
impl CardSource for GraphqlSource {
    async fn filter_facets(&self, game: &str) -> Result<Vec<FilterFacet>, SourceError> {
        let data = self
            .client
            .execute(FILTER_TYPES, json!({ "tcg": { "_eq": game } }))
            .await?;
        Ok(facets_from_response(game, &data))
    }

    async fn count(&self, vars: &QueryVariables) -> Result<i64, SourceError> {
        let data = self
            .client
            .execute(PAGINATION_COUNT, vars.to_count_variables())
            .await?;
        decode_count(&data)
    }

    async fn list(&self, vars: &QueryVariables) -> Result<Vec<CardSummary>, SourceError> {
        let data = self
            .client
            .execute(CARD_LIST, vars.to_list_variables())
            .await?;
        decode_cards(data)
    }

    async fn watch(&self, vars: &QueryVariables) -> Result<CardStream, SourceError> {
        let payloads = ws::subscribe(
            &self.ws_url,
            CARD_LIST_SUBSCRIPTION,
            vars.to_list_variables(),
            self.timeout,
        )
        .await?;
        Ok(payloads
            .map(|payload| payload.and_then(decode_cards))
            .boxed())
    }

    async fn card_page(&self, id: &str, similar_limit: i64) -> Result<CardPage, SourceError> {
        let data = self
            .client
            .execute(
                CARD_BY_ID,
                json!({ "id": id, "similar_limit": similar_limit }),
            )
            .await?;
        decode_card_page(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_decode_from_listing_payload() {
        let cards = decode_cards(json!({
            "card_details": [
                { "id": "a", "name": "Frodo", "price": 1.5, "set": "FotR", "image": null },
                { "id": "b", "name": "Sam" }
            ]
        }))
        .expect("cards should decode");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].set.as_deref(), Some("FotR"));
        assert_eq!(cards[1].price, None);
    }

    #[test]
    fn listing_without_rows_field_is_missing_data() {
        let err = decode_cards(json!({})).expect_err("missing rows should fail");

        assert!(matches!(err, SourceError::MissingData("card_details")));
    }

    #[test]
    fn count_reads_aggregate() {
        let data = json!({ "card_details_aggregate": { "aggregate": { "count": 101 } } });

        assert_eq!(decode_count(&data).expect("count should decode"), 101);
    }

    #[test]
    fn unknown_card_yields_empty_page() {
        let page = decode_card_page(json!({ "card_generic_by_pk": null, "similar_cards": [] }))
            .expect("page should decode");

        assert_eq!(page, CardPage::default());
    }
}
