use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::json;

use crate::config::{Config, ENV_GAME, ENV_GRAPHQL_URL, ENV_GRAPHQL_WS_URL};
use crate::domain::entities::card::{CardDetail, CardPage, CardSummary};
use crate::domain::entities::filter::{aggregate, toggle, FilterFacet, FilterSelection};
use crate::domain::entities::page::PageState;
use crate::domain::entities::query::{build, QueryVariables, SortDirection, SortSpec};
use crate::usecase::ports::source::{CardSource, CardStream, DataSource, FetchState, SourceError};
use crate::usecase::services::card_service::CardService;
use crate::usecase::services::catalog_service::CatalogService;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("tcgmarket-{prefix}-{nanos}"))
}

fn no_env(_: &str) -> Option<String> {
    None
}

fn card(id: &str, name: &str) -> CardSummary {
    CardSummary {
        id: id.to_string(),
        name: name.to_string(),
        price: Some(1.5),
        set: Some("The Fellowship of the Ring".to_string()),
        image: None,
    }
}

#[derive(Default)]
struct FakeSource {
    updates: Vec<Vec<CardSummary>>,
    fail_listing: bool,
    fail_watch_midway: bool,
    seen: Mutex<Vec<QueryVariables>>,
    similar_limits: Mutex<Vec<i64>>,
}

#[async_trait]
impl CardSource for FakeSource {
    async fn filter_facets(&self, _game: &str) -> Result<Vec<FilterFacet>, SourceError> {
        Ok(Vec::new())
    }

    async fn count(&self, _vars: &QueryVariables) -> Result<i64, SourceError> {
        Ok(self.updates.first().map(|cards| cards.len() as i64).unwrap_or(0))
    }

    async fn list(&self, vars: &QueryVariables) -> Result<Vec<CardSummary>, SourceError> {
        self.seen.lock().expect("lock").push(vars.clone());
        if self.fail_listing {
            return Err(SourceError::GraphQl(vec!["field 'card_details' not found".to_string()]));
        }
        Ok(self.updates.first().cloned().unwrap_or_default())
    }

    async fn watch(&self, vars: &QueryVariables) -> Result<CardStream, SourceError> {
        self.seen.lock().expect("lock").push(vars.clone());
        if self.fail_listing {
            return Err(SourceError::Socket("connection refused".to_string()));
        }
        let mut items: Vec<Result<Vec<CardSummary>, SourceError>> =
            self.updates.iter().cloned().map(Ok).collect();
        if self.fail_watch_midway {
            items.push(Err(SourceError::Protocol("server closed the subscription".to_string())));
        }
        Ok(stream::iter(items).boxed())
    }

    async fn card_page(&self, id: &str, similar_limit: i64) -> Result<CardPage, SourceError> {
        self.similar_limits.lock().expect("lock").push(similar_limit);
        if id == "missing" {
            return Ok(CardPage::default());
        }
        Ok(CardPage {
            card: Some(CardDetail {
                id: id.to_string(),
                name: "Gandalf".to_string(),
                ..CardDetail::default()
            }),
            similar: Vec::new(),
        })
    }
}

async fn collect_listing(
    service: &CatalogService,
    mode: DataSource,
    vars: &QueryVariables,
) -> Vec<FetchState<Vec<CardSummary>>> {
    let mut states = Vec::new();
    service
        .follow_listing(mode, vars, |state| states.push(state))
        .await;
    states
}

fn sample_vars() -> QueryVariables {
    build(
        "",
        "LOTR",
        &aggregate(&[]),
        SortSpec::default(),
        &PageState::new(1, 48),
    )
}

#[test]
fn missing_config_file_yields_defaults() {
    let temp_dir = unique_test_dir("missing-config");

    let config = Config::load_from(&temp_dir.join("config.toml"), no_env)
        .expect("missing file should fall back to defaults");

    assert_eq!(config, Config::default());
}

#[test]
fn config_file_overrides_defaults_and_env_overrides_file() {
    let temp_dir = unique_test_dir("config-file");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("config.toml");
    fs::write(
        &path,
        "graphql_http_url = \"https://cards.example/v1/graphql\"\npage_size = 20\nlive_listing = false\n",
    )
    .expect("should write config");

    let from_file = Config::load_from(&path, no_env).expect("config should parse");
    assert_eq!(from_file.graphql_http_url, "https://cards.example/v1/graphql");
    assert_eq!(from_file.page_size, 20);
    assert!(!from_file.live_listing);
    assert_eq!(from_file.default_game, "LOTR");

    let overridden = Config::load_from(&path, |name| match name {
        n if n == ENV_GRAPHQL_URL => Some("http://override/v1/graphql".to_string()),
        n if n == ENV_GRAPHQL_WS_URL => Some("ws://override/v1/graphql".to_string()),
        n if n == ENV_GAME => Some("MECCG".to_string()),
        _ => None,
    })
    .expect("config should parse");
    assert_eq!(overridden.graphql_http_url, "http://override/v1/graphql");
    assert_eq!(overridden.graphql_ws_url, "ws://override/v1/graphql");
    assert_eq!(overridden.default_game, "MECCG");
    assert_eq!(overridden.page_size, 20);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn malformed_config_is_an_error() {
    let temp_dir = unique_test_dir("bad-config");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let path = temp_dir.join("config.toml");
    fs::write(&path, "page_size = \"lots\"\n").expect("should write config");

    let result = Config::load_from(&path, no_env);
    assert!(result.is_err(), "type mismatch should fail: {result:?}");

    fs::write(&path, "page_size = 0\n").expect("should write config");
    let result = Config::load_from(&path, no_env);
    assert!(result.is_err(), "zero page size should fail: {result:?}");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn selections_flow_into_list_variables() {
    let mut selections: Vec<FilterSelection> = Vec::new();
    for candidate in [
        FilterSelection::new("type", "Creature", "Type"),
        FilterSelection::new("type", "Spell", "Type"),
        FilterSelection::new("rarity", "Rare", "Rarity"),
    ] {
        selections = toggle(&selections, &candidate);
    }
    let sort = SortSpec {
        key: None,
        direction: Some(SortDirection::Desc),
    };

    let vars = build("gand", "LOTR", &aggregate(&selections), sort, &PageState::new(3, 20));

    assert_eq!(
        vars.to_list_variables(),
        json!({
            "where": {
                "name": { "_ilike": "%gand%" },
                "tcg": { "_eq": "LOTR" },
                "_or": [
                    { "type": { "_in": ["Creature", "Spell"] } },
                    { "rarity": { "_in": ["Rare"] } }
                ]
            },
            "order_by": { "set": "desc" },
            "limit": 20,
            "offset": 40
        })
    );
    assert_eq!(vars.to_count_variables(), json!({ "where": vars.where_clause() }));
}

#[test]
fn building_twice_gives_the_same_variables() {
    let selections = vec![FilterSelection::new("cost", 3_i64, "Cost")];
    let predicate = aggregate(&selections);
    let page = PageState::new(2, 10);

    let first = build("ring", "MECCG", &predicate, SortSpec::default(), &page);
    let second = build("ring", "MECCG", &predicate, SortSpec::default(), &page);

    assert_eq!(first, second);
    assert_eq!(first.to_list_variables(), second.to_list_variables());
}

#[tokio::test]
async fn static_listing_reports_loading_then_one_result() {
    let source = Arc::new(FakeSource {
        updates: vec![vec![card("1", "Gandalf"), card("2", "Frodo")]],
        ..FakeSource::default()
    });
    let service = CatalogService::new(source.clone());

    let states = collect_listing(&service, DataSource::Static, &sample_vars()).await;

    assert_eq!(states.len(), 2);
    assert!(states[0].loading);
    assert_eq!(states[1].data.as_ref().map(Vec::len), Some(2));
    assert!(!states[1].loading);
    assert_eq!(source.seen.lock().expect("lock").len(), 1);
}

#[tokio::test]
async fn live_listing_reports_every_update() {
    let source = Arc::new(FakeSource {
        updates: vec![
            vec![card("1", "Gandalf")],
            vec![card("1", "Gandalf"), card("2", "Frodo")],
            vec![card("2", "Frodo")],
        ],
        ..FakeSource::default()
    });
    let service = CatalogService::new(source);

    let states = collect_listing(&service, DataSource::Live, &sample_vars()).await;

    let sizes: Vec<Option<usize>> = states
        .iter()
        .map(|state| state.data.as_ref().map(Vec::len))
        .collect();
    assert_eq!(sizes, vec![None, Some(1), Some(2), Some(1)]);
    assert!(states.iter().skip(1).all(|state| state.error.is_none()));
}

#[tokio::test]
async fn listing_errors_surface_as_error_text() {
    let source = Arc::new(FakeSource {
        fail_listing: true,
        ..FakeSource::default()
    });
    let service = CatalogService::new(source);

    let states = collect_listing(&service, DataSource::Static, &sample_vars()).await;
    let last = states.last().expect("at least one state");
    assert_eq!(last.error.as_deref(), Some("field 'card_details' not found"));
    assert!(last.data.is_none());

    let states = collect_listing(&service, DataSource::Live, &sample_vars()).await;
    let last = states.last().expect("at least one state");
    assert_eq!(last.error.as_deref(), Some("socket error: connection refused"));
}

#[tokio::test]
async fn live_listing_error_after_updates_is_reported_last() {
    let source = Arc::new(FakeSource {
        updates: vec![vec![card("1", "Gandalf")]],
        fail_watch_midway: true,
        ..FakeSource::default()
    });
    let service = CatalogService::new(source);

    let states = collect_listing(&service, DataSource::Live, &sample_vars()).await;

    assert_eq!(states.len(), 3);
    assert_eq!(states[1].data.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        states[2].error.as_deref(),
        Some("subscription protocol error: server closed the subscription")
    );
}

#[tokio::test]
async fn card_service_passes_configured_similar_limit() {
    let source = Arc::new(FakeSource::default());
    let service = CardService::new(source.clone(), 6);

    let page = service.card_page("42").await.expect("card page");
    assert_eq!(page.card.map(|card| card.name), Some("Gandalf".to_string()));

    let missing = service.card_page("missing").await.expect("card page");
    assert!(missing.card.is_none());

    assert_eq!(*source.similar_limits.lock().expect("lock"), vec![6, 6]);
}

#[tokio::test]
async fn total_count_comes_from_the_source() {
    let source = Arc::new(FakeSource {
        updates: vec![vec![card("1", "Gandalf"), card("2", "Frodo"), card("3", "Sam")]],
        ..FakeSource::default()
    });
    let service = CatalogService::new(source);

    let total = service.total_count(&sample_vars()).await.expect("count");
    let page = PageState {
        current_page: 1,
        page_size: 2,
        total_count: total,
    };

    assert_eq!(total, 3);
    assert_eq!(page.page_count(), 2);
}
