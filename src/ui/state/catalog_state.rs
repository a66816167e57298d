use dioxus::prelude::*;

use crate::domain::entities::card::CardSummary;
use crate::domain::entities::filter::{aggregate, FilterSelection};
use crate::domain::entities::page::PageState;
use crate::domain::entities::query::{build, QueryVariables, SortDirection, SortKey, SortSpec};
use crate::usecase::ports::source::FetchState;

#[derive(Clone, Copy)]
pub struct CatalogState {
    pub search: Signal<String>,
    pub filters_open: Signal<bool>,
    pub selected_filters: Signal<Vec<FilterSelection>>,
    pub sort_key: Signal<Option<SortKey>>,
    pub sort_direction: Signal<Option<SortDirection>>,
    pub page_size: Signal<i64>,
    pub page: Signal<i64>,
    pub listing: Signal<FetchState<Vec<CardSummary>>>,
}

impl CatalogState {
    pub fn new(page_size: i64) -> Self {
        Self {
            search: use_signal(String::new),
            filters_open: use_signal(|| true),
            selected_filters: use_signal(Vec::<FilterSelection>::new),
            sort_key: use_signal(|| None::<SortKey>),
            sort_direction: use_signal(|| None::<SortDirection>),
            page_size: use_signal(|| page_size),
            page: use_signal(|| 1_i64),
            listing: use_signal(FetchState::<Vec<CardSummary>>::loading),
        }
    }

    pub fn variables(&self, game: &str) -> QueryVariables {
        let predicate = aggregate(&self.selected_filters.read());
        let sort = SortSpec {
            key: (self.sort_key)(),
            direction: (self.sort_direction)(),
        };
        let page = PageState::new((self.page)(), (self.page_size)());
        build(&self.search.read(), game, &predicate, sort, &page)
    }
}
