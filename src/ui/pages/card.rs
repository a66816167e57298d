use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::card::{format_usd, CardPage as CardPageData, StatEntry};
use crate::ui::components::{CardCollapse, StatGrid};
use crate::ui::state::card_state::CardSectionsState;
use crate::usecase::ports::source::FetchState;
use crate::usecase::services::card_service::CardService;

const OUTLINED: &str = "border: 1px solid #ddd; border-radius: 8px; background: #fff;";
const ICON_BUTTON: &str = "border: none; background: transparent; cursor: pointer; font-size: 16px;";

#[component]
fn FoldingSection(title: &'static str, mut open: Signal<bool>, entries: Vec<StatEntry>) -> Element {
    let arrow = if open() { "▲" } else { "▼" };
    rsx! {
        div {
            style: "border-top: 1px solid #eee;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px;",
                strong { "{title}" }
                button { style: ICON_BUTTON, onclick: move |_| open.toggle(), "{arrow}" }
            }
            if open() {
                div {
                    style: "border-top: 1px solid #eee; padding: 16px;",
                    StatGrid { entries: entries.clone() }
                }
            }
        }
    }
}

#[component]
pub fn CardPage(id: String, on_open_card: EventHandler<String>) -> Element {
    let cards = use_context::<Arc<CardService>>();
    let CardSectionsState {
        properties_open,
        stats_open,
        details_open,
    } = CardSectionsState::new();

    let id_for_fetch = id.clone();
    let loaded = use_resource(move || {
        let cards = cards.clone();
        let id = id_for_fetch.clone();
        async move {
            let result = cards.card_page(&id).await;
            match &result {
                Ok(page) if page.card.is_none() => log::warn!("card {id} not found"),
                Ok(_) => log::debug!("loaded card {id}"),
                Err(err) => log::warn!("failed to load card {id}: {err}"),
            }
            result
        }
    });

    let state: FetchState<CardPageData> = match &*loaded.read() {
        None => FetchState::loading(),
        Some(Ok(page)) => FetchState::ready(page.clone()),
        Some(Err(err)) => FetchState::failed(err),
    };
    if let Some(error) = state.error {
        return rsx! {
            div { style: "padding: 16px; color: #b00020;", "{error}" }
        };
    }

    let page = state.data.unwrap_or_default();
    let title = page
        .card
        .as_ref()
        .map(|card| card.title())
        .unwrap_or_else(|| if state.loading { "Loading…".to_string() } else { format!("Card {id} not found") });
    let prices = page.card.as_ref().map(|card| card.prices()).unwrap_or_else(|| {
        [
            ("Current price", format_usd(None)),
            ("Foil price", format_usd(None)),
            ("Other price", format_usd(None)),
        ]
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 16px auto;",
            div {
                style: "display: grid; grid-template-columns: 5fr 7fr; gap: 16px;",

                div {
                    if let Some(card) = page.card.clone() {
                        div {
                            style: "{OUTLINED} padding: 16px;",
                            div {
                                style: "display: flex; justify-content: flex-end; margin-bottom: 8px;",
                                button { style: ICON_BUTTON, title: "Favorite", "♡" }
                            }
                            if let Some(url) = card.image.clone() {
                                img { src: "{url}", style: "width: 100%;" }
                            }
                        }
                        div {
                            style: "{OUTLINED} margin-top: 16px;",
                            div { style: "padding: 12px 16px;", strong { "Text" } }
                            div {
                                style: "border-top: 1px solid #eee; padding: 16px;",
                                p { {card.text.clone().unwrap_or_default()} }
                                if let Some(flavor) = card.flavor_text.clone() {
                                    p { style: "font-style: italic; font-size: 14px;", "\"{flavor}\"" }
                                }
                            }
                            FoldingSection { title: "Properties", open: properties_open, entries: card.property_entries() }
                            FoldingSection { title: "Stats", open: stats_open, entries: card.stat_entries() }
                            FoldingSection { title: "Details", open: details_open, entries: card.detail_entries() }
                        }
                    }
                }

                div {
                    div {
                        style: OUTLINED,
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px;",
                            h2 { style: "margin: 0; font-size: 20px;", "{title}" }
                            div {
                                button { style: ICON_BUTTON, title: "Share", "⤴" }
                                button { style: ICON_BUTTON, title: "Report", "⚑" }
                            }
                        }
                        div {
                            style: "padding: 16px;",
                            div {
                                style: "display: flex; gap: 24px; margin-bottom: 16px;",
                                for (label, amount) in prices {
                                    div {
                                        key: "{label}",
                                        div { style: "font-size: 13px; color: #666;", "{label}" }
                                        div { style: "font-size: 28px;", "{amount}" }
                                    }
                                }
                            }
                            div {
                                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                                button { style: "padding: 8px; background: #1976d2; color: #fff; border: none; border-radius: 4px;", "ADD TO CART" }
                                button { style: "padding: 8px; background: #fff; color: #1976d2; border: 1px solid #1976d2; border-radius: 4px;", "MAKE AN OFFER" }
                            }
                        }
                    }
                    CardCollapse {
                        title: "Price history",
                        initial_open: true,
                        div { style: "color: #666;", "No price history recorded yet." }
                    }
                    CardCollapse {
                        title: "Listings",
                        no_content_padding: true,
                        div { style: "padding: 16px; color: #666;", "No active listings." }
                    }
                    CardCollapse {
                        title: "Offers",
                        no_content_padding: true,
                        div { style: "padding: 16px; color: #666;", "No open offers." }
                    }
                }
            }

            CardCollapse {
                title: "More cards like this one",
                div {
                    style: "display: grid; grid-template-columns: repeat(6, 1fr); gap: 8px;",
                    for similar in page.similar.clone() {
                        {
                            let target = similar.id.clone();
                            let price = format_usd(similar.price);
                            rsx! {
                                div {
                                    key: "{similar.id}",
                                    style: "{OUTLINED} overflow: hidden; cursor: pointer;",
                                    onclick: move |_| on_open_card.call(target.clone()),
                                    if let Some(url) = similar.image.clone() {
                                        img { src: "{url}", style: "width: 100%; display: block;" }
                                    }
                                    div {
                                        style: "padding: 8px;",
                                        div { style: "font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;", "{similar.name}" }
                                        div {
                                            style: "display: flex; align-items: center; margin-top: 4px;",
                                            span { style: "font-size: 13px; color: #666;", "{price}" }
                                            span { style: "flex: 1;" }
                                            button { style: "padding: 2px 8px; font-size: 12px; background: #1976d2; color: #fff; border: none; border-radius: 4px;", "BUY NOW" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
