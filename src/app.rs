use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::Config;
use crate::domain::entities::labels::{game_name, GAMES};
use crate::infra::graphql::source::GraphqlSource;
use crate::ui::components::{DropdownId, DropdownOption, DropdownSelect};
use crate::ui::pages::card::CardPage;
use crate::ui::pages::catalog::CatalogPage;
use crate::usecase::ports::source::CardSource;
use crate::usecase::services::card_service::CardService;
use crate::usecase::services::catalog_service::CatalogService;

#[derive(Clone, Copy)]
pub struct SelectedGame(pub Signal<String>);

#[derive(Clone, Debug, PartialEq, Eq)]
enum View {
    Catalog,
    Card(String),
}

fn game_options() -> Vec<DropdownOption> {
    GAMES
        .iter()
        .map(|(code, name)| DropdownOption::new(*code, *name))
        .collect()
}

#[component]
pub fn App() -> Element {
    let config = use_context::<Config>();

    let source = use_hook(|| Arc::new(GraphqlSource::new(&config)) as Arc<dyn CardSource>);
    let source_for_cards = source.clone();
    use_context_provider(|| Arc::new(CatalogService::new(source)));
    use_context_provider(|| Arc::new(CardService::new(source_for_cards, config.similar_cards_limit)));

    let default_game = config.default_game.clone();
    let mut game = use_signal(move || default_game);
    use_context_provider(|| SelectedGame(game));

    let mut view = use_signal(|| View::Catalog);
    let mut open_dropdown = use_signal(|| None::<DropdownId>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);

    let current_game = game();
    let game_title = game_name(&current_game).to_string();

    rsx! {
        div {
            style: "font-family: sans-serif; background: #fafafa; min-height: 100vh;",
            onclick: move |_| open_dropdown.set(None),

            nav {
                style: "display: flex; gap: 12px; align-items: center; padding: 8px 16px; background: #1976d2; color: #fff;",
                button {
                    style: "border: none; background: transparent; color: #fff; font-size: 18px; font-weight: 700; cursor: pointer;",
                    onclick: move |_| view.set(View::Catalog),
                    "TCG Market"
                }
                span { style: "flex: 1; opacity: 0.8;", "{game_title}" }
                if view() != View::Catalog {
                    button {
                        style: "border: 1px solid #fff; background: transparent; color: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                        onclick: move |_| view.set(View::Catalog),
                        "← Catalog"
                    }
                }
                div {
                    style: "color: #000;",
                    DropdownSelect {
                        id: DropdownId::Game,
                        label: "",
                        options: game_options(),
                        selected: Some(current_game.clone()),
                        open_dropdown: open_dropdown,
                        dropdown_pos: dropdown_pos,
                        on_select: move |value: String| {
                            log::info!("switching game to {value}");
                            game.set(value);
                            view.set(View::Catalog);
                        },
                    }
                }
            }

            {match view() {
                View::Catalog => rsx! {
                    CatalogPage { on_open_card: move |id: String| view.set(View::Card(id)) }
                },
                View::Card(id) => rsx! {
                    CardPage {
                        key: "{id}",
                        id: id.clone(),
                        on_open_card: move |next: String| view.set(View::Card(next)),
                    }
                },
            }}
        }
    }
}
