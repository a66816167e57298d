use std::sync::Arc;

use dioxus::dioxus_core::Task;
use dioxus::prelude::*;

use crate::app::SelectedGame;
use crate::config::Config;
use crate::domain::entities::filter::{is_selected, remove_value, toggle, FilterFacet, FilterSelection};
use crate::domain::entities::page::{page_window, PageState, PAGE_SIZE_OPTIONS};
use crate::domain::entities::query::{SortDirection, SortKey};
use crate::ui::components::{CardTile, DropdownId, DropdownOption, DropdownSelect, SkeletonTile};
use crate::ui::state::catalog_state::CatalogState;
use crate::usecase::ports::source::DataSource;
use crate::usecase::services::catalog_service::CatalogService;

const PAGER_WIDTH: i64 = 7;

fn sort_key_options() -> Vec<DropdownOption> {
    SortKey::ALL
        .iter()
        .map(|key| DropdownOption::new(key.as_str(), key.label()))
        .collect()
}

fn sort_direction_options() -> Vec<DropdownOption> {
    SortDirection::ALL
        .iter()
        .map(|direction| DropdownOption::new(direction.as_str(), direction.label()))
        .collect()
}

fn page_size_options(configured: i64) -> Vec<DropdownOption> {
    let mut sizes = PAGE_SIZE_OPTIONS.to_vec();
    if !sizes.contains(&configured) {
        sizes.push(configured);
        sizes.sort_unstable();
    }
    sizes
        .into_iter()
        .map(|size| DropdownOption::new(size.to_string(), size.to_string()))
        .collect()
}

#[component]
fn CardFilter(
    facet: FilterFacet,
    selected: Vec<FilterSelection>,
    on_toggle: EventHandler<FilterSelection>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut keyword = use_signal(String::new);
    let visible = facet.matching(&keyword());
    let value_count = facet.values.len();
    let arrow = if open() { "▲" } else { "▼" };

    rsx! {
        div {
            div {
                style: "display: flex; align-items: center; padding: 8px 4px; cursor: pointer;",
                onclick: move |_| open.toggle(),
                span { style: "flex: 1;", "{facet.label}" }
                span { style: "font-size: 12px; color: #666; margin-right: 8px;", "{value_count}" }
                span { "{arrow}" }
            }
            if open() {
                div {
                    style: "padding-left: 16px;",
                    input {
                        style: "width: 100%; box-sizing: border-box; margin-bottom: 6px;",
                        placeholder: "Search",
                        value: "{keyword}",
                        oninput: move |event| keyword.set(event.value()),
                    }
                    for option in visible {
                        {
                            let checked = is_selected(&selected, &option.value);
                            let text = option.value.to_string();
                            rsx! {
                                label {
                                    key: "{text}",
                                    style: "display: flex; align-items: center; gap: 8px; padding: 4px 0; cursor: pointer;",
                                    span {
                                        style: "flex: 1; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                        "{text}"
                                    }
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onchange: move |_| on_toggle.call(option.clone()),
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

#[component]
pub fn CatalogPage(on_open_card: EventHandler<String>) -> Element {
    let config = use_context::<Config>();
    let catalog = use_context::<Arc<CatalogService>>();
    let SelectedGame(game) = use_context::<SelectedGame>();
    let mode = DataSource::from_live_flag(config.live_listing);

    let state = CatalogState::new(config.page_size);
    let CatalogState {
        mut search,
        mut filters_open,
        mut selected_filters,
        mut sort_key,
        mut sort_direction,
        mut page_size,
        mut page,
        mut listing,
    } = state;

    let mut open_dropdown = use_signal(|| None::<DropdownId>);
    let dropdown_pos = use_signal(|| None::<(f64, f64)>);
    let mut listing_task = use_signal(|| None::<Task>);

    // Selections belong to one game.
    use_effect(move || {
        let _ = game();
        selected_filters.set(Vec::new());
    });

    let catalog_for_facets = catalog.clone();
    let facets = use_resource(move || {
        let catalog = catalog_for_facets.clone();
        let game = game();
        async move {
            let result = catalog.filter_facets(&game).await;
            if let Err(err) = &result {
                log::warn!("failed to load filters for {game}: {err}");
            }
            result
        }
    });

    let variables = use_memo(move || state.variables(&game()));

    let catalog_for_count = catalog.clone();
    let total = use_resource(move || {
        let catalog = catalog_for_count.clone();
        let vars = variables();
        async move {
            let result = catalog.total_count(&vars).await;
            if let Err(err) = &result {
                log::warn!("failed to count cards: {err}");
            }
            result
        }
    });

    let catalog_for_listing = catalog.clone();
    use_effect(move || {
        let vars = variables();
        if let Some(previous) = listing_task.write().take() {
            previous.cancel();
        }
        let catalog = catalog_for_listing.clone();
        let task = spawn(async move {
            catalog
                .follow_listing(mode, &vars, move |update| listing.set(update))
                .await;
        });
        listing_task.set(Some(task));
    });

    let current = listing();
    if let Some(error) = current.error.clone() {
        return rsx! {
            div { style: "padding: 16px; color: #b00020;", "{error}" }
        };
    }

    let facet_list = match &*facets.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let total_count = match &*total.read() {
        Some(Ok(count)) => Some(*count),
        _ => None,
    };
    let page_state = PageState {
        current_page: page(),
        page_size: page_size(),
        total_count: total_count.unwrap_or(0),
    };
    let page_count = page_state.page_count();
    let selections = selected_filters();
    let panel_visible = filters_open();

    rsx! {
        div {
            style: "margin: 16px 8px;",
            onclick: move |_| open_dropdown.set(None),

            div {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
                button {
                    style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| filters_open.toggle(),
                    "☰ Filters"
                }
                input {
                    style: "flex: 1; min-width: 200px; padding: 6px;",
                    r#type: "text",
                    name: "search_field",
                    placeholder: "Search by name",
                    autocomplete: "off",
                    value: "{search}",
                    oninput: move |event| search.set(event.value()),
                }
                DropdownSelect {
                    id: DropdownId::SortKey,
                    label: "Order By",
                    options: sort_key_options(),
                    selected: sort_key().map(|key| key.as_str().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| sort_key.set(value.parse().ok()),
                    on_clear: move |_| sort_key.set(None),
                }
                DropdownSelect {
                    id: DropdownId::SortDirection,
                    label: "Sort",
                    options: sort_direction_options(),
                    selected: sort_direction().map(|direction| direction.as_str().to_string()),
                    open_dropdown: open_dropdown,
                    dropdown_pos: dropdown_pos,
                    on_select: move |value: String| sort_direction.set(value.parse().ok()),
                    on_clear: move |_| sort_direction.set(None),
                }
            }

            div {
                style: "display: flex; gap: 12px; margin-top: 12px; align-items: flex-start;",

                if panel_visible {
                    div {
                        style: "width: 240px; flex-shrink: 0; max-height: 90vh; overflow-y: auto; border: 1px solid #ddd; border-radius: 8px; padding: 8px; background: #fff;",
                        for facet in facet_list {
                            CardFilter {
                                key: "{facet.key}",
                                facet: facet.clone(),
                                selected: selections.clone(),
                                on_toggle: move |candidate: FilterSelection| {
                                    let next = toggle(&selected_filters(), &candidate);
                                    selected_filters.set(next);
                                },
                            }
                        }
                    }
                }

                div {
                    style: "flex: 1; min-width: 0;",

                    div {
                        style: "display: flex; align-items: center; justify-content: space-between;",
                        span {
                            style: "font-size: 14px;",
                            if let Some(count) = total_count {
                                "{count} items"
                            }
                        }
                        DropdownSelect {
                            id: DropdownId::PageSize,
                            label: "Show number",
                            options: page_size_options(config.page_size),
                            selected: Some(page_size().to_string()),
                            open_dropdown: open_dropdown,
                            dropdown_pos: dropdown_pos,
                            on_select: move |value: String| {
                                if let Ok(size) = value.parse::<i64>() {
                                    page_size.set(size);
                                }
                            },
                        }
                    }

                    div {
                        style: "display: flex; gap: 8px; flex-wrap: wrap; margin: 8px 0;",
                        for selection in selections.clone() {
                            {
                                let value = selection.value.clone();
                                let chip = selection.chip_text();
                                rsx! {
                                    span {
                                        key: "{chip}",
                                        style: "display: inline-flex; align-items: center; gap: 6px; padding: 2px 10px; border-radius: 16px; background: #e0e0e0; font-size: 13px;",
                                        "{chip}"
                                        button {
                                            style: "border: none; background: transparent; cursor: pointer;",
                                            onclick: move |_| {
                                                let next = remove_value(&selected_filters(), &value);
                                                selected_filters.set(next);
                                            },
                                            "✕"
                                        }
                                    }
                                }
                            }
                        }
                        if !selections.is_empty() {
                            button {
                                style: "border: none; background: transparent; cursor: pointer; text-decoration: underline;",
                                onclick: move |_| selected_filters.set(Vec::new()),
                                "Clear all"
                            }
                        }
                    }

                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 8px;",
                        if current.loading {
                            for idx in 0..page_size() {
                                SkeletonTile { key: "{idx}" }
                            }
                        }
                        for card in current.data.clone().unwrap_or_default() {
                            CardTile {
                                key: "{card.id}",
                                id: card.id.clone(),
                                name: card.name.clone(),
                                set: card.set.clone(),
                                image: card.image.clone(),
                                price: card.price,
                                on_open: on_open_card,
                            }
                        }
                    }

                    if total_count.is_some() {
                        div {
                            style: "display: flex; justify-content: center; gap: 4px; margin-top: 16px;",
                            button {
                                disabled: page() <= 1,
                                onclick: move |_| page.set(page() - 1),
                                "‹"
                            }
                            for number in page_window(page(), page_count, PAGER_WIDTH) {
                                button {
                                    key: "{number}",
                                    style: if number == page() { "font-weight: 700; background: #eef4ff;" } else { "" },
                                    onclick: move |_| page.set(number),
                                    "{number}"
                                }
                            }
                            button {
                                disabled: page() >= page_count,
                                onclick: move |_| page.set(page() + 1),
                                "›"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_page_size_joins_the_options() {
        let values: Vec<String> = page_size_options(48)
            .into_iter()
            .map(|option| option.value)
            .collect();

        assert_eq!(values, vec!["10", "20", "48", "50"]);
        assert_eq!(page_size_options(20).len(), 3);
    }

    #[test]
    fn sort_options_round_trip_through_parse() {
        for option in sort_key_options() {
            assert!(option.value.parse::<SortKey>().is_ok());
        }
        for option in sort_direction_options() {
            assert!(option.value.parse::<SortDirection>().is_ok());
        }
    }
}
