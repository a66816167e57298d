use dioxus::prelude::*;

use crate::domain::entities::card::{format_usd, StatEntry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownId {
    Game,
    SortKey,
    SortDirection,
    PageSize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub fn dropdown_label(options: &[DropdownOption], selected: Option<&str>) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "(none)".to_string())
}

#[component]
pub fn DropdownSelect(
    id: DropdownId,
    label: &'static str,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    mut open_dropdown: Signal<Option<DropdownId>>,
    mut dropdown_pos: Signal<Option<(f64, f64)>>,
    on_select: EventHandler<String>,
    on_clear: Option<EventHandler<()>>,
) -> Element {
    let is_open = open_dropdown() == Some(id);
    let selected_label = dropdown_label(&options, selected.as_deref());
    let (left, top) = dropdown_pos().unwrap_or((0.0, 0.0));
    let clearable = on_clear.is_some() && selected.is_some();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    if open_dropdown() == Some(id) {
                        open_dropdown.set(None);
                        return;
                    }
                    let point = event.client_coordinates();
                    dropdown_pos.set(Some((point.x, point.y + 24.0)));
                    open_dropdown.set(Some(id));
                },
                "{selected_label}"
            }
            if clearable {
                button {
                    style: "border: none; background: transparent; cursor: pointer; color: #666;",
                    title: "Clear",
                    onclick: move |event| {
                        event.stop_propagation();
                        if let Some(handler) = &on_clear {
                            handler.call(());
                        }
                    },
                    "✕"
                }
            }
        }

        if is_open {
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 200px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let is_selected = selected.as_deref() == Some(value.as_str());
                    let background = if is_selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            key: "{value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open_dropdown.set(None);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
pub fn StatCard(entry: StatEntry) -> Element {
    let color = entry.accent.color();
    rsx! {
        div {
            style: "padding: 8px; border: 1px solid {color}; border-radius: 6px; background: {color}1a; text-align: center;",
            div { style: "font-size: 12px; color: {color}; margin-bottom: 4px;", "{entry.title}" }
            div { "{entry.text}" }
        }
    }
}

#[component]
pub fn StatGrid(entries: Vec<StatEntry>) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 8px;",
            for entry in entries {
                StatCard { key: "{entry.title}", entry: entry.clone() }
            }
        }
    }
}

#[component]
pub fn CardCollapse(
    title: String,
    #[props(default = false)] initial_open: bool,
    #[props(default = false)] no_content_padding: bool,
    children: Element,
) -> Element {
    let mut open = use_signal(|| initial_open);
    let padding = if no_content_padding { "0" } else { "16px" };
    let arrow = if open() { "▲" } else { "▼" };

    rsx! {
        div {
            style: "margin-top: 16px; border: 1px solid #ddd; border-radius: 8px; background: #fff;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px;",
                strong { "{title}" }
                button {
                    style: "border: none; background: transparent; cursor: pointer;",
                    onclick: move |_| open.toggle(),
                    "{arrow}"
                }
            }
            if open() {
                div { style: "border-top: 1px solid #eee; padding: {padding};", {children} }
            }
        }
    }
}

#[component]
pub fn CardTile(
    id: String,
    name: String,
    set: Option<String>,
    image: Option<String>,
    price: Option<f64>,
    on_open: EventHandler<String>,
) -> Element {
    let set_text = set.unwrap_or_default();
    let price_text = format_usd(price);
    rsx! {
        div {
            style: "border: 1px solid #ddd; border-radius: 8px; overflow: hidden; cursor: pointer; background: #fff;",
            onclick: move |_| on_open.call(id.clone()),
            if let Some(url) = image {
                img { src: "{url}", alt: "{name}", style: "width: 100%; display: block;" }
            } else {
                div { style: "height: 240px; background: #f2f2f2;" }
            }
            div {
                style: "padding: 8px;",
                div { style: "font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;", "{name}" }
                div { style: "font-size: 12px; color: #666; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;", "{set_text}" }
                div { style: "font-size: 12px; color: #333;", "{price_text}" }
            }
        }
    }
}

#[component]
pub fn SkeletonTile() -> Element {
    rsx! {
        div {
            style: "border: 1px solid #eee; border-radius: 8px; overflow: hidden;",
            div { style: "height: 240px; background: #ececec;" }
            div { style: "margin: 8px; height: 14px; background: #ececec; border-radius: 4px;" }
            div { style: "margin: 8px; height: 14px; width: 60%; background: #ececec; border-radius: 4px;" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropdown_label_falls_back_when_unselected() {
        let options = vec![DropdownOption::new("set", "Set"), DropdownOption::new("rarity", "Rarity")];

        assert_eq!(dropdown_label(&options, Some("rarity")), "Rarity");
        assert_eq!(dropdown_label(&options, Some("cost")), "(none)");
        assert_eq!(dropdown_label(&options, None), "(none)");
    }
}
