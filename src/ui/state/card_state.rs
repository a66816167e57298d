use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct CardSectionsState {
    pub properties_open: Signal<bool>,
    pub stats_open: Signal<bool>,
    pub details_open: Signal<bool>,
}

impl CardSectionsState {
    pub fn new() -> Self {
        Self {
            properties_open: use_signal(|| true),
            stats_open: use_signal(|| false),
            details_open: use_signal(|| false),
        }
    }
}
