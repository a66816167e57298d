pub mod card_state;
pub mod catalog_state;
