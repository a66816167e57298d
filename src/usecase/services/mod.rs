pub mod card_service;
pub mod catalog_service;
