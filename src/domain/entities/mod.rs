pub mod card;
pub mod filter;
pub mod labels;
pub mod page;
pub mod query;
