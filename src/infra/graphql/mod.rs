pub mod client;
pub mod documents;
pub mod source;
pub mod ws;
