pub use error::{CatalogError, LinkError, TokenError};

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod link;
pub mod token;
mod utils;
