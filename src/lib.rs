pub mod catalog;
pub mod clock;
pub mod config;
pub mod desk;
pub mod error;
pub mod models;
pub mod operator;
pub mod share;
pub mod storage;
#[cfg(test)]
pub mod test_helpers;

pub use error::{CatalogError, Result};
