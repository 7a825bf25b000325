pub mod config;
pub mod entities;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seeders;

pub use error::SeedError;
