// src/lib.rs

pub mod browser;
pub mod catalog;
pub mod config;
pub mod criteria;
pub mod error;
pub mod generator;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod templates;

pub use browser::CatalogBrowser;
pub use catalog::Catalog;
pub use config::{CatalogConfig, GeneratorConfig};
pub use criteria::{Accreditation, Criteria, SortKey};
pub use error::{CatalogError, Result};
pub use generator::FixtureGenerator;
pub use loader::SeedData;
pub use models::{Amount, Correlation, Icon, Investment};
pub use pipeline::{view, CatalogPage};
