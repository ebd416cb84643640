//! Business logic services for the component catalogue.
//!
//! `catalogue` scans and looks up components; `controls` and `usage` turn
//! parsed props into editor controls, preview state and code snippets.

mod catalogue;
pub mod controls;
pub mod usage;

pub use catalogue::{Catalogue, CatalogueFilter, CatalogueService, ComponentDetail, Envelope};
