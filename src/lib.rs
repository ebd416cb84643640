//! Component Catalogue
//!
//! Walks the component directories of several front-end apps, extracts
//! lightweight metadata from each component file, and serves the result as a
//! browsable catalogue with synthetic previews.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod models;
pub mod scanner;
pub mod services;
pub mod web;
