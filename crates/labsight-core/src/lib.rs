//! labsight-core
//!
//! Pure domain types, table column classification, prompt building, and the
//! question fan-out. No AWS SDK dependency: the document-analysis and
//! text-generation services are reached through the traits in [`analyze`].

pub mod analyze;
pub mod classify;
pub mod error;
pub mod models;
pub mod prompt;
