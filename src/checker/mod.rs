// src/checker/mod.rs
// =============================================================================
// This module contains the destination liveness checks.
//
// Submodules:
// - http: Makes HTTP requests to see whether redirect destinations answer
//
// This file (mod.rs) is the module root: it re-exports the public API so the
// rest of the app can write `checker::LinkValidator` instead of
// `checker::http::LinkValidator`.
// =============================================================================

mod http;

pub use http::{LinkValidator, StatusOutcome, ValidationResult, ValidatorOptions};
