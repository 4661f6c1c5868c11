// src/analysis/mod.rs
// =============================================================================
// Offline analysis of a redirect list. No network access happens here.
//
// Submodules:
// - normalize: URL/path -> comparable path key
// - ingest: records -> normalized, deduplicated pairs
// - graph: pairs -> loop/chain issues + the filtered pair list
//
// Everything in this module is synchronous and pure: same input, same output,
// same order.
// =============================================================================

mod graph;
mod ingest;
mod normalize;

pub use graph::{analyze, Issue};
pub use ingest::{ingest, NormalizedPair, RedirectRecord};
