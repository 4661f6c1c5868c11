// src/analysis/graph.rs
// =============================================================================
// Finds structural problems in a deduplicated redirect list.
//
// Each normalized source path is a node and each pair is an edge:
// - Loop:  an edge from a node to itself ("/a -> /a"). Always wrong, so the
//          pair is removed from the cleaned output.
// - Chain: an edge whose destination is itself the source of another edge
//          ("/a -> /b" while "/b -> /c" exists). Visitors take two hops, so
//          the pair is reported, but it is kept in the output.
//
// Chains are checked ONE hop deep. We do not follow "/a -> /b -> /c -> /d"
// to the end or compute chain lengths.
// =============================================================================

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use super::ingest::NormalizedPair;

/// A structural problem found in the redirect list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The redirect points at its own source path
    Loop { node: String },
    /// The redirect's destination is the source of another redirect
    Chain { from: String, to: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Loop { node } => write!(f, "Redirect loop: {} → {}", node, node),
            Issue::Chain { from, to } => write!(f, "Potential chain redirect: {} → {}", from, to),
        }
    }
}

/// Result of analyzing a pair list
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Loops first (in input order), then chains (in input order)
    pub issues: Vec<Issue>,
    /// All non-loop pairs, in input order
    pub filtered: Vec<NormalizedPair>,
}

pub fn analyze(pairs: Vec<NormalizedPair>) -> Analysis {
    let (loops, filtered): (Vec<_>, Vec<_>) = pairs.into_iter().partition(|p| p.is_loop());

    let mut issues: Vec<Issue> = loops
        .into_iter()
        .map(|p| Issue::Loop { node: p.source_key })
        .collect();

    let sources: HashSet<&str> = filtered.iter().map(|p| p.source_key.as_str()).collect();

    issues.extend(
        filtered
            .iter()
            .filter(|p| sources.contains(p.dest_key.as_str()))
            .map(|p| Issue::Chain {
                from: p.source_key.clone(),
                to: p.dest_key.clone(),
            }),
    );

    Analysis { issues, filtered }
}
