// ATS Scoring Engine
// Implements: tokenizing, keyword matching, section structure, formatting heuristics,
// skill-gap analysis, recommendations and the aggregate report.
// Everything except `handlers` is pure and synchronous; `handlers` is the HTTP entry point.

pub mod analyzer;
pub mod formatting;
pub mod handlers;
pub mod keywords;
pub mod recommendations;
pub mod report;
pub mod skill_gap;
pub mod structure;
pub mod taxonomy;
pub mod tokenizer;
