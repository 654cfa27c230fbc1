//! AI-assisted candidate extraction and ranking.
//!
//! The heuristic path in `resumex-core` is the always-succeeds baseline;
//! this crate delegates the same extraction to an external chat-completion
//! service and fails hard on network or parse errors. Callers decide
//! whether to retry, fall back to the heuristic record, or surface the
//! failure; no retry or timeout policy is built in.

pub mod client;
pub mod error;
pub mod extractor;
pub mod ranker;

mod reply;

pub use client::ChatClient;
pub use error::{AiError, AiResult};
pub use extractor::AiExtractor;
pub use ranker::{CandidateRanker, Ranking};
