//! Eligibility matching and ranking for Indian government benefit schemes.
//!
//! Given a seeker profile and a read-only scheme catalog, the engine decides
//! a per-scheme eligibility verdict, computes an additive relevance score,
//! and returns a stably ranked result set. The engine is pure and
//! synchronous; catalogs are small enough that every query re-evaluates the
//! full list.

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
