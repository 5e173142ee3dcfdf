//! Domain types and pure evaluation logic for the vislab backend.
//!
//! This crate has no database dependencies. Persistence lives in
//! `vislab-db`, which implements [`store::EvaluationStore`] on top of
//! PostgreSQL; the HTTP layer in `vislab-api` only talks to the trait.

pub mod confusion;
pub mod error;
pub mod evaluation;
pub mod evaluation_set;
pub mod labels;
pub mod memory;
pub mod store;
pub mod types;
