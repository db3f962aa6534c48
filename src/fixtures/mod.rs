//! Test fixtures and sample data
//!
//! Sample streaming chunks and chunk sequences for unit tests, mirroring
//! real wire payloads so merge behavior is exercised against realistic data.

#[cfg(test)]
mod chunk_fixtures;

#[cfg(test)]
pub use chunk_fixtures::*;
