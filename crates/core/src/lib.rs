//! Domain types and pure logic for the painting contractor backend.
//!
//! Nothing in this crate touches the store: identifier generation, error
//! taxonomy, cost accumulation and tabular rendering live here so the
//! repository and HTTP layers can share them.

pub mod costing;
pub mod csv;
pub mod error;
pub mod types;
