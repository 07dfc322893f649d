//! Translation of extracted entities into a FHIR search specification.
//!
//! Pure and total: any shape of `ExtractedEntities` — including fully empty —
//! builds a valid (possibly parameter-less) query. No I/O, no clock reads;
//! the reference year is injected by the caller.

pub mod types;
pub mod builder;

pub use builder::build_query;
