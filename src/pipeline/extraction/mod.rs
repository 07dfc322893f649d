//! Entity extraction from annotated query text.
//!
//! Total by design: every stage yields an empty or absent value when the
//! text carries no signal, never an error. The orchestrator wires the
//! per-concern rules together; each rule lives in its own file.

pub mod types;
pub mod intent;
pub mod numbers;
pub mod conditions;
pub mod age;
pub mod gender;
pub mod orchestrator;

pub use orchestrator::EntityExtractor;
