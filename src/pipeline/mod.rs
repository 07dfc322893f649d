pub mod extraction;
pub mod query;
pub mod fetch;
pub mod processor; // end-to-end orchestrator: text → entities → query → records
