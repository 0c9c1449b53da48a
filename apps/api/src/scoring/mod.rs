//! Candidate Scorer — ingestion-time scoring of raw candidate attributes.
//!
//! Runs once per ingested candidate. Scoring is total: malformed inputs are
//! clamped, never rejected, so a defective resume extraction still yields a
//! rankable record.

pub mod candidate_scorer;
pub mod handlers;
pub mod weights;
