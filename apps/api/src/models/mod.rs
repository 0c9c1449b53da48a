pub mod candidate;
pub mod project;
pub mod project_match;
