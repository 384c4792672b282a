pub mod statistics;
pub mod submission;
