pub mod countdown;
pub mod results;

pub use countdown::{mount_countdown, CountdownDisplay};
pub use results::{show_results, SubmissionResults, SubmissionResultsProps};
