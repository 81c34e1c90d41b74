// Request-scoped domain inputs supplied by callers.
// Model-facing payloads live in `contracts`, not here.

pub mod job;

pub use job::{Answers, JobPosting};
