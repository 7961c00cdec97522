//! The submission runtime: takes a published form's element sequence and
//! collects visitor values, validating each one at commit time.

pub mod runtime;

pub use runtime::{RuntimeError, SubmissionRuntime};
