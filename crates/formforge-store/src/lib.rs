//! # formforge-store
//!
//! The persistence boundary: durable form records, submission storage, and
//! traffic counters behind the async [`FormStore`] trait, plus the
//! owner-scoped [`FormActions`] entry points that resolve identity before
//! any data is touched.

pub mod actions;
pub mod memory;
pub mod models;
pub mod store;

pub use actions::FormActions;
pub use memory::MemoryStore;
pub use models::{Form, FormStats, FormSubmissionRecord, UserId};
pub use store::FormStore;
