//! # formforge
//!
//! A drag-and-drop form builder core.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `formforge` to get the whole pipeline, or
//! depend on individual crates for finer-grained control.

/// Core types: errors, settings, logging, and id generation.
pub use formforge_core as core;

/// Typed form elements: kinds, attributes, descriptors, and the registry.
pub use formforge_elements as elements;

/// The designer-surface state container.
pub use formforge_designer as designer;

/// The submission runtime for published forms.
pub use formforge_runtime as runtime;

/// The persistence boundary: form store trait, in-memory backend, and the
/// owner-scoped actions layer.
pub use formforge_store as store;

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use formforge_core::{FormForgeError, FormForgeResult, ValidationError};
    pub use formforge_designer::{Designer, DesignerError};
    pub use formforge_elements::{ElementAttributes, ElementInstance, ElementKind, Registry};
    pub use formforge_runtime::SubmissionRuntime;
    pub use formforge_store::{Form, FormActions, FormStore, MemoryStore, UserId};
}
