//! # formforge-elements
//!
//! The typed element model at the heart of the form builder: a closed set of
//! element kinds, one concrete attribute record per kind, and a total
//! registry mapping each kind to its descriptor (palette metadata,
//! constructor, view renderers, and validator).
//!
//! ## Modules
//!
//! - [`kind`] - The closed [`ElementKind`](kind::ElementKind) enumeration
//! - [`attributes`] - Per-kind attribute records (no open maps, no downcasts)
//! - [`schema`] - Properties-commit validation of attribute records
//! - [`instance`] - [`ElementInstance`](instance::ElementInstance) and the
//!   wire (de)serialization of form content
//! - [`descriptor`] - The [`ElementDescriptor`](descriptor::ElementDescriptor)
//!   capability bundle
//! - [`registry`] - Total lookup from kind to descriptor
//! - [`elements`] - Per-kind descriptor implementations
//! - [`html`] - Shared HTML fragment helpers

pub mod attributes;
pub mod descriptor;
pub mod elements;
pub mod html;
pub mod instance;
pub mod kind;
pub mod registry;
pub mod schema;

pub use attributes::ElementAttributes;
pub use descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
pub use instance::{parse_content, serialize_content, ElementInstance};
pub use kind::ElementKind;
pub use registry::Registry;
