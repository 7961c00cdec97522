//! The per-kind capability bundle.
//!
//! An [`ElementDescriptor`] gathers everything one element kind contributes:
//! palette metadata, a constructor producing a valid default instance, the
//! three view renderers (designer preview, runtime input, properties
//! editor), and the submission-time validator. Descriptors are `'static`
//! values defined next to their kind in [`elements`](crate::elements) and
//! reached through [`Registry`](crate::registry::Registry).

use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Metadata for rendering a kind's button in the designer palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Icon identifier for the palette button.
    pub icon: &'static str,
    /// Human-readable palette label.
    pub label: &'static str,
}

/// Per-field state threaded into the runtime view.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeState<'a> {
    /// The field's last committed (or default) value, if any.
    pub value: Option<&'a str>,
    /// Whether the field is currently in the error state.
    pub invalid: bool,
}

/// The bundle of behavior associated with one element kind.
///
/// Invariants, kept in lockstep with [`ElementKind`]:
/// - `construct` returns an instance whose attributes already satisfy the
///   kind's own schema, so no default configuration is un-publishable.
/// - The view and validate functions are only ever invoked with an instance
///   of the descriptor's own kind; a mismatch is a programming error and
///   fails fast.
pub struct ElementDescriptor {
    /// The kind this descriptor implements.
    pub kind: ElementKind,
    /// Palette button metadata.
    pub palette: PaletteEntry,
    /// Builds a new instance with default attributes.
    pub construct: fn(String) -> ElementInstance,
    /// Renders the designer-time preview fragment.
    pub designer_view: fn(&ElementInstance) -> String,
    /// Renders the runtime input fragment.
    pub runtime_view: fn(&ElementInstance, RuntimeState<'_>) -> String,
    /// Renders the properties-editor fragment.
    pub properties_view: fn(&ElementInstance) -> String,
    /// Decides whether a submitted value satisfies this instance's
    /// constraints. Pure and deterministic.
    pub validate: fn(&ElementInstance, &str) -> bool,
}
