//! The closed enumeration of element kinds.
//!
//! The set of kinds is fixed at build time. Adding a kind means defining its
//! attribute record, its three view renderers, its validator, and registering
//! the descriptor in [`Registry`](crate::registry::Registry) — the compiler's
//! exhaustiveness checking flags every site that needs updating.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies which kind of form element an instance is.
///
/// The `Display`/serde representation is the wire tag stored in serialized
/// form content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// A single-line text input.
    TextField,
    /// A numeric input.
    NumberField,
    /// A multi-line text input.
    TextAreaField,
    /// A date picker.
    DateField,
    /// A dropdown select.
    SelectField,
    /// A single checkbox.
    CheckboxField,
    /// A group of radio buttons.
    RadioGroupField,
    /// An on/off switch.
    SwitchField,
    /// A file upload input.
    FileField,
    /// A static title heading (no user input).
    TitleField,
    /// A static subtitle heading (no user input).
    SubTitleField,
    /// A static paragraph of text (no user input).
    ParagraphField,
    /// A horizontal separator line (no user input).
    SeparatorField,
    /// Vertical whitespace (no user input).
    SpacerField,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 14] = [
        Self::TitleField,
        Self::SubTitleField,
        Self::ParagraphField,
        Self::SeparatorField,
        Self::SpacerField,
        Self::TextField,
        Self::NumberField,
        Self::TextAreaField,
        Self::DateField,
        Self::SelectField,
        Self::CheckboxField,
        Self::RadioGroupField,
        Self::SwitchField,
        Self::FileField,
    ];

    /// Returns `true` for layout-only kinds, which render static content and
    /// never carry user input.
    pub const fn is_layout(self) -> bool {
        matches!(
            self,
            Self::TitleField
                | Self::SubTitleField
                | Self::ParagraphField
                | Self::SeparatorField
                | Self::SpacerField
        )
    }

    /// Returns the wire tag for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TextField => "TextField",
            Self::NumberField => "NumberField",
            Self::TextAreaField => "TextAreaField",
            Self::DateField => "DateField",
            Self::SelectField => "SelectField",
            Self::CheckboxField => "CheckboxField",
            Self::RadioGroupField => "RadioGroupField",
            Self::SwitchField => "SwitchField",
            Self::FileField => "FileField",
            Self::TitleField => "TitleField",
            Self::SubTitleField => "SubTitleField",
            Self::ParagraphField => "ParagraphField",
            Self::SeparatorField => "SeparatorField",
            Self::SpacerField => "SpacerField",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_kind_once() {
        let mut seen = std::collections::HashSet::new();
        for kind in ElementKind::ALL {
            assert!(seen.insert(kind), "{kind} listed twice");
        }
        assert_eq!(seen.len(), 14);
    }

    #[test]
    fn test_layout_kinds() {
        assert!(ElementKind::TitleField.is_layout());
        assert!(ElementKind::SeparatorField.is_layout());
        assert!(ElementKind::SpacerField.is_layout());
        assert!(!ElementKind::TextField.is_layout());
        assert!(!ElementKind::FileField.is_layout());
    }

    #[test]
    fn test_wire_tag_round_trip() {
        for kind in ElementKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
            let back: ElementKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }
}
