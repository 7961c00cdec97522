//! Per-kind attribute records.
//!
//! Each element kind carries its own concrete attribute struct, and
//! [`ElementAttributes`] ties them together as a tagged variant. This
//! replaces the open attribute map of a dynamically-typed form builder: the
//! kind and the shape of its attributes can never disagree, and no runtime
//! downcasting is needed anywhere.
//!
//! The `Default` impls are the palette defaults — the state a freshly
//! dragged-in element starts with. Every default satisfies its own schema
//! (see [`schema`](crate::schema)), so a default-configured form is always
//! publishable.

use serde::{Deserialize, Serialize};

use crate::kind::ElementKind;

/// Attributes for a single-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must fill this field in.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            label: "Text field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            placeholder: "Value here...".to_string(),
        }
    }
}

/// Attributes for a numeric input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NumberAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must fill this field in.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
}

impl Default for NumberAttributes {
    fn default() -> Self {
        Self {
            label: "Number field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            placeholder: "0".to_string(),
        }
    }
}

/// Attributes for a multi-line text input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAreaAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must fill this field in.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Number of visible text rows.
    pub rows: u32,
}

impl Default for TextAreaAttributes {
    fn default() -> Self {
        Self {
            label: "Textarea field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            placeholder: "Value here...".to_string(),
            rows: 3,
        }
    }
}

/// Attributes for a date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DateAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must pick a date.
    pub required: bool,
}

impl Default for DateAttributes {
    fn default() -> Self {
        Self {
            label: "Date field".to_string(),
            helper_text: "Pick a date".to_string(),
            required: false,
        }
    }
}

/// Attributes for a dropdown select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must pick an option.
    pub required: bool,
    /// Placeholder shown before an option is picked.
    pub placeholder: String,
    /// The selectable option values.
    pub options: Vec<String>,
}

impl Default for SelectAttributes {
    fn default() -> Self {
        Self {
            label: "Select field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            placeholder: "Value here...".to_string(),
            options: Vec::new(),
        }
    }
}

/// Attributes for a single checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckboxAttributes {
    /// Label displayed next to the checkbox.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must tick the box.
    pub required: bool,
}

impl Default for CheckboxAttributes {
    fn default() -> Self {
        Self {
            label: "Checkbox field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
        }
    }
}

/// One selectable option of a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    /// The human-readable option label.
    pub label: String,
    /// The value stored when this option is chosen.
    pub value: String,
}

/// Attributes for a group of radio buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioGroupAttributes {
    /// Label displayed above the group.
    pub label: String,
    /// Helper text displayed below the group.
    pub helper_text: String,
    /// Whether the end user must choose an option.
    pub required: bool,
    /// The selectable options.
    pub options: Vec<RadioOption>,
}

impl Default for RadioGroupAttributes {
    fn default() -> Self {
        Self {
            label: "Radio group field".to_string(),
            helper_text: "Radio group helper text".to_string(),
            required: false,
            options: vec![
                RadioOption {
                    label: "Yes".to_string(),
                    value: "true".to_string(),
                },
                RadioOption {
                    label: "No".to_string(),
                    value: "false".to_string(),
                },
            ],
        }
    }
}

/// Attributes for an on/off switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwitchAttributes {
    /// Label displayed next to the switch.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must turn the switch on.
    pub required: bool,
}

impl Default for SwitchAttributes {
    fn default() -> Self {
        Self {
            label: "Switch field".to_string(),
            helper_text: "Switch field helper text".to_string(),
            required: false,
        }
    }
}

/// Attributes for a file upload input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileAttributes {
    /// Label displayed above the field.
    pub label: String,
    /// Helper text displayed below the field.
    pub helper_text: String,
    /// Whether the end user must select a file.
    pub required: bool,
    /// Placeholder shown in the empty input.
    pub placeholder: String,
    /// Maximum accepted file size in kilobytes. Enforced at the UI
    /// boundary, not by the validator.
    pub max_size: u32,
}

impl Default for FileAttributes {
    fn default() -> Self {
        Self {
            label: "File field".to_string(),
            helper_text: "Helper text".to_string(),
            required: false,
            placeholder: "Select file".to_string(),
            max_size: 2048,
        }
    }
}

/// Attributes for a static title heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitleAttributes {
    /// The heading text.
    pub title: String,
}

impl Default for TitleAttributes {
    fn default() -> Self {
        Self {
            title: "Title".to_string(),
        }
    }
}

/// Attributes for a static subtitle heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubTitleAttributes {
    /// The heading text.
    pub title: String,
}

impl Default for SubTitleAttributes {
    fn default() -> Self {
        Self {
            title: "SubTitle".to_string(),
        }
    }
}

/// Attributes for a static paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphAttributes {
    /// The paragraph text.
    pub text: String,
}

impl Default for ParagraphAttributes {
    fn default() -> Self {
        Self {
            text: "Paragraph field".to_string(),
        }
    }
}

/// Attributes for vertical whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerAttributes {
    /// Height of the gap in pixels.
    pub height: u32,
}

impl Default for SpacerAttributes {
    fn default() -> Self {
        Self { height: 20 }
    }
}

/// The attribute record of one element, tagged by kind.
///
/// On the wire this serializes adjacently tagged, producing exactly the
/// stored content shape: `{"type": "TextField", "extraAttributes": {...}}`.
/// The separator carries no attributes and omits `extraAttributes` entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "extraAttributes")]
pub enum ElementAttributes {
    /// See [`TextAttributes`].
    TextField(TextAttributes),
    /// See [`NumberAttributes`].
    NumberField(NumberAttributes),
    /// See [`TextAreaAttributes`].
    TextAreaField(TextAreaAttributes),
    /// See [`DateAttributes`].
    DateField(DateAttributes),
    /// See [`SelectAttributes`].
    SelectField(SelectAttributes),
    /// See [`CheckboxAttributes`].
    CheckboxField(CheckboxAttributes),
    /// See [`RadioGroupAttributes`].
    RadioGroupField(RadioGroupAttributes),
    /// See [`SwitchAttributes`].
    SwitchField(SwitchAttributes),
    /// See [`FileAttributes`].
    FileField(FileAttributes),
    /// See [`TitleAttributes`].
    TitleField(TitleAttributes),
    /// See [`SubTitleAttributes`].
    SubTitleField(SubTitleAttributes),
    /// See [`ParagraphAttributes`].
    ParagraphField(ParagraphAttributes),
    /// A separator has no attributes.
    SeparatorField,
    /// See [`SpacerAttributes`].
    SpacerField(SpacerAttributes),
}

impl ElementAttributes {
    /// Returns the kind this attribute record belongs to.
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::TextField(_) => ElementKind::TextField,
            Self::NumberField(_) => ElementKind::NumberField,
            Self::TextAreaField(_) => ElementKind::TextAreaField,
            Self::DateField(_) => ElementKind::DateField,
            Self::SelectField(_) => ElementKind::SelectField,
            Self::CheckboxField(_) => ElementKind::CheckboxField,
            Self::RadioGroupField(_) => ElementKind::RadioGroupField,
            Self::SwitchField(_) => ElementKind::SwitchField,
            Self::FileField(_) => ElementKind::FileField,
            Self::TitleField(_) => ElementKind::TitleField,
            Self::SubTitleField(_) => ElementKind::SubTitleField,
            Self::ParagraphField(_) => ElementKind::ParagraphField,
            Self::SeparatorField => ElementKind::SeparatorField,
            Self::SpacerField(_) => ElementKind::SpacerField,
        }
    }

    /// Returns the default attribute record for a kind — the palette state.
    pub fn defaults_for(kind: ElementKind) -> Self {
        match kind {
            ElementKind::TextField => Self::TextField(TextAttributes::default()),
            ElementKind::NumberField => Self::NumberField(NumberAttributes::default()),
            ElementKind::TextAreaField => Self::TextAreaField(TextAreaAttributes::default()),
            ElementKind::DateField => Self::DateField(DateAttributes::default()),
            ElementKind::SelectField => Self::SelectField(SelectAttributes::default()),
            ElementKind::CheckboxField => Self::CheckboxField(CheckboxAttributes::default()),
            ElementKind::RadioGroupField => Self::RadioGroupField(RadioGroupAttributes::default()),
            ElementKind::SwitchField => Self::SwitchField(SwitchAttributes::default()),
            ElementKind::FileField => Self::FileField(FileAttributes::default()),
            ElementKind::TitleField => Self::TitleField(TitleAttributes::default()),
            ElementKind::SubTitleField => Self::SubTitleField(SubTitleAttributes::default()),
            ElementKind::ParagraphField => Self::ParagraphField(ParagraphAttributes::default()),
            ElementKind::SeparatorField => Self::SeparatorField,
            ElementKind::SpacerField => Self::SpacerField(SpacerAttributes::default()),
        }
    }

    /// Returns `true` if the element has `required` set. Layout kinds and
    /// kinds without a required flag return `false`.
    pub const fn is_required(&self) -> bool {
        match self {
            Self::TextField(a) => a.required,
            Self::NumberField(a) => a.required,
            Self::TextAreaField(a) => a.required,
            Self::DateField(a) => a.required,
            Self::SelectField(a) => a.required,
            Self::CheckboxField(a) => a.required,
            Self::RadioGroupField(a) => a.required,
            Self::SwitchField(a) => a.required,
            Self::FileField(a) => a.required,
            Self::TitleField(_)
            | Self::SubTitleField(_)
            | Self::ParagraphField(_)
            | Self::SeparatorField
            | Self::SpacerField(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementAttributes::defaults_for(kind).kind(), kind);
        }
    }

    #[test]
    fn test_wire_shape_camel_case() {
        let attrs = ElementAttributes::TextField(TextAttributes::default());
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["type"], "TextField");
        assert_eq!(json["extraAttributes"]["helperText"], "Helper text");
        assert_eq!(json["extraAttributes"]["placeholder"], "Value here...");
    }

    #[test]
    fn test_separator_omits_extra_attributes() {
        let attrs = ElementAttributes::SeparatorField;
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["type"], "SeparatorField");
        assert!(json.get("extraAttributes").is_none());
    }

    #[test]
    fn test_file_attributes_max_size_key() {
        let attrs = ElementAttributes::FileField(FileAttributes::default());
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["extraAttributes"]["maxSize"], 2048);
    }

    #[test]
    fn test_partial_attributes_fall_back_to_defaults() {
        let json = r#"{"type": "TextField", "extraAttributes": {"label": "Name"}}"#;
        let attrs: ElementAttributes = serde_json::from_str(json).unwrap();
        let ElementAttributes::TextField(text) = attrs else {
            panic!("expected a text field");
        };
        assert_eq!(text.label, "Name");
        assert_eq!(text.helper_text, "Helper text");
        assert!(!text.required);
    }

    #[test]
    fn test_required_flag() {
        let mut text = TextAttributes::default();
        text.required = true;
        assert!(ElementAttributes::TextField(text).is_required());
        assert!(!ElementAttributes::SeparatorField.is_required());
        assert!(!ElementAttributes::TitleField(TitleAttributes::default()).is_required());
    }
}
