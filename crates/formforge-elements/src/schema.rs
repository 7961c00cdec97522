//! Properties-commit validation of attribute records.
//!
//! A properties edit replaces an element's attributes wholesale, and the
//! replacement must satisfy the owning kind's schema at commit time (not at
//! every intermediate keystroke). Errors accumulate per attribute rather
//! than short-circuiting, so the editor can surface every problem at once.

use std::collections::HashMap;

use formforge_core::error::ValidationError;

use crate::attributes::ElementAttributes;

/// Maximum length for an element label, in characters.
const LABEL_MAX: usize = 50;
/// Minimum length for an element label, in characters.
const LABEL_MIN: usize = 2;
/// Maximum length for helper text.
const HELPER_TEXT_MAX: usize = 200;
/// Maximum length for a placeholder.
const PLACEHOLDER_MAX: usize = 50;
/// Maximum length for a radio option label or value.
const OPTION_MAX: usize = 30;
/// Maximum accepted file size in kilobytes.
const FILE_MAX_SIZE_KB: u32 = 10_000;

type AttributeErrors = HashMap<String, Vec<ValidationError>>;

/// Validates an attribute record against its kind's schema.
///
/// Returns a compound [`ValidationError`] with per-attribute error lists on
/// failure. Every kind's default record passes its own schema.
pub fn validate_attributes(attrs: &ElementAttributes) -> Result<(), ValidationError> {
    let mut errors = AttributeErrors::new();

    match attrs {
        ElementAttributes::TextField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            check_placeholder(&mut errors, &a.placeholder);
        }
        ElementAttributes::NumberField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            check_placeholder(&mut errors, &a.placeholder);
        }
        ElementAttributes::TextAreaField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            check_placeholder(&mut errors, &a.placeholder);
            if !(3..=10).contains(&a.rows) {
                push(
                    &mut errors,
                    "rows",
                    ValidationError::new("Rows must be between 3 and 10.", "range"),
                );
            }
        }
        ElementAttributes::DateField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
        }
        ElementAttributes::SelectField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            check_placeholder(&mut errors, &a.placeholder);
        }
        ElementAttributes::CheckboxField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
        }
        ElementAttributes::RadioGroupField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            for option in &a.options {
                if option.label.is_empty() || option.label.chars().count() > OPTION_MAX {
                    push(
                        &mut errors,
                        "options",
                        ValidationError::new(
                            format!("Option labels must be 1 to {OPTION_MAX} characters."),
                            "option_label",
                        ),
                    );
                }
                if option.value.is_empty() || option.value.chars().count() > OPTION_MAX {
                    push(
                        &mut errors,
                        "options",
                        ValidationError::new(
                            format!("Option values must be 1 to {OPTION_MAX} characters."),
                            "option_value",
                        ),
                    );
                }
            }
        }
        ElementAttributes::SwitchField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
        }
        ElementAttributes::FileField(a) => {
            check_label(&mut errors, &a.label);
            check_helper_text(&mut errors, &a.helper_text);
            check_placeholder(&mut errors, &a.placeholder);
            if a.max_size > FILE_MAX_SIZE_KB {
                push(
                    &mut errors,
                    "maxSize",
                    ValidationError::new(
                        format!("Max file size must be less or equal to {FILE_MAX_SIZE_KB} Kb"),
                        "max",
                    ),
                );
            }
        }
        ElementAttributes::TitleField(a) => {
            check_bounded_text(&mut errors, "title", &a.title);
        }
        ElementAttributes::SubTitleField(a) => {
            check_bounded_text(&mut errors, "title", &a.title);
        }
        ElementAttributes::ParagraphField(a) => {
            check_bounded_text(&mut errors, "text", &a.text);
        }
        ElementAttributes::SeparatorField => {}
        ElementAttributes::SpacerField(a) => {
            if !(1..=100).contains(&a.height) {
                push(
                    &mut errors,
                    "height",
                    ValidationError::new("Height must be between 1 and 100 px.", "range"),
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::with_attribute_errors(errors))
    }
}

fn push(errors: &mut AttributeErrors, attr: &str, error: ValidationError) {
    errors.entry(attr.to_string()).or_default().push(error);
}

fn check_label(errors: &mut AttributeErrors, label: &str) {
    let len = label.chars().count();
    if len < LABEL_MIN {
        push(
            errors,
            "label",
            ValidationError::new(
                format!("Label must be at least {LABEL_MIN} characters."),
                "min_length",
            ),
        );
    }
    if len > LABEL_MAX {
        push(
            errors,
            "label",
            ValidationError::new(
                format!("Label must be at most {LABEL_MAX} characters."),
                "max_length",
            ),
        );
    }
}

fn check_helper_text(errors: &mut AttributeErrors, helper_text: &str) {
    if helper_text.chars().count() > HELPER_TEXT_MAX {
        push(
            errors,
            "helperText",
            ValidationError::new(
                format!("Helper text must be at most {HELPER_TEXT_MAX} characters."),
                "max_length",
            ),
        );
    }
}

fn check_placeholder(errors: &mut AttributeErrors, placeholder: &str) {
    if placeholder.chars().count() > PLACEHOLDER_MAX {
        push(
            errors,
            "placeholder",
            ValidationError::new(
                format!("Placeholder must be at most {PLACEHOLDER_MAX} characters."),
                "max_length",
            ),
        );
    }
}

// Titles and paragraph text share the label bounds.
fn check_bounded_text(errors: &mut AttributeErrors, attr: &str, text: &str) {
    let len = text.chars().count();
    if len < LABEL_MIN {
        push(
            errors,
            attr,
            ValidationError::new(
                format!("Must be at least {LABEL_MIN} characters."),
                "min_length",
            ),
        );
    }
    if len > LABEL_MAX {
        push(
            errors,
            attr,
            ValidationError::new(
                format!("Must be at most {LABEL_MAX} characters."),
                "max_length",
            ),
        );
    }
}
