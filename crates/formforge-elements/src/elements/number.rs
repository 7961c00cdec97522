//! The numeric input element.

use crate::attributes::{ElementAttributes, NumberAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::NumberField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::NumberField,
    palette: PaletteEntry {
        icon: "number",
        label: "Number Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(
        id,
        ElementAttributes::defaults_for(ElementKind::NumberField),
    )
}

fn attrs(instance: &ElementInstance) -> &NumberAttributes {
    match &instance.attributes {
        ElementAttributes::NumberField(a) => a,
        other => unreachable!("number field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}<input type="number" readonly disabled placeholder="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&a.placeholder),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<input type="number" id="{}" name="{}" class="{}" placeholder="{}" value="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
        html::escape(&a.placeholder),
        html::escape(state.value.unwrap_or("")),
        html::helper_fragment(&a.helper_text, state.invalid)
    )
}

fn properties_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    properties::form(
        &instance.id,
        &[
            properties::text_row("label", "Label", &a.label),
            properties::text_row("placeholder", "Placeholder", &a.placeholder),
            properties::text_row("helperText", "Helper text", &a.helper_text),
            properties::switch_row("required", "Required", a.required),
        ],
    )
}

// The browser's number input constrains the value shape; required only
// checks presence, matching the other input kinds.
fn validate(instance: &ElementInstance, candidate: &str) -> bool {
    if attrs(instance).required {
        return !candidate.is_empty();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_placeholder_is_zero() {
        let instance = construct("n1".to_string());
        assert!(designer_view(&instance).contains(r#"placeholder="0""#));
    }

    #[test]
    fn test_required_presence_check() {
        let instance = ElementInstance::new(
            "n1".to_string(),
            ElementAttributes::NumberField(NumberAttributes {
                required: true,
                ..NumberAttributes::default()
            }),
        );
        assert!(!validate(&instance, ""));
        assert!(validate(&instance, "42"));
    }
}
