//! The single checkbox element.

use crate::attributes::{CheckboxAttributes, ElementAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::CheckboxField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::CheckboxField,
    palette: PaletteEntry {
        icon: "checkbox",
        label: "Checkbox Field",
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
        ElementAttributes::defaults_for(ElementKind::CheckboxField),
    )
}

fn attrs(instance: &ElementInstance) -> &CheckboxAttributes {
    match &instance.attributes {
        ElementAttributes::CheckboxField(a) => a,
        other => unreachable!("checkbox descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element checkbox"><input type="checkbox" disabled />{}{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    let checked = if state.value == Some("true") {
        " checked"
    } else {
        ""
    };
    format!(
        r#"<div class="form-element checkbox"><input type="checkbox" id="{}" name="{}" class="{}" value="true"{checked} />{}{}</div>"#,
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
        html::label_fragment(&instance.id, &a.label, a.required),
        html::helper_fragment(&a.helper_text, state.invalid)
    )
}

fn properties_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    properties::form(
        &instance.id,
        &[
            properties::text_row("label", "Label", &a.label),
            properties::text_row("helperText", "Helper text", &a.helper_text),
            properties::switch_row("required", "Required", a.required),
        ],
    )
}

// A checkbox commits "true" or "false"; required means it must be ticked.
fn validate(instance: &ElementInstance, candidate: &str) -> bool {
    if attrs(instance).required {
        return candidate == "true";
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_instance() -> ElementInstance {
        ElementInstance::new(
            "c1".to_string(),
            ElementAttributes::CheckboxField(CheckboxAttributes {
                required: true,
                ..CheckboxAttributes::default()
            }),
        )
    }

    #[test]
    fn test_required_needs_true() {
        let instance = required_instance();
        assert!(validate(&instance, "true"));
        assert!(!validate(&instance, "false"));
        assert!(!validate(&instance, ""));
    }

    #[test]
    fn test_optional_accepts_anything() {
        let instance = construct("c1".to_string());
        assert!(validate(&instance, "false"));
        assert!(validate(&instance, ""));
    }

    #[test]
    fn test_runtime_checked_state() {
        let instance = required_instance();
        let html = runtime_view(
            &instance,
            RuntimeState {
                value: Some("true"),
                invalid: false,
            },
        );
        assert!(html.contains(" checked"));
    }
}
