//! The on/off switch element.

use crate::attributes::{ElementAttributes, SwitchAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::SwitchField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::SwitchField,
    palette: PaletteEntry {
        icon: "switch",
        label: "Switch Field",
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
        ElementAttributes::defaults_for(ElementKind::SwitchField),
    )
}

fn attrs(instance: &ElementInstance) -> &SwitchAttributes {
    match &instance.attributes {
        ElementAttributes::SwitchField(a) => a,
        other => unreachable!("switch descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element switch"><input type="checkbox" role="switch" disabled />{}{}</div>"#,
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
        r#"<div class="form-element switch"><input type="checkbox" role="switch" id="{}" name="{}" class="{}" value="true"{checked} />{}{}</div>"#,
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

// The switch commits "true"/"false" strings; required only checks that a
// commit happened at all.
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
    fn test_required_accepts_either_committed_state() {
        let instance = ElementInstance::new(
            "sw1".to_string(),
            ElementAttributes::SwitchField(SwitchAttributes {
                required: true,
                ..SwitchAttributes::default()
            }),
        );
        assert!(validate(&instance, "true"));
        assert!(validate(&instance, "false"));
        assert!(!validate(&instance, ""));
    }
}
