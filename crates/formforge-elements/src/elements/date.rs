//! The date picker element.

use crate::attributes::{DateAttributes, ElementAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::DateField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::DateField,
    palette: PaletteEntry {
        icon: "calendar",
        label: "Date Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(id, ElementAttributes::defaults_for(ElementKind::DateField))
}

fn attrs(instance: &ElementInstance) -> &DateAttributes {
    match &instance.attributes {
        ElementAttributes::DateField(a) => a,
        other => unreachable!("date field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}<input type="date" readonly disabled />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<input type="date" id="{}" name="{}" class="{}" value="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
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
            properties::text_row("helperText", "Helper text", &a.helper_text),
            properties::switch_row("required", "Required", a.required),
        ],
    )
}

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
    fn test_default_helper_text() {
        let instance = construct("d1".to_string());
        assert!(designer_view(&instance).contains("Pick a date"));
    }
}
