//! The single-line text input element.

use crate::attributes::{ElementAttributes, TextAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::TextField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::TextField,
    palette: PaletteEntry {
        icon: "text",
        label: "Text Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(id, ElementAttributes::defaults_for(ElementKind::TextField))
}

fn attrs(instance: &ElementInstance) -> &TextAttributes {
    match &instance.attributes {
        ElementAttributes::TextField(a) => a,
        other => unreachable!("text field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}<input type="text" readonly disabled placeholder="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&a.placeholder),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<input type="text" id="{}" name="{}" class="{}" placeholder="{}" value="{}" />{}</div>"#,
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

fn validate(instance: &ElementInstance, candidate: &str) -> bool {
    if attrs(instance).required {
        return !candidate.is_empty();
    }
    true
}
