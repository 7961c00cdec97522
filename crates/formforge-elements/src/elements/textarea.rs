//! The multi-line text input element.

use crate::attributes::{ElementAttributes, TextAreaAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::TextAreaField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::TextAreaField,
    palette: PaletteEntry {
        icon: "textarea",
        label: "Textarea Field",
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
        ElementAttributes::defaults_for(ElementKind::TextAreaField),
    )
}

fn attrs(instance: &ElementInstance) -> &TextAreaAttributes {
    match &instance.attributes {
        ElementAttributes::TextAreaField(a) => a,
        other => unreachable!("textarea descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}<textarea readonly disabled rows="{}" placeholder="{}"></textarea>{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        a.rows,
        html::escape(&a.placeholder),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<textarea id="{}" name="{}" class="{}" rows="{}" placeholder="{}">{}</textarea>{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
        a.rows,
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
            properties::number_row("rows", "Rows", a.rows),
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
    fn test_rows_rendered_in_both_views() {
        let instance = construct("a1".to_string());
        assert!(designer_view(&instance).contains(r#"rows="3""#));
        assert!(runtime_view(&instance, RuntimeState::default()).contains(r#"rows="3""#));
    }

    #[test]
    fn test_committed_value_rendered_as_body() {
        let instance = construct("a1".to_string());
        let html = runtime_view(
            &instance,
            RuntimeState {
                value: Some("multi\nline"),
                invalid: false,
            },
        );
        assert!(html.contains(">multi\nline</textarea>"));
    }
}
