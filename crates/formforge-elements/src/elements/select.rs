//! The dropdown select element.

use crate::attributes::{ElementAttributes, SelectAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::SelectField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::SelectField,
    palette: PaletteEntry {
        icon: "dropdown",
        label: "Select Field",
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
        ElementAttributes::defaults_for(ElementKind::SelectField),
    )
}

fn attrs(instance: &ElementInstance) -> &SelectAttributes {
    match &instance.attributes {
        ElementAttributes::SelectField(a) => a,
        other => unreachable!("select field descriptor invoked with {}", other.kind()),
    }
}

fn option_tags(options: &[String], selected: Option<&str>) -> String {
    options
        .iter()
        .map(|option| {
            let marker = if selected == Some(option.as_str()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{marker}>{}</option>"#,
                html::escape(option),
                html::escape(option)
            )
        })
        .collect()
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    // The designer preview shows only the placeholder, never the options.
    format!(
        r#"<div class="designer-element">{}<select disabled><option value="" disabled selected>{}</option></select>{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&a.placeholder),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<select id="{}" name="{}" class="{}"><option value="" disabled{}>{}</option>{}</select>{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
        if state.value.is_none() { " selected" } else { "" },
        html::escape(&a.placeholder),
        option_tags(&a.options, state.value),
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
            properties::options_rows("options", "Options", &a.options),
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

    fn with_options() -> ElementInstance {
        ElementInstance::new(
            "s1".to_string(),
            ElementAttributes::SelectField(SelectAttributes {
                options: vec!["Red".to_string(), "Blue".to_string()],
                required: true,
                ..SelectAttributes::default()
            }),
        )
    }

    #[test]
    fn test_runtime_view_lists_options() {
        let html = runtime_view(&with_options(), RuntimeState::default());
        assert!(html.contains(r#"<option value="Red">Red</option>"#));
        assert!(html.contains(r#"<option value="Blue">Blue</option>"#));
    }

    #[test]
    fn test_committed_value_is_selected() {
        let html = runtime_view(
            &with_options(),
            RuntimeState {
                value: Some("Blue"),
                invalid: false,
            },
        );
        assert!(html.contains(r#"<option value="Blue" selected>Blue</option>"#));
    }

    #[test]
    fn test_designer_view_hides_options() {
        let html = designer_view(&with_options());
        assert!(!html.contains("Red"));
        assert!(html.contains("Value here..."));
    }

    #[test]
    fn test_required_presence_check() {
        let instance = with_options();
        assert!(!validate(&instance, ""));
        assert!(validate(&instance, "Red"));
    }
}
