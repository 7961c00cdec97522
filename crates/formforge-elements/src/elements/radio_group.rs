//! The radio button group element.

use crate::attributes::{ElementAttributes, RadioGroupAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::RadioGroupField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::RadioGroupField,
    palette: PaletteEntry {
        icon: "radio",
        label: "Radio group",
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
        ElementAttributes::defaults_for(ElementKind::RadioGroupField),
    )
}

fn attrs(instance: &ElementInstance) -> &RadioGroupAttributes {
    match &instance.attributes {
        ElementAttributes::RadioGroupField(a) => a,
        other => unreachable!("radio group descriptor invoked with {}", other.kind()),
    }
}

fn radio_inputs(instance: &ElementInstance, a: &RadioGroupAttributes, state: RuntimeState<'_>, disabled: bool) -> String {
    a.options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let checked = if !disabled && state.value == Some(option.value.as_str()) {
                " checked"
            } else {
                ""
            };
            let off = if disabled { " disabled" } else { "" };
            format!(
                r#"<div class="radio-option"><input type="radio" id="{id}-{i}" name="{id}" value="{}"{checked}{off} /><label for="{id}-{i}">{}</label></div>"#,
                html::escape(&option.value),
                html::escape(&option.label),
                id = html::escape(&instance.id),
            )
        })
        .collect()
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}{}{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        radio_inputs(instance, a, RuntimeState::default(), true),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element {}">{}{}{}</div>"#,
        html::input_class(state.invalid),
        html::label_fragment(&instance.id, &a.label, a.required),
        radio_inputs(instance, a, state, false),
        html::helper_fragment(&a.helper_text, state.invalid)
    )
}

fn properties_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    let option_values: Vec<String> = a
        .options
        .iter()
        .map(|o| format!("{}={}", o.label, o.value))
        .collect();
    properties::form(
        &instance.id,
        &[
            properties::text_row("label", "Label", &a.label),
            properties::text_row("helperText", "Helper text", &a.helper_text),
            properties::options_rows("options", "Options", &option_values),
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
    fn test_default_options_render() {
        let html = runtime_view(&construct("r1".to_string()), RuntimeState::default());
        assert!(html.contains(r#"value="true""#));
        assert!(html.contains(">Yes</label>"));
        assert!(html.contains(">No</label>"));
    }

    #[test]
    fn test_committed_value_is_checked() {
        let html = runtime_view(
            &construct("r1".to_string()),
            RuntimeState {
                value: Some("false"),
                invalid: false,
            },
        );
        assert!(html.contains(r#"value="false" checked"#));
    }

    #[test]
    fn test_designer_options_disabled() {
        let html = designer_view(&construct("r1".to_string()));
        assert!(html.contains(" disabled"));
        assert!(!html.contains(" checked"));
    }
}
