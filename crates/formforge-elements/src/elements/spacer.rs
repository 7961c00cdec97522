//! The vertical spacer element. Layout-only; carries no user input.

use crate::attributes::{ElementAttributes, SpacerAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::SpacerField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::SpacerField,
    palette: PaletteEntry {
        icon: "spacer",
        label: "Spacer Field",
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
        ElementAttributes::defaults_for(ElementKind::SpacerField),
    )
}

fn attrs(instance: &ElementInstance) -> &SpacerAttributes {
    match &instance.attributes {
        ElementAttributes::SpacerField(a) => a,
        other => unreachable!("spacer descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    format!(
        r#"<div class="designer-element"><p class="element-caption">Spacer field: {}px</p></div>"#,
        attrs(instance).height
    )
}

fn runtime_view(instance: &ElementInstance, _state: RuntimeState<'_>) -> String {
    format!(
        r#"<div style="height: {}px"></div>"#,
        attrs(instance).height
    )
}

fn properties_view(instance: &ElementInstance) -> String {
    properties::form(
        &instance.id,
        &[properties::number_row(
            "height",
            "Height (px)",
            attrs(instance).height,
        )],
    )
}

fn validate(_instance: &ElementInstance, _candidate: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_rendered_as_inline_style() {
        let instance = ElementInstance::new(
            "sp1".to_string(),
            ElementAttributes::SpacerField(SpacerAttributes { height: 64 }),
        );
        assert_eq!(
            runtime_view(&instance, RuntimeState::default()),
            r#"<div style="height: 64px"></div>"#
        );
    }

    #[test]
    fn test_always_valid() {
        let instance = construct("sp1".to_string());
        assert!(validate(&instance, ""));
    }
}
