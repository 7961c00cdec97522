//! The horizontal separator element. Layout-only; carries no attributes and
//! no user input.

use crate::attributes::ElementAttributes;
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::SeparatorField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::SeparatorField,
    palette: PaletteEntry {
        icon: "separator",
        label: "Separator Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(id, ElementAttributes::SeparatorField)
}

fn designer_view(_instance: &ElementInstance) -> String {
    r#"<div class="designer-element"><p class="element-caption">Separator field</p><hr /></div>"#
        .to_string()
}

fn runtime_view(_instance: &ElementInstance, _state: RuntimeState<'_>) -> String {
    "<hr />".to_string()
}

// Nothing to edit.
fn properties_view(instance: &ElementInstance) -> String {
    crate::elements::properties::form(&instance.id, &[])
}

fn validate(_instance: &ElementInstance, _candidate: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_view_is_hr() {
        let instance = construct("sep1".to_string());
        assert_eq!(runtime_view(&instance, RuntimeState::default()), "<hr />");
    }
}
