//! The static title heading element. Layout-only; carries no user input.

use crate::attributes::{ElementAttributes, TitleAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::TitleField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::TitleField,
    palette: PaletteEntry {
        icon: "heading-1",
        label: "Title Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(id, ElementAttributes::defaults_for(ElementKind::TitleField))
}

fn attrs(instance: &ElementInstance) -> &TitleAttributes {
    match &instance.attributes {
        ElementAttributes::TitleField(a) => a,
        other => unreachable!("title field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    format!(
        r#"<div class="designer-element"><p class="element-caption">Title field</p><h1>{}</h1></div>"#,
        html::escape(&attrs(instance).title)
    )
}

fn runtime_view(instance: &ElementInstance, _state: RuntimeState<'_>) -> String {
    format!("<h1>{}</h1>", html::escape(&attrs(instance).title))
}

fn properties_view(instance: &ElementInstance) -> String {
    properties::form(
        &instance.id,
        &[properties::text_row("title", "Title", &attrs(instance).title)],
    )
}

fn validate(_instance: &ElementInstance, _candidate: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_valid() {
        let instance = construct("t1".to_string());
        assert!(validate(&instance, ""));
        assert!(validate(&instance, "anything"));
    }

    #[test]
    fn test_runtime_view_is_plain_heading() {
        let html = runtime_view(&construct("t1".to_string()), RuntimeState::default());
        assert_eq!(html, "<h1>Title</h1>");
    }
}
