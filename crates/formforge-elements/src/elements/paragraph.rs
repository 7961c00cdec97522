//! The static paragraph element. Layout-only; carries no user input.

use crate::attributes::{ElementAttributes, ParagraphAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::ParagraphField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::ParagraphField,
    palette: PaletteEntry {
        icon: "paragraph",
        label: "Paragraph field",
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
        ElementAttributes::defaults_for(ElementKind::ParagraphField),
    )
}

fn attrs(instance: &ElementInstance) -> &ParagraphAttributes {
    match &instance.attributes {
        ElementAttributes::ParagraphField(a) => a,
        other => unreachable!("paragraph descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    format!(
        r#"<div class="designer-element"><p class="element-caption">Paragraph field</p><p>{}</p></div>"#,
        html::escape(&attrs(instance).text)
    )
}

fn runtime_view(instance: &ElementInstance, _state: RuntimeState<'_>) -> String {
    format!("<p>{}</p>", html::escape(&attrs(instance).text))
}

fn properties_view(instance: &ElementInstance) -> String {
    properties::form(
        &instance.id,
        &[properties::text_row("text", "Text", &attrs(instance).text)],
    )
}

fn validate(_instance: &ElementInstance, _candidate: &str) -> bool {
    true
}
