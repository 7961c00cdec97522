//! The static subtitle heading element. Layout-only; carries no user input.

use crate::attributes::{ElementAttributes, SubTitleAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::SubTitleField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::SubTitleField,
    palette: PaletteEntry {
        icon: "heading-2",
        label: "SubTitle Field",
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
        ElementAttributes::defaults_for(ElementKind::SubTitleField),
    )
}

fn attrs(instance: &ElementInstance) -> &SubTitleAttributes {
    match &instance.attributes {
        ElementAttributes::SubTitleField(a) => a,
        other => unreachable!("subtitle field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    format!(
        r#"<div class="designer-element"><p class="element-caption">SubTitle field</p><h2>{}</h2></div>"#,
        html::escape(&attrs(instance).title)
    )
}

fn runtime_view(instance: &ElementInstance, _state: RuntimeState<'_>) -> String {
    format!("<h2>{}</h2>", html::escape(&attrs(instance).title))
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
