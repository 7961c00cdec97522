//! The file upload element.
//!
//! The validator sees the selected file's name, so required can only check
//! presence. The `maxSize` bound (in Kb) is enforced where the actual bytes
//! are available, at the UI boundary.

use crate::attributes::{ElementAttributes, FileAttributes};
use crate::descriptor::{ElementDescriptor, PaletteEntry, RuntimeState};
use crate::elements::properties;
use crate::html;
use crate::instance::ElementInstance;
use crate::kind::ElementKind;

/// Descriptor for [`ElementKind::FileField`].
pub static DESCRIPTOR: ElementDescriptor = ElementDescriptor {
    kind: ElementKind::FileField,
    palette: PaletteEntry {
        icon: "file-add",
        label: "File Field",
    },
    construct,
    designer_view,
    runtime_view,
    properties_view,
    validate,
};

fn construct(id: String) -> ElementInstance {
    ElementInstance::new(id, ElementAttributes::defaults_for(ElementKind::FileField))
}

fn attrs(instance: &ElementInstance) -> &FileAttributes {
    match &instance.attributes {
        ElementAttributes::FileField(a) => a,
        other => unreachable!("file field descriptor invoked with {}", other.kind()),
    }
}

fn designer_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="designer-element">{}<input type="file" readonly disabled placeholder="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&a.placeholder),
        html::helper_fragment(&a.helper_text, false)
    )
}

fn runtime_view(instance: &ElementInstance, state: RuntimeState<'_>) -> String {
    let a = attrs(instance);
    format!(
        r#"<div class="form-element">{}<input type="file" id="{}" name="{}" class="{}" data-max-size-kb="{}" />{}</div>"#,
        html::label_fragment(&instance.id, &a.label, a.required),
        html::escape(&instance.id),
        html::escape(&instance.id),
        html::input_class(state.invalid),
        a.max_size,
        html::helper_fragment(&a.helper_text, state.invalid)
    )
}

fn properties_view(instance: &ElementInstance) -> String {
    let a = attrs(instance);
    properties::form(
        &instance.id,
        &[
            properties::number_row("maxSize", "Max file size (Kb)", a.max_size),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn required_instance() -> ElementInstance {
        ElementInstance::new(
            "f1".to_string(),
            ElementAttributes::FileField(FileAttributes {
                required: true,
                ..FileAttributes::default()
            }),
        )
    }

    #[test]
    fn test_required_checks_file_presence() {
        let instance = required_instance();
        assert!(!validate(&instance, ""));
        assert!(validate(&instance, "report.pdf"));
    }

    #[test]
    fn test_max_size_not_rechecked_by_validator() {
        // The name carries no size; an oversized file is caught at the UI
        // boundary, not here.
        let instance = required_instance();
        assert!(validate(&instance, "huge-video.mp4"));
    }

    #[test]
    fn test_runtime_view_carries_max_size_hint() {
        let html = runtime_view(&construct("f1".to_string()), RuntimeState::default());
        assert!(html.contains(r#"data-max-size-kb="2048""#));
    }
}
