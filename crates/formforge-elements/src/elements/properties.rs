//! Shared building blocks for properties-editor fragments.
//!
//! Every kind's properties view is a `<form class="properties-form">` built
//! from these rows. Commits go through the designer's `update_element`, so
//! the fragments only carry current values and input names.

use crate::html::escape;

/// Wraps rows into the properties form fragment.
pub fn form(element_id: &str, rows: &[String]) -> String {
    format!(
        r#"<form class="properties-form" data-element="{}">{}</form>"#,
        escape(element_id),
        rows.join("")
    )
}

/// A single-line text input row.
pub fn text_row(name: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="property-row"><label for="prop-{name}">{}</label><input type="text" id="prop-{name}" name="{name}" value="{}" /></div>"#,
        escape(label),
        escape(value)
    )
}

/// A numeric input row.
pub fn number_row(name: &str, label: &str, value: u32) -> String {
    format!(
        r#"<div class="property-row"><label for="prop-{name}">{}</label><input type="number" id="prop-{name}" name="{name}" value="{value}" /></div>"#,
        escape(label)
    )
}

/// An on/off switch row, used for the `required` flag.
pub fn switch_row(name: &str, label: &str, on: bool) -> String {
    let checked = if on { " checked" } else { "" };
    format!(
        r#"<div class="property-row switch"><label for="prop-{name}">{}</label><input type="checkbox" role="switch" id="prop-{name}" name="{name}"{checked} /></div>"#,
        escape(label)
    )
}

/// An editable list-of-values row (select options).
pub fn options_rows(name: &str, label: &str, options: &[String]) -> String {
    let items: String = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            format!(
                r#"<input type="text" name="{name}[{i}]" value="{}" />"#,
                escape(option)
            )
        })
        .collect();
    format!(
        r#"<div class="property-row options"><label>{}</label>{items}<button type="button" class="add-option">Add</button></div>"#,
        escape(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_wraps_rows() {
        let html = form("e1", &[text_row("label", "Label", "Name")]);
        assert!(html.starts_with(r#"<form class="properties-form" data-element="e1">"#));
        assert!(html.contains(r#"name="label""#));
    }

    #[test]
    fn test_switch_row_checked() {
        assert!(switch_row("required", "Required", true).contains(" checked"));
        assert!(!switch_row("required", "Required", false).contains(" checked"));
    }

    #[test]
    fn test_options_rows_indexes_names() {
        let html = options_rows("options", "Options", &["A".into(), "B".into()]);
        assert!(html.contains(r#"name="options[0]""#));
        assert!(html.contains(r#"name="options[1]""#));
    }
}
