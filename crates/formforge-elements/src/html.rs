//! Shared HTML fragment helpers for element views.
//!
//! All three view families (designer preview, runtime input, properties
//! editor) render plain HTML strings; the page layer around them is an
//! external collaborator. These helpers keep attribute formatting and
//! escaping consistent across the per-kind renderers.

/// Escapes text for safe interpolation into HTML content or attribute
/// values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a field label, with a `*` marker when the field is required.
pub fn label_fragment(for_id: &str, label: &str, required: bool) -> String {
    let marker = if required { "*" } else { "" };
    format!(
        r#"<label for="{for_id}">{}{marker}</label>"#,
        escape(label)
    )
}

/// Renders helper text below a field, if any. The `invalid` class mirrors
/// the field's current error state.
pub fn helper_fragment(helper_text: &str, invalid: bool) -> String {
    if helper_text.is_empty() {
        return String::new();
    }
    let class = if invalid {
        "helper-text invalid"
    } else {
        "helper-text"
    };
    format!(r#"<p class="{class}">{}</p>"#, escape(helper_text))
}

/// Returns the CSS class list for an input, appending `invalid` when the
/// field failed validation.
pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "form-input invalid"
    } else {
        "form-input"
    }
}
