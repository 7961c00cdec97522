use std::collections::{BTreeMap, HashSet};

use formforge_core::FormForgeResult;
use formforge_elements::{parse_content, ElementInstance, Registry, RuntimeState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("no form element with id {0:?}")]
    UnknownField(String),
}

/// Collects a visitor's answers for one published form.
///
/// Values are keyed by element id and only enter the mapping once the
/// element's validator accepts them. A failed commit marks the field
/// invalid and keeps any previously accepted value out; a later successful
/// commit clears the mark. Fields the visitor never touches simply never
/// appear in the submission, required or not.
#[derive(Debug)]
pub struct SubmissionRuntime {
    elements: Vec<ElementInstance>,
    values: BTreeMap<String, String>,
    invalid: HashSet<String>,
}

impl SubmissionRuntime {
    #[must_use]
    pub fn new(elements: Vec<ElementInstance>) -> Self {
        Self {
            elements,
            values: BTreeMap::new(),
            invalid: HashSet::new(),
        }
    }

    /// Builds a runtime straight from a form's stored content string.
    pub fn from_content(content: &str) -> FormForgeResult<Self> {
        Ok(Self::new(parse_content(content)?))
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementInstance] {
        &self.elements
    }

    /// Renders every element's runtime view in sequence order, feeding each
    /// one its committed value and error state.
    #[must_use]
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(|instance| {
                let state = RuntimeState {
                    value: self.values.get(&instance.id).map(String::as_str),
                    invalid: self.invalid.contains(&instance.id),
                };
                (Registry::lookup(instance.kind()).runtime_view)(instance, state)
            })
            .collect()
    }

    /// Commits `value` for the field with `id`, the blur/change path.
    ///
    /// Returns `Ok(true)` when the value passed validation and was stored,
    /// `Ok(false)` when it failed and the field is now marked invalid.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::UnknownField`] when `id` names no element in
    /// this form.
    pub fn commit_value(&mut self, id: &str, value: &str) -> Result<bool, RuntimeError> {
        let instance = self
            .elements
            .iter()
            .find(|element| element.id == id)
            .ok_or_else(|| RuntimeError::UnknownField(id.to_string()))?;

        if (Registry::lookup(instance.kind()).validate)(instance, value) {
            self.values.insert(id.to_string(), value.to_string());
            self.invalid.remove(id);
            Ok(true)
        } else {
            // A field shown as invalid must not submit an earlier answer.
            self.values.remove(id);
            self.invalid.insert(id.to_string());
            Ok(false)
        }
    }

    /// Ids currently marked invalid, in sequence order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|element| self.invalid.contains(&element.id))
            .map(|element| element.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn value(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Serializes the collected values as a JSON object keyed by element
    /// id. No further validation happens here; only per-commit checks
    /// gate what the mapping contains.
    pub fn into_submission(self) -> FormForgeResult<String> {
        Ok(serde_json::to_string(&self.values)?)
    }
}
