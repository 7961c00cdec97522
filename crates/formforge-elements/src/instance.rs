//! Element instances and the stored-content wire format.
//!
//! Form content is stored as a JSON array of
//! `{"id": ..., "type": ..., "extraAttributes": {...}}` objects. An
//! [`ElementInstance`] pairs a generator-assigned id with its tagged
//! attribute record; the kind is derived from the record, so an instance can
//! never claim one kind while carrying another kind's attributes.

use formforge_core::error::{FormForgeError, FormForgeResult};
use serde::{Deserialize, Serialize};

use crate::attributes::ElementAttributes;
use crate::kind::ElementKind;

/// One concrete element placed on a form.
///
/// The id is unique within a form and immutable after creation. Attributes
/// are replaced wholesale by properties-editor commits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInstance {
    /// Generator-assigned id, unique within the owning form.
    pub id: String,
    /// The kind tag and attribute record, flattened into the wire object.
    #[serde(flatten)]
    pub attributes: ElementAttributes,
}

impl ElementInstance {
    /// Creates an instance with the given id and attributes.
    pub const fn new(id: String, attributes: ElementAttributes) -> Self {
        Self { id, attributes }
    }

    /// Returns this element's kind.
    pub const fn kind(&self) -> ElementKind {
        self.attributes.kind()
    }
}

/// Deserializes stored form content into an element sequence.
///
/// The sequence order is the rendering order.
pub fn parse_content(content: &str) -> FormForgeResult<Vec<ElementInstance>> {
    serde_json::from_str(content).map_err(|e| {
        FormForgeError::Serialization(format!("form content is not a valid element array: {e}"))
    })
}

/// Serializes an element sequence to the stored-content wire format.
pub fn serialize_content(elements: &[ElementInstance]) -> FormForgeResult<String> {
    serde_json::to_string(elements).map_err(Into::into)
}
