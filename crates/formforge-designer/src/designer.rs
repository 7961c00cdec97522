use formforge_core::ids::element_id;
use formforge_core::FormForgeResult;
use formforge_elements::{
    parse_content, serialize_content, ElementInstance, ElementKind, Registry,
};
use thiserror::Error;

/// Errors raised by [`Designer`] mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DesignerError {
    #[error("element id {0:?} is already present")]
    DuplicateId(String),
    #[error("index {index} is out of bounds for {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("no element with id {0:?}")]
    NotFound(String),
    #[error("replacement id {actual:?} does not match {expected:?}")]
    IdMismatch { expected: String, actual: String },
    #[error("cannot replace a {expected} element with a {actual} element")]
    KindMismatch {
        expected: ElementKind,
        actual: ElementKind,
    },
}

/// State container for the form under construction.
///
/// Holds the ordered element sequence (insertion order is rendering order)
/// and the single selected element driving the properties sidebar. The
/// container carries no validation logic; defaults come from the
/// [`Registry`] and attribute checks live with the element schemas.
#[derive(Debug, Default, Clone)]
pub struct Designer {
    elements: Vec<ElementInstance>,
    selected: Option<String>,
}

impl Designer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a designer from a stored content string, e.g. when the
    /// owner reopens a saved draft.
    pub fn from_content(content: &str) -> FormForgeResult<Self> {
        let elements = parse_content(content)?;
        Ok(Self {
            elements,
            selected: None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn elements(&self) -> &[ElementInstance] {
        &self.elements
    }

    /// Inserts `instance` at `index`, shifting later elements.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::IndexOutOfBounds`] when `index > len`, and
    /// [`DesignerError::DuplicateId`] when the id is already present.
    pub fn add_element(
        &mut self,
        index: usize,
        instance: ElementInstance,
    ) -> Result<(), DesignerError> {
        if index > self.elements.len() {
            return Err(DesignerError::IndexOutOfBounds {
                index,
                len: self.elements.len(),
            });
        }
        if self.position_of(&instance.id).is_some() {
            return Err(DesignerError::DuplicateId(instance.id));
        }
        self.elements.insert(index, instance);
        Ok(())
    }

    /// Constructs a fresh default instance of `kind` via the registry and
    /// inserts it at `index`. This is the palette drop path; the generated
    /// id cannot collide with practical certainty, but the insert still
    /// goes through [`Self::add_element`] so the no-duplicate invariant is
    /// enforced in one place.
    pub fn add_from_palette(
        &mut self,
        index: usize,
        kind: ElementKind,
    ) -> Result<&ElementInstance, DesignerError> {
        let instance = (Registry::lookup(kind).construct)(element_id());
        let id = instance.id.clone();
        self.add_element(index, instance)?;
        let position = self.position_of(&id).unwrap_or_default();
        Ok(&self.elements[position])
    }

    /// Removes the element with `id`. Absent ids are a no-op; if the
    /// removed element was selected the selection is cleared.
    pub fn remove_element(&mut self, id: &str) {
        if let Some(position) = self.position_of(id) {
            self.elements.remove(position);
            if self.selected.as_deref() == Some(id) {
                self.selected = None;
            }
        }
    }

    /// Replaces the element with `id` in place. The replacement must keep
    /// both the id and the kind of the original; this is the properties
    /// editor commit path, which only ever rewrites attributes.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::NotFound`] when no element has `id`,
    /// [`DesignerError::IdMismatch`] when the replacement carries another
    /// id, and [`DesignerError::KindMismatch`] when it changes the kind.
    pub fn update_element(
        &mut self,
        id: &str,
        replacement: ElementInstance,
    ) -> Result<(), DesignerError> {
        let position = self
            .position_of(id)
            .ok_or_else(|| DesignerError::NotFound(id.to_string()))?;
        if replacement.id != id {
            return Err(DesignerError::IdMismatch {
                expected: id.to_string(),
                actual: replacement.id,
            });
        }
        let expected = self.elements[position].kind();
        if replacement.kind() != expected {
            return Err(DesignerError::KindMismatch {
                expected,
                actual: replacement.kind(),
            });
        }
        self.elements[position] = replacement;
        Ok(())
    }

    /// Reorders the element at `from` to position `to`, preserving the
    /// relative order of everything else. Both indexes address the current
    /// sequence; `to` is the final resting position.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::IndexOutOfBounds`] when either index is
    /// past the end.
    pub fn move_element(&mut self, from: usize, to: usize) -> Result<(), DesignerError> {
        let len = self.elements.len();
        for index in [from, to] {
            if index >= len {
                return Err(DesignerError::IndexOutOfBounds { index, len });
            }
        }
        let instance = self.elements.remove(from);
        self.elements.insert(to, instance);
        Ok(())
    }

    /// Selects the element with `id`, or clears the selection with `None`.
    /// Selecting a new element implicitly deselects the prior one.
    ///
    /// # Errors
    ///
    /// Returns [`DesignerError::NotFound`] when `id` names no element.
    pub fn set_selected(&mut self, id: Option<&str>) -> Result<(), DesignerError> {
        match id {
            Some(id) => {
                if self.position_of(id).is_none() {
                    return Err(DesignerError::NotFound(id.to_string()));
                }
                self.selected = Some(id.to_string());
            }
            None => self.selected = None,
        }
        Ok(())
    }

    #[must_use]
    pub fn selected_element(&self) -> Option<&ElementInstance> {
        let id = self.selected.as_deref()?;
        self.position_of(id).map(|position| &self.elements[position])
    }

    /// Serializes the element sequence to the stored content format.
    pub fn serialize(&self) -> FormForgeResult<String> {
        serialize_content(&self.elements)
    }

    /// Renders every element's designer preview in sequence order.
    #[must_use]
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(|instance| (Registry::lookup(instance.kind()).designer_view)(instance))
            .collect()
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id == id)
    }
}
