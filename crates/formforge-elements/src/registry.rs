//! Total mapping from element kind to descriptor.
//!
//! The enumeration and the registry are defined together and stay in
//! lockstep: the lookup is an exhaustive match, so a kind without a
//! descriptor cannot compile. Absence of a tag is therefore a programming
//! error caught at build time, never a runtime condition.

use crate::descriptor::{ElementDescriptor, PaletteEntry};
use crate::elements::{
    checkbox, date, file, number, paragraph, radio_group, select, separator, spacer, subtitle,
    switch, text, textarea, title,
};
use crate::kind::ElementKind;

/// The dispatch table over the closed set of element kinds.
pub struct Registry;

impl Registry {
    /// Returns the descriptor for a kind. Total over [`ElementKind`].
    pub const fn lookup(kind: ElementKind) -> &'static ElementDescriptor {
        match kind {
            ElementKind::TextField => &text::DESCRIPTOR,
            ElementKind::NumberField => &number::DESCRIPTOR,
            ElementKind::TextAreaField => &textarea::DESCRIPTOR,
            ElementKind::DateField => &date::DESCRIPTOR,
            ElementKind::SelectField => &select::DESCRIPTOR,
            ElementKind::CheckboxField => &checkbox::DESCRIPTOR,
            ElementKind::RadioGroupField => &radio_group::DESCRIPTOR,
            ElementKind::SwitchField => &switch::DESCRIPTOR,
            ElementKind::FileField => &file::DESCRIPTOR,
            ElementKind::TitleField => &title::DESCRIPTOR,
            ElementKind::SubTitleField => &subtitle::DESCRIPTOR,
            ElementKind::ParagraphField => &paragraph::DESCRIPTOR,
            ElementKind::SeparatorField => &separator::DESCRIPTOR,
            ElementKind::SpacerField => &spacer::DESCRIPTOR,
        }
    }

    /// Returns every kind's palette entry, in palette order, for rendering
    /// the designer sidebar.
    pub fn palette() -> Vec<(ElementKind, &'static PaletteEntry)> {
        ElementKind::ALL
            .iter()
            .map(|&kind| (kind, &Self::lookup(kind).palette))
            .collect()
    }
}

impl ElementKind {
    /// Shorthand for [`Registry::lookup`].
    pub const fn descriptor(self) -> &'static ElementDescriptor {
        Registry::lookup(self)
    }
}
