//! The designer surface: an explicit state container for the form being
//! edited. The container owns the ordered element sequence and the single
//! selection used by the properties sidebar; every mutation of the
//! in-progress form goes through it.

pub mod designer;

pub use designer::{Designer, DesignerError};
