//! Per-kind descriptor implementations, one module per element kind.
//!
//! Each module defines a `DESCRIPTOR` static plus the kind's constructor,
//! view renderers, and validator. The modules are deliberately repetitive;
//! each kind owns its whole behavior so adding a kind never touches another
//! module.

pub mod checkbox;
pub mod date;
pub mod file;
pub mod number;
pub mod paragraph;
pub mod properties;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod spacer;
pub mod subtitle;
pub mod switch;
pub mod text;
pub mod textarea;
pub mod title;
