//! Computed style record: copy-on-write property groups, inheritance and
//! change detection.
//! Spec: <https://www.w3.org/TR/css-cascade-5/#computed>
//!
//! A [`ComputedStyle`] is two small flag words plus one shared handle per
//! property group. Cloning a style and inheriting from a parent share groups;
//! a group is copied only when a style holding a shared handle writes to it.

#![forbid(unsafe_code)]

mod change;
pub mod config;
pub mod custom_properties;
pub mod data;
pub mod data_ref;
pub mod diff;
mod equality;
pub mod flags;
mod inheritance;
pub mod initial;
pub mod pseudo;
mod style;
mod used;

pub use config::{FastPathPolicy, FastPathProperty, StyleConfig};
pub use custom_properties::CustomPropertyData;
pub use data_ref::{DataRef, set_field};
pub use diff::{PropertyGroup, StyleDifference};
pub use flags::{InheritedFlags, InsideLink, NonInheritedFlags, NonInheritedState};
pub use initial::{CustomPropertyRegistry, InitialStyle, RegisteredCustomProperty};
pub use pseudo::{PseudoBits, PseudoElementIdentifier, PseudoElementType, PseudoStyleCache};
pub use style::ComputedStyle;
