//! iCalendar core models (RFC 5545).
//!
//! Property values are kept as their raw (escaped) text. Typed reading
//! happens in the mapping layer, which knows each property's value type.

mod component;
mod parameter;
mod property;

pub use component::{Component, ComponentKind, ICalendar};
pub use parameter::Parameter;
pub use property::{Property, names};
