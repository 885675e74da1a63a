//! Default substitution for unset fields.
//!
//! Unset is distinct from every concrete value. Readers choose whether an
//! unset field reads back as unset or as its documented default; a set field
//! always reads back as itself. Writers use [`DefaultPolicy::Unset`] unless
//! defaults are requested, so a plain round trip adds no values.

/// Whether an accessor substitutes the documented default for an unset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultPolicy {
    /// Absent fields read as `None`.
    #[default]
    Unset,
    /// Absent fields read as their documented default.
    Substitute,
}

impl DefaultPolicy {
    /// Maps an explicit "use default" request flag to a policy.
    #[must_use]
    pub const fn from_flag(use_default: bool) -> Self {
        if use_default {
            Self::Substitute
        } else {
            Self::Unset
        }
    }

    /// Applies the policy to a field value.
    #[must_use]
    pub fn apply<T>(self, value: Option<T>, default: impl FnOnce() -> T) -> Option<T> {
        match (value, self) {
            (Some(v), _) => Some(v),
            (None, Self::Substitute) => Some(default()),
            (None, Self::Unset) => None,
        }
    }
}

/// Returns the field value, the default when explicitly requested, or `None`.
#[must_use]
pub fn get_or_default<T>(value: Option<T>, use_default: bool, default: impl FnOnce() -> T) -> Option<T> {
    DefaultPolicy::from_flag(use_default).apply(value, default)
}
