//! UID generation for calendar objects.
//!
//! ## Summary
//! JSCalendar objects and iCalendar components both require a `uid`. Objects
//! built without one receive a random UUID so that every mapped object is
//! addressable on output.

/// Generate a fresh, globally unique object identifier.
#[must_use]
pub fn generate_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Returns the given UID, or a freshly generated one when it is blank.
#[must_use]
pub fn uid_or_generate(uid: Option<&str>) -> String {
    match uid.map(str::trim) {
        Some(existing) if !existing.is_empty() => existing.to_string(),
        _ => generate_uid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_uid_is_uuid() {
        let uid = generate_uid();
        assert!(uuid::Uuid::parse_str(&uid).is_ok());
    }

    #[test]
    fn test_generated_uids_differ() {
        assert_ne!(generate_uid(), generate_uid());
    }

    #[test]
    fn test_existing_uid_kept() {
        assert_eq!(uid_or_generate(Some("event-1")), "event-1");
    }

    #[test]
    fn test_blank_uid_replaced() {
        let uid = uid_or_generate(Some("   "));
        assert!(uuid::Uuid::parse_str(&uid).is_ok());

        let uid = uid_or_generate(None);
        assert!(uuid::Uuid::parse_str(&uid).is_ok());
    }
}
