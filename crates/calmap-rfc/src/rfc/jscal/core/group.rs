//! `Group` object (RFC 8984 §5.3) and the object union.

use calmap_core::constants::{TYPE_EVENT, TYPE_GROUP, TYPE_TASK};
use calmap_core::util::uid::generate_uid;

use super::{Event, Task};

/// A collection of events and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub uid: String,
    pub title: Option<String>,
    pub entries: Vec<CalendarObject>,
}

impl Group {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    /// Creates a group with a freshly generated UID.
    #[must_use]
    pub fn with_generated_uid() -> Self {
        Self::new(generate_uid())
    }

    /// Returns every event and task, descending into nested groups.
    #[must_use]
    pub fn leaves(&self) -> Vec<&CalendarObject> {
        let mut leaves = Vec::new();
        for entry in &self.entries {
            match entry {
                CalendarObject::Group(group) => leaves.extend(group.leaves()),
                leaf => leaves.push(leaf),
            }
        }
        leaves
    }
}

/// Any top-level JSCalendar object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarObject {
    Event(Event),
    Task(Task),
    Group(Group),
}

impl CalendarObject {
    #[must_use]
    pub fn uid(&self) -> &str {
        match self {
            Self::Event(e) => &e.uid,
            Self::Task(t) => &t.uid,
            Self::Group(g) => &g.uid,
        }
    }

    /// Returns the `@type` discriminator.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Event(_) => TYPE_EVENT,
            Self::Task(_) => TYPE_TASK,
            Self::Group(_) => TYPE_GROUP,
        }
    }
}

impl From<Event> for CalendarObject {
    fn from(value: Event) -> Self {
        Self::Event(value)
    }
}

impl From<Task> for CalendarObject {
    fn from(value: Task) -> Self {
        Self::Task(value)
    }
}

impl From<Group> for CalendarObject {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}
