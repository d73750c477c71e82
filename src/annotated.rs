use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// A date carrying an optional free-text description.
///
/// The description is not part of the date's identity: equality, ordering and
/// hashing only look at the date.
#[derive(Debug, Clone, Deref, Serialize, Deserialize)]
pub struct AnnotatedDate {
    #[deref]
    date: CalendarDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl AnnotatedDate {
    /// Wraps `date` without a description
    pub const fn new(date: CalendarDate) -> Self {
        Self {
            date,
            description: None,
        }
    }

    /// Wraps `date` with a description
    pub fn with_description(date: CalendarDate, description: impl Into<String>) -> Self {
        Self {
            date,
            description: Some(description.into()),
        }
    }

    /// Returns the underlying date
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Returns the description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Replaces the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Removes and returns the description
    pub fn take_description(&mut self) -> Option<String> {
        self.description.take()
    }
}

impl From<CalendarDate> for AnnotatedDate {
    fn from(date: CalendarDate) -> Self {
        Self::new(date)
    }
}

impl From<AnnotatedDate> for CalendarDate {
    fn from(annotated: AnnotatedDate) -> Self {
        annotated.date
    }
}

impl PartialEq for AnnotatedDate {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for AnnotatedDate {}

impl PartialOrd for AnnotatedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AnnotatedDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Hash for AnnotatedDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.date.hash(state);
    }
}
