//! The meeting record entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scheduled meeting: name, civil calendar date, location.
///
/// Names are canonicalized to uppercase at construction. Records are
/// immutable once built and owned exclusively by a
/// [`MeetingCatalog`](crate::catalog::MeetingCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    name: String,
    date: NaiveDate,
    location: String,
}

impl Meeting {
    pub(crate) fn new(name: &str, date: NaiveDate, location: &str) -> Self {
        Meeting {
            name: name.to_uppercase(),
            date,
            location: location.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
