//! Roster ingestion into an ordered meeting catalog.

use std::fs;
use std::path::Path;

use crate::date;
use crate::error::{ScheduleError, ScheduleResult};
use crate::meeting::Meeting;

/// Chronologically ordered collection of meetings, built once from a
/// roster and never mutated afterward.
///
/// Each roster line is `NAME;dd/mm/yyyy;LOCATION`. A single malformed
/// line aborts the whole build; no partial catalog is ever returned.
#[derive(Debug, Clone, Default)]
pub struct MeetingCatalog {
    meetings: Vec<Meeting>,
}

impl MeetingCatalog {
    /// Ingest roster lines into a sorted catalog.
    pub fn from_lines<I, S>(lines: I) -> ScheduleResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut meetings = Vec::new();
        for line in lines {
            meetings.push(parse_line(line.as_ref())?);
        }

        // Stable sort: meetings sharing a date keep their roster order.
        meetings.sort_by_key(Meeting::date);

        Ok(MeetingCatalog { meetings })
    }

    /// Read and ingest a roster file.
    ///
    /// Returns `Ok(None)` when the file cannot be read at all. That is a
    /// distinct outcome from an empty roster (`Ok(Some)` with no
    /// meetings) and from a malformed roster (`Err`); callers treat it
    /// as a terminal startup failure.
    pub fn from_file(path: &Path) -> ScheduleResult<Option<Self>> {
        let Ok(content) = fs::read_to_string(path) else {
            return Ok(None);
        };
        Self::from_lines(content.lines()).map(Some)
    }

    /// Meetings in ascending date order.
    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.meetings.len()
    }

    /// Length of the longest meeting name, used for column alignment.
    pub fn longest_name_len(&self) -> usize {
        self.meetings.iter().map(|m| m.name().len()).max().unwrap_or(0)
    }
}

fn parse_line(line: &str) -> ScheduleResult<Meeting> {
    let fields: Vec<&str> = line.split(';').collect();
    let [name, date_text, location] = fields[..] else {
        return Err(ScheduleError::WrongFileFormat(
            "each line must be in the form NAME;dd/mm/yyyy;LOCATION".to_string(),
        ));
    };

    if name.trim().is_empty() {
        return Err(ScheduleError::WrongFileFormat(
            "the NAME field cannot be blank".to_string(),
        ));
    }
    if date_text.trim().is_empty() {
        return Err(ScheduleError::WrongFileFormat(
            "the DATE field cannot be blank".to_string(),
        ));
    }
    if location.trim().is_empty() {
        return Err(ScheduleError::WrongFileFormat(
            "the LOCATION field cannot be blank".to_string(),
        ));
    }

    let parsed = date::parse_date(date_text)?;
    Ok(Meeting::new(name, parsed, location))
}
