//! Area-scoped queries over a meeting catalog.

use chrono::NaiveDate;

use crate::catalog::MeetingCatalog;
use crate::meeting::Meeting;

/// Returned when the catalog is empty or a query matches nothing.
pub const NO_MEETINGS: &str = "No meetings scheduled.";

/// Meetings whose name contains this token concern every area.
const ALL_AREAS_TOKEN: &str = "GENERALE";

/// Facade over a meeting catalog and a fixed reference date.
///
/// The reference date decides "already held" vs "upcoming" and is set
/// once at construction; all queries are read-only.
#[derive(Debug, Clone)]
pub struct Schedule {
    catalog: MeetingCatalog,
    reference_date: NaiveDate,
}

impl Schedule {
    pub fn new(catalog: MeetingCatalog, reference_date: NaiveDate) -> Self {
        Schedule {
            catalog,
            reference_date,
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn catalog(&self) -> &MeetingCatalog {
        &self.catalog
    }

    /// Meetings on or after the reference date that concern `area`, in
    /// chronological order.
    ///
    /// `area` is matched as free text; it does not have to be one of the
    /// known area codes (membership checks belong to the caller).
    pub fn meetings_for_area(&self, area: &str) -> Vec<&Meeting> {
        self.catalog
            .meetings()
            .iter()
            .filter(|m| m.date() >= self.reference_date)
            .filter(|m| concerns_area(m.name(), area))
            .collect()
    }

    /// Column-aligned listing for `area`, or [`NO_MEETINGS`].
    ///
    /// Names are padded to the longest name in the whole catalog, not
    /// just the selected meetings, so successive queries line up
    /// identically. Dates render in `yyyy-mm-dd` form.
    pub fn list_for_area(&self, area: &str) -> String {
        if self.catalog.is_empty() {
            return NO_MEETINGS.to_string();
        }

        let selected = self.meetings_for_area(area);
        if selected.is_empty() {
            return NO_MEETINGS.to_string();
        }

        let width = self.catalog.longest_name_len();
        selected
            .iter()
            .map(|m| format!("{:<width$}\t{}\t{}", m.name(), m.date(), m.location()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Area filter: substring match on the meeting name, with two twists.
///
/// "AUDIT" contains "IT" as a substring, so a plain match would hand
/// audit meetings to IT queries; that pairing is excluded. Meetings
/// containing "GENERALE" concern every area regardless of the query.
fn concerns_area(name: &str, area: &str) -> bool {
    let area_match = name.contains(area) && !(area == "IT" && name.contains("AUDIT"));
    area_match || name.contains(ALL_AREAS_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AREAS;
    use chrono::NaiveDate;

    // Reference date used by every test below: 15/06/2025.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn schedule(lines: &[&str]) -> Schedule {
        let catalog = MeetingCatalog::from_lines(lines).unwrap();
        Schedule::new(catalog, today())
    }

    #[test]
    fn test_empty_catalog_always_yields_sentinel() {
        let s = schedule(&[]);
        assert_eq!(s.list_for_area("IT"), NO_MEETINGS);
        assert_eq!(s.list_for_area("HR"), NO_MEETINGS);
    }

    #[test]
    fn test_no_match_yields_sentinel() {
        let s = schedule(&["HR briefing;20/06/2025;Room 1"]);
        assert_eq!(s.list_for_area("D&V"), NO_MEETINGS);
    }

    #[test]
    fn test_audit_meetings_do_not_leak_into_it_queries() {
        let s = schedule(&["Audit committee;15/06/2025;Boardroom"]);

        assert!(s.meetings_for_area("IT").is_empty());

        let audit = s.meetings_for_area("AUDIT");
        assert_eq!(audit.len(), 1);
        assert_eq!(audit[0].name(), "AUDIT COMMITTEE");
    }

    #[test]
    fn test_generale_concerns_every_area() {
        let s = schedule(&["Riunione generale;15/06/2025;Main hall"]);
        for area in AREAS {
            assert_eq!(s.meetings_for_area(area).len(), 1, "area: {area}");
        }
        // Free-text areas outside the catalog still get GENERALE meetings
        assert_eq!(s.meetings_for_area("FINANCE").len(), 1);
    }

    #[test]
    fn test_generale_wins_over_the_it_audit_exclusion() {
        let s = schedule(&["Assemblea generale audit;15/06/2025;Main hall"]);
        assert_eq!(s.meetings_for_area("IT").len(), 1);
    }

    #[test]
    fn test_reference_date_boundary() {
        let s = schedule(&[
            "IT yesterday;14/06/2025;Lab",
            "IT today;15/06/2025;Lab",
            "IT tomorrow;16/06/2025;Lab",
        ]);

        let names: Vec<_> = s.meetings_for_area("IT").iter().map(|m| m.name()).collect();
        assert_eq!(names, ["IT TODAY", "IT TOMORROW"]);
    }

    #[test]
    fn test_listing_is_chronological_and_padded_to_catalog_width() {
        // The longest name belongs to an HR meeting that never matches
        // the IT query, yet it still sets the column width (31 chars).
        let s = schedule(&[
            "IT infrastructure planning;20/07/2025;Lab 2",
            "IT standup;16/06/2025;Lab 1",
            "HR compensation plenary session;01/07/2025;Office",
        ]);

        let expected = format!(
            "{:<31}\t2025-06-16\tLab 1\n{:<31}\t2025-07-20\tLab 2",
            "IT STANDUP", "IT INFRASTRUCTURE PLANNING"
        );
        assert_eq!(s.list_for_area("IT"), expected);
    }
}
