//! The fixed catalog of organizational area codes.

/// Valid area codes, in display order. Fixed for the life of the process.
pub const AREAS: [&str; 6] = ["IT", "M&C", "D&V", "C&L", "AUDIT", "HR"];

/// Whether `code` is one of the known area codes (case-sensitive; callers
/// normalize case before checking).
pub fn is_valid_area(code: &str) -> bool {
    AREAS.contains(&code)
}
