//! Colored terminal output for schedule queries.

use orgmeet_core::{NO_MEETINGS, Schedule};
use owo_colors::OwoColorize;

/// Print the header and listing for one area query.
pub fn print_area_listing(schedule: &Schedule, area: &str) {
    let header = format!(
        "Today is {} - meetings scheduled for area {}:",
        schedule.reference_date(),
        area
    );
    println!("\n{}", header.bold());

    let listing = schedule.list_for_area(area);
    if listing == NO_MEETINGS {
        println!("{}\n", listing.dimmed());
    } else {
        println!("{listing}\n");
    }
}
