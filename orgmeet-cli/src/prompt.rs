//! Interactive area selection loop.

use anyhow::Result;
use dialoguer::Select;
use orgmeet_core::{AREAS, Schedule};

use crate::render;

const QUIT: &str = "Quit";

/// Prompt for an area until the user quits, printing the matching
/// meetings for each pick. The menu only offers known area codes, so no
/// further membership check is needed before querying.
pub fn run(schedule: &Schedule) -> Result<()> {
    let mut items: Vec<&str> = AREAS.to_vec();
    items.push(QUIT);

    loop {
        let picked = Select::new()
            .with_prompt("Which area do you belong to?")
            .items(&items)
            .default(0)
            .interact()?;

        if items[picked] == QUIT {
            break;
        }

        render::print_area_listing(schedule, items[picked]);
    }

    Ok(())
}
