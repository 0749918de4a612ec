mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use orgmeet_core::{AREAS, MeetingCatalog, Schedule, date, is_valid_area};

#[derive(Parser)]
#[command(name = "orgmeet")]
#[command(about = "Look up upcoming meetings for your organizational area")]
struct Cli {
    /// Meeting roster file (one NAME;dd/mm/yyyy;LOCATION record per line)
    #[arg(default_value = "meetings.csv")]
    roster: PathBuf,

    /// Reference date in dd/mm/yyyy form (defaults to today)
    #[arg(long)]
    today: Option<String>,

    /// Query a single area non-interactively and exit
    #[arg(long)]
    area: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(catalog) = MeetingCatalog::from_file(&cli.roster)? else {
        anyhow::bail!("Could not read roster file '{}'", cli.roster.display());
    };

    let reference_date = match cli.today.as_deref() {
        Some(text) => date::parse_date(text)?,
        None => Local::now().date_naive(),
    };

    let schedule = Schedule::new(catalog, reference_date);

    match cli.area {
        Some(area) => {
            let area = area.to_uppercase();
            if !is_valid_area(&area) {
                anyhow::bail!("Unknown area '{}'. Available: {}", area, AREAS.join(", "));
            }
            render::print_area_listing(&schedule, &area);
            Ok(())
        }
        None => prompt::run(&schedule),
    }
}
