use anyhow::{Context, Result};
use clap::Parser;
use day11::{CLIArgs, RuleSet, SeatMap};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CLIArgs::parse();
    let layout = day11::read_layout(&args.input_path).with_context(|| {
        format!(
            "Failed to read map of seats layout from given input file({}).",
            args.input_path.display()
        )
    })?;

    let mut seat_map = SeatMap::new(layout, RuleSet::Visible);
    let occupied_n = seat_map
        .stabilize(args.max_steps)
        .context("Failed to simulate seating with visible neighbors.")?;

    println!(
        "After {} round(s), given seats layout stabilizes, and there are {} seats have been occupied.",
        seat_map.rounds(),
        occupied_n
    );

    Ok(())
}
