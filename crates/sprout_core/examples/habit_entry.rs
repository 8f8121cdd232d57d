//! Walk a few candidate habits through the entry-form validation flow.
//!
//! Run with `cargo run --example habit_entry`.

use miette::Result;
use sprout_core::validation::{EntryValidation, validate_entry};
use sprout_core::SproutConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sprout_core=trace".into()),
        )
        .init();

    let config = SproutConfig::load_or_default(&SproutConfig::default_path())?;

    let existing = [
        "read 10 pages",
        "morning run",
        "meditate for 5 minutes",
    ];

    let candidates = [
        "Read 10 Pages!",       // exact duplicate after normalization
        "evening jog",          // same category as "morning run"
        "read 12 pages",        // same category as "read 10 pages"
        "practice guitar",      // genuinely new
        "!!",                   // unusable
    ];

    for candidate in candidates {
        match validate_entry(candidate, &existing, &config.validation) {
            EntryValidation::Rejected { reason } => {
                println!("{candidate:>24} -> rejected: {reason}");
            }
            EntryValidation::Warning { verdict } => {
                println!(
                    "{candidate:>24} -> warning: {} (confidence {:.2})",
                    verdict.reason.unwrap_or_default(),
                    verdict.confidence
                );
            }
            EntryValidation::Accepted => {
                println!("{candidate:>24} -> accepted");
            }
        }
    }

    Ok(())
}
