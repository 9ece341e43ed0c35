use chrono::{DateTime, Utc};
use clap::Args;
use moodbloom_core::emotion;

use super::{open_session, report_persist_warning};

#[derive(Args)]
pub struct LogArgs {
    /// Emotion id (see `moodbloom emotions`)
    pub emotion: String,
    /// Intensity from 1 to 5; defaults to the last value used for this emotion
    #[arg(long, short)]
    pub intensity: Option<u8>,
    /// Log even if an emotion was already logged today
    #[arg(long)]
    pub force: bool,
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: LogArgs, now: DateTime<Utc>) -> Result<(), Box<dyn std::error::Error>> {
    let (mut session, config) = open_session()?;
    let base = emotion::lookup(&args.emotion)?;

    let intensity = args.intensity.unwrap_or_else(|| {
        session
            .garden()
            .plant_for_emotion(&base.id)
            .map_or(base.intensity, |p| p.emotion.intensity)
    });
    let chosen = base.with_intensity(intensity)?;

    let gated = config.garden.enforce_daily_limit && !args.force;
    let result = if gated {
        session.try_log_emotion(&chosen, now)?
    } else {
        session.log_emotion(&chosen, now)
    };
    report_persist_warning(result.persist_warning.as_deref());

    let outcome = result.value;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_new_plant {
        println!(
            "You've planted a new {}! Your plant has been watered and will start growing.",
            outcome.plant.name
        );
    } else {
        println!(
            "Your {} has been watered and is growing stronger! Your consistency streak is now {} days.",
            outcome.plant.name, outcome.plant.consistency_streak
        );
    }
    Ok(())
}
