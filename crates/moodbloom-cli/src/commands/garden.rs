use chrono::{DateTime, Utc};
use moodbloom_core::{DecorationKind, Plant};
use serde::Serialize;

use super::{open_session, report_persist_warning};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Status {
    can_log_today: bool,
    last_emotion_id: Option<String>,
    last_emotion_date: Option<DateTime<Utc>>,
    emotion_streak: u32,
    season: String,
    plant_count: usize,
    decorations: Vec<DecorationKind>,
}

pub fn status(json: bool, now: DateTime<Utc>) -> Result<(), Box<dyn std::error::Error>> {
    let (session, _) = open_session()?;
    let garden = session.garden();
    let status = Status {
        can_log_today: garden.can_log_today(now),
        last_emotion_id: garden.last_emotion_id().map(str::to_string),
        last_emotion_date: garden.last_emotion_date(),
        emotion_streak: garden.current_streak(),
        season: garden.current_season(now).to_string(),
        plant_count: garden.plants().len(),
        decorations: garden.decorations().to_vec(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Season: {}", status.season);
    println!("Plants: {}", status.plant_count);
    match &status.last_emotion_id {
        Some(id) => println!("Last emotion: {id} (streak {})", status.emotion_streak),
        None => println!("Last emotion: none yet"),
    }
    if status.can_log_today {
        println!("You can log how you feel today.");
    } else {
        println!("Already logged today. Come back tomorrow!");
    }
    Ok(())
}

pub fn plants(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (session, _) = open_session()?;
    let plants = session.garden().plants();

    if json {
        println!("{}", serde_json::to_string_pretty(plants)?);
        return Ok(());
    }

    if plants.is_empty() {
        println!("Your garden is empty. Log an emotion to plant your first seed.");
    }
    for p in plants {
        println!(
            "{:<24} {:<10} {:<12} stage {}/{}  streak {}",
            p.name,
            p.rarity,
            p.stage_label(),
            p.growth_stage,
            p.max_growth_stage,
            p.consistency_streak
        );
    }
    Ok(())
}

pub fn plant(emotion_id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (session, _) = open_session()?;
    let plant = session
        .garden()
        .plant_for_emotion(emotion_id)
        .ok_or_else(|| format!("no plant for emotion '{emotion_id}' yet"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(plant)?);
        return Ok(());
    }

    println!("{}", plant.name);
    println!("  rarity:   {}", plant.rarity);
    println!(
        "  stage:    {} ({}/{})",
        plant.stage_label(),
        plant.growth_stage,
        plant.max_growth_stage
    );
    println!("  streak:   {} days", plant.consistency_streak);
    println!("  features: {}", plant.features.join(", "));
    println!("  planted:  {}", plant.planted_date.format("%Y-%m-%d"));
    println!("  watered:  {}", if plant.watered_today { "yes" } else { "no" });
    println!("  {}", consistency_message(plant));
    Ok(())
}

fn consistency_message(plant: &Plant) -> String {
    let streak = plant.consistency_streak;
    match streak {
        0..=1 => "You just started feeling this emotion. Log it again tomorrow to help your plant grow!"
            .to_string(),
        2..=3 => format!(
            "You've felt {} for {streak} days in a row. Your plant is growing steadily!",
            plant.emotion.name.to_lowercase()
        ),
        4..=6 => format!(
            "Impressive! You've maintained this emotion for {streak} consecutive days. Your plant is thriving!"
        ),
        _ => format!(
            "Amazing consistency! {streak} days of the same emotion has made your plant extraordinary!"
        ),
    }
}

pub fn decorate(kind: &str) -> Result<(), Box<dyn std::error::Error>> {
    let kind: DecorationKind = kind.parse()?;
    let (mut session, _) = open_session()?;
    let result = session.add_decoration(kind);
    report_persist_warning(result.persist_warning.as_deref());
    println!("added {kind}");
    Ok(())
}

pub fn reset(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("refusing to reset without --yes".into());
    }
    let (mut session, _) = open_session()?;
    let result = session.reset();
    report_persist_warning(result.persist_warning.as_deref());
    println!("garden reset");
    Ok(())
}
