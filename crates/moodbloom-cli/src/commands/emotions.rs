use moodbloom_core::emotion;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let all = emotion::catalog();
    if json {
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    for e in all {
        println!(
            "{:<12} {:<12} {:<9} intensity {}",
            e.id,
            e.name,
            e.category.as_str(),
            e.intensity
        );
    }
    Ok(())
}
