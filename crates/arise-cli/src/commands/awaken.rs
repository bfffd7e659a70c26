use colored::Colorize;

use arise_core::normalize_name;

use super::Context;

pub fn run(ctx: &Context, raw_name: &str) -> Result<(), String> {
    let name = normalize_name(raw_name).map_err(|e| e.to_string())?;

    let mut engine = ctx.engine();
    let previous = engine.player().name.clone();
    engine.set_player_name(name.as_str());

    if previous.is_empty() {
        println!("  {}", "SYSTEM NOTICE".bold());
        println!("  Registration complete. Welcome, Player {}.", name.bold());
    } else {
        println!("  Player {} is now known as {}.", previous, name.bold());
    }
    Ok(())
}
