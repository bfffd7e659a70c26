use colored::Colorize;

use arise_core::Attribute;

use super::{Context, require_registered};

pub fn run(ctx: &Context, attribute: &str, count: u32) -> Result<(), String> {
    let attribute = attribute
        .parse::<Attribute>()
        .map_err(|e| e.to_string())?;

    let mut engine = ctx.engine();
    require_registered(&engine)?;

    let before = engine.stats().get(attribute);
    let spent = (0..count)
        .take_while(|_| engine.add_stat_point(attribute))
        .count();

    if spent == 0 {
        if engine.stats().points == 0 {
            println!("  No stat points available.");
        } else {
            println!("  {attribute} cannot be raised any further.");
        }
        return Ok(());
    }

    let stats = engine.stats();
    println!(
        "  {} {} -> {} ({} point{} left)",
        attribute.to_string().bold(),
        before,
        stats.get(attribute).to_string().green().bold(),
        stats.points,
        if stats.points == 1 { "" } else { "s" },
    );
    Ok(())
}
