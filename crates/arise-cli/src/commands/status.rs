use colored::Colorize;

use arise_core::Attribute;

use super::Context;

const BAR_WIDTH: usize = 20;

pub fn run(ctx: &Context) -> Result<(), String> {
    let engine = ctx.engine();
    let player = engine.player();

    if !player.is_registered() {
        println!("  {}", "SYSTEM NOTICE".bold());
        println!("  Congratulations. You have been chosen as a Player.");
        println!("  Register your name with the System: arise awaken <name>");
        return Ok(());
    }

    let stats = engine.stats();

    println!("  {}", "STATUS".bold());
    println!();
    println!("  NAME:   {}", player.name.bold());
    println!("  JOB:    {}", player.job);
    println!("  LEVEL:  {}", player.level.to_string().bold());
    println!("  GOLD:   {}", player.gold.to_string().yellow());
    println!();
    println!(
        "  HP   {}  {}/{}",
        bar(u64::from(player.hp), u64::from(player.max_hp)).red(),
        player.hp,
        player.max_hp
    );
    println!(
        "  MP   {}  {}/{}",
        bar(u64::from(player.mp), u64::from(player.max_mp)).blue(),
        player.mp,
        player.max_mp
    );
    println!(
        "  EXP  {}  {}/{}",
        bar(player.current_exp, player.max_exp),
        player.current_exp,
        player.max_exp
    );
    println!();
    println!("  {}", "ATTRIBUTES".bold());
    println!("  AVAILABLE POINTS: {}", stats.points.to_string().green());
    for attribute in Attribute::ALL {
        println!("  {attribute:<5}{}", stats.get(attribute));
    }
    if stats.points > 0 {
        println!();
        println!("  {}", "Spend points with: arise allocate <attribute>".dimmed());
    }

    Ok(())
}

/// A fixed-width fill bar, clamped to 0-100%.
fn bar(current: u64, max: u64) -> String {
    let filled = if max == 0 {
        BAR_WIDTH
    } else {
        let ratio = (current as f64 / max as f64).clamp(0.0, 1.0);
        (ratio * BAR_WIDTH as f64).round() as usize
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
