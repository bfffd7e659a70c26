use colored::Colorize;

use super::{Context, require_registered};

pub fn run(ctx: &Context, id: u32) -> Result<(), String> {
    let mut engine = ctx.engine();
    require_registered(&engine)?;

    let Some(quest) = engine.quests().get(id) else {
        println!("  No quest with id {id}.");
        return Ok(());
    };
    if quest.completed {
        println!("  {} is already completed.", quest.title.bold());
        return Ok(());
    }
    let title = quest.title.clone();
    let rewards = quest.rewards.to_string();

    let Some(done) = engine.complete_quest(id) else {
        return Ok(());
    };

    println!("  {}", title.bold());
    println!("  Rewards: {rewards}");
    if done.leveled_up() {
        println!(
            "  Level {} reached (+{} stat points)",
            done.level.to_string().yellow().bold(),
            done.level_points
        );
    }
    let player = engine.player();
    println!(
        "  EXP {}/{} | Gold {} | Available points {}",
        player.current_exp,
        player.max_exp,
        player.gold,
        engine.stats().points
    );
    Ok(())
}
