use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{Context, require_registered};

const DESCRIPTION_WIDTH: usize = 60;

pub fn run(ctx: &Context) -> Result<(), String> {
    let engine = ctx.engine();
    require_registered(&engine)?;
    let quests = engine.quests();

    if quests.is_empty() {
        println!("  No quests on the board.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Type", "Quest", "Rewards", "Status"]);

    for quest in quests.iter() {
        let status = if quest.completed {
            "[COMPLETED]"
        } else {
            "[INCOMPLETE]"
        };
        let detail = format!("{}\n{}", quest.title, truncate(&quest.description));
        table.add_row(vec![
            quest.id.to_string(),
            format!("{} QUEST", quest.kind),
            detail,
            quest.rewards.to_string(),
            status.to_string(),
        ]);
    }

    println!("  {}", "QUEST LOG".bold());
    println!("{table}");
    println!();
    println!(
        "  {}/{} completed",
        quests.completed_count(),
        quests.len()
    );

    Ok(())
}

fn truncate(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_WIDTH {
        let head: String = text.chars().take(DESCRIPTION_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
