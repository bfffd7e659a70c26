use chrono::Local;

use arise_core::reminder::parse_time;

use super::Context;

pub fn run(ctx: &Context, at: Option<&str>) -> Result<(), String> {
    let now = match at {
        Some(s) => parse_time(s).map_err(|e| e.to_string())?,
        None => Local::now().time(),
    };

    if ctx.engine().check_reminder(now).is_none() {
        println!("  No reminder due.");
    }
    Ok(())
}
