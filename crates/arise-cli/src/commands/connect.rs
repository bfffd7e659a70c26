use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    ctx.engine().announce_connection();
    Ok(())
}
