use crate::Context;

pub mod about;
pub mod bugreport;
pub mod config;
pub mod help;
pub mod server;

pub(crate) fn get_bot_avatar(ctx: Context<'_>) -> String {
    ctx.cache().current_user().avatar_url().unwrap_or_default()
}
