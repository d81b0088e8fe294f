use std::time::UNIX_EPOCH;

use poise::serenity_prelude as serenity;

use crate::{
    commands::get_bot_avatar,
    constants::{version::get_version, POISE_VERSION, STARTUP_TIME},
    settings, Context, Error,
};

/// get some info about the bot.
#[poise::command(prefix_command, slash_command)]
#[tracing::instrument(skip_all)]
pub async fn about(ctx: Context<'_>) -> Result<(), Error> {
    let team_roles = settings::count_team_roles(&ctx.data().db)
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when counting team roles"))?;

    ctx.send(poise::CreateReply::default().embed(
        serenity::CreateEmbed::new()
            .field(
                "about the bot",
                "guildkeeper is a housekeeping bot: it posts a server overview on demand, rotates the displayed status, warns about role mentions hidden in quotes, and relays bug reports to the devs.",
                false,
            )
            .field("version", get_version(), false)
            .field("rust", format!("[{0}](https://releases.rs/docs/{0})", rustc_version_runtime::version()), true)
            .field("poise", format!("[{0}](https://docs.rs/crate/poise/{0})", POISE_VERSION), true)
            .field("team roles configured", format!("{team_roles}"), true)
            .field("uptime", format!("<t:{}:R>", STARTUP_TIME.duration_since(UNIX_EPOCH).unwrap().as_secs()), true)
            .thumbnail(get_bot_avatar(ctx)),
    ))
    .await
    .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    Ok(())
}
