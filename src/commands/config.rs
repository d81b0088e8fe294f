use poise::serenity_prelude::{self as serenity, CreateAllowedMentions};

use crate::{constants::TEAM_ROLES, settings, Context, Error};

/// configure the team roles shown in the server overview.
#[poise::command(
    prefix_command,
    guild_only,
    subcommand_required,
    required_permissions = "MANAGE_GUILD",
    subcommands("role")
)]
pub async fn config(_: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// set a team role. known names: admin, mod, support.
#[poise::command(prefix_command)]
#[tracing::instrument(skip(ctx))]
pub async fn role(ctx: Context<'_>, name: String, role: serenity::Role) -> Result<(), Error> {
    if !TEAM_ROLES.iter().any(|(key, _)| *key == name) {
        ctx.send(
            poise::CreateReply::default()
                .reply(true)
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
                .content(format!(
                    "i don't know a team role called \"{name}\". try admin, mod or support."
                )),
        )
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

        return Ok(());
    }

    settings::set(&ctx.data().db, &format!("{name}_role"), &role.id.to_string())
        .await
        .inspect_err(
            |e| tracing::error!(err = ?e, name = %name, "an error occurred when storing team role"),
        )?;

    ctx.send(
        poise::CreateReply::default()
            .reply(true)
            .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
            .content(format!("set the {name} role to \"{}\".", role.name)),
    )
    .await
    .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    Ok(())
}
