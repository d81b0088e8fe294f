use poise::serenity_prelude::{CreateEmbed, Guild, Mentionable, OnlineStatus, RoleId, UserId};

use crate::{
    constants::{EMBED_COLOR, ERROR_COLOR, TEAM_ROLES},
    settings, Context, Error,
};

/// display information about this server.
#[poise::command(prefix_command, guild_only, subcommands("bots"))]
#[tracing::instrument(skip_all)]
pub async fn server(ctx: Context<'_>) -> Result<(), Error> {
    let mut team_roles: Vec<(&str, RoleId)> = vec![];
    for (name, label) in TEAM_ROLES {
        if let Some(role_id) = settings::get_role_id(&ctx.data().db, name).await? {
            team_roles.push((label, role_id));
        }
    }

    let embed = {
        let guild = ctx.guild().ok_or("guild is not cached")?;

        let online_count = guild
            .presences
            .values()
            .filter(|presence| presence.status != OnlineStatus::Offline)
            .count();

        let mut embed = CreateEmbed::default()
            .title(guild.name.clone())
            .description("here's an overview of this server!")
            .color(EMBED_COLOR)
            .field(
                "created on",
                format!("<t:{}:D>", guild.id.created_at().unix_timestamp()),
                true,
            )
            .field(
                format!("{} members", guild.member_count),
                format!("{} online", online_count),
                true,
            )
            .field("owner", guild.owner_id.mention().to_string(), true);

        if let Some(icon_url) = guild.icon_url() {
            embed = embed.thumbnail(icon_url);
        }

        for (label, role_id) in team_roles {
            if !guild.roles.contains_key(&role_id) {
                continue;
            }

            let members: Vec<String> = guild
                .members
                .values()
                .filter(|member| member.roles.contains(&role_id))
                .map(|member| member.mention().to_string())
                .collect();

            if members.is_empty() {
                continue;
            }

            embed = embed.field(
                format!("{}: {}", label, members.len()),
                member_list(&members, ":small_orange_diamond:"),
                false,
            );
        }

        let bots: Vec<UserId> = guild
            .members
            .values()
            .filter(|member| member.user.bot)
            .map(|member| member.user.id)
            .collect();
        let bots_online = bots
            .iter()
            .filter(|user_id| is_online(&guild, **user_id))
            .count();

        embed.field(
            format!("{} bots", bots.len()),
            format!("{} online", bots_online),
            true,
        )
    };

    ctx.send(poise::CreateReply::default().embed(embed))
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    Ok(())
}

/// list all bots on this server.
#[poise::command(prefix_command)]
#[tracing::instrument(skip_all)]
pub async fn bots(ctx: Context<'_>) -> Result<(), Error> {
    let embed = {
        let guild = ctx.guild().ok_or("guild is not cached")?;

        let mut online = vec![];
        let mut offline = vec![];

        for member in guild.members.values().filter(|member| member.user.bot) {
            let mention = member.mention().to_string();

            if is_online(&guild, member.user.id) {
                online.push(mention);
            } else {
                offline.push(mention);
            }
        }

        bot_list_embed(online, offline)
    };

    ctx.send(poise::CreateReply::default().embed(embed))
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    Ok(())
}

fn is_online(guild: &Guild, user_id: UserId) -> bool {
    guild
        .presences
        .get(&user_id)
        .is_some_and(|presence| presence.status != OnlineStatus::Offline)
}

fn member_list(mentions: &[String], diamond: &str) -> String {
    mentions
        .iter()
        .map(|mention| format!("{diamond} {mention}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bot_list_embed(online: Vec<String>, offline: Vec<String>) -> CreateEmbed {
    if online.is_empty() && offline.is_empty() {
        return CreateEmbed::default()
            .title("bots")
            .color(ERROR_COLOR)
            .description("there are no bots on this server!");
    }

    let mut embed = CreateEmbed::default().title("bots").color(EMBED_COLOR);

    if !online.is_empty() {
        embed = embed.field("online", member_list(&online, ":small_orange_diamond:"), false);
    }

    if !offline.is_empty() {
        embed = embed.field("offline", member_list(&offline, ":small_blue_diamond:"), false);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::{bot_list_embed, member_list};
    use crate::constants::{EMBED_COLOR, ERROR_COLOR};

    fn embed_json(embed: poise::serenity_prelude::CreateEmbed) -> serde_json::Value {
        serde_json::to_value(embed).unwrap()
    }

    fn embed_fields(json: &serde_json::Value) -> Vec<serde_json::Value> {
        json.get("fields")
            .and_then(|fields| fields.as_array().cloned())
            .unwrap_or_default()
    }

    #[test]
    fn no_bots_yields_a_description_and_no_fields() {
        let json = embed_json(bot_list_embed(vec![], vec![]));

        assert_eq!(json["description"], "there are no bots on this server!");
        assert_eq!(json["color"], ERROR_COLOR);
        assert!(embed_fields(&json).is_empty());
    }

    #[test]
    fn only_online_bots_yields_a_single_online_field() {
        let json = embed_json(bot_list_embed(vec!["<@1>".to_string()], vec![]));

        let fields = embed_fields(&json);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0]["name"], "online");
        assert_eq!(json["color"], EMBED_COLOR);
    }

    #[test]
    fn only_offline_bots_yields_a_single_offline_field() {
        let json = embed_json(bot_list_embed(vec![], vec!["<@1>".to_string()]));

        let fields = embed_fields(&json);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0]["name"], "offline");
    }

    #[test]
    fn mixed_bots_yield_online_then_offline_fields() {
        let json = embed_json(bot_list_embed(
            vec!["<@1>".to_string()],
            vec!["<@2>".to_string(), "<@3>".to_string()],
        ));

        let fields = embed_fields(&json);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "online");
        assert_eq!(fields[1]["name"], "offline");
    }

    #[test]
    fn member_list_prefixes_every_mention() {
        let mentions = vec!["<@1>".to_string(), "<@2>".to_string()];

        assert_eq!(
            member_list(&mentions, ":small_orange_diamond:"),
            ":small_orange_diamond: <@1>\n:small_orange_diamond: <@2>"
        );
    }
}
