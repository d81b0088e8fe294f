use poise::serenity_prelude::{
    self as serenity, CreateAllowedMentions, CreateMessage, Mentionable, Message, MessageReference,
    Ready,
};

use crate::{constants::QUOTED_ROLE_MENTION_REGEX, presence, Data};

pub async fn ready(ctx: &serenity::Context, data: &Data, ready: &Ready) -> anyhow::Result<()> {
    tracing::info!("connected as {}!", ready.user.name);

    // a gateway reconnect delivers Ready again; replace the old task instead
    // of stacking a second rotation.
    let mut task = data.status_task.lock().unwrap();
    if let Some(old) = task.take() {
        old.abort();
    }
    *task = Some(presence::spawn_rotation(ctx.clone()));

    Ok(())
}

pub async fn message(
    ctx: &serenity::Context,
    _data: &Data,
    new_message: &Message,
) -> anyhow::Result<()> {
    if new_message.guild_id.is_none() || new_message.author.bot {
        return Ok(());
    }

    if contains_quoted_role_mention(&new_message.content) {
        new_message
            .channel_id
            .send_message(
                ctx,
                CreateMessage::default()
                    .reference_message(MessageReference::from(new_message))
                    .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
                    .content(format!(
                        "{} please remove the role mention from your quote!",
                        new_message.author.mention()
                    )),
            )
            .await
            .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;
    }

    Ok(())
}

fn contains_quoted_role_mention(content: &str) -> bool {
    content
        .lines()
        .any(|line| QUOTED_ROLE_MENTION_REGEX.is_match(line).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::contains_quoted_role_mention;

    #[test]
    fn quoted_role_mention_matches() {
        assert!(contains_quoted_role_mention("> hey <@&123456789> look at this"));
    }

    #[test]
    fn quote_without_mention_does_not_match() {
        assert!(!contains_quoted_role_mention("> just an ordinary quote"));
    }

    #[test]
    fn mention_outside_a_quote_does_not_match() {
        assert!(!contains_quoted_role_mention("hey <@&123456789>, morning!"));
    }

    #[test]
    fn user_mention_in_quote_does_not_match() {
        assert!(!contains_quoted_role_mention("> thanks <@123456789>!"));
    }

    #[test]
    fn any_matching_line_is_enough() {
        let content = "first line\n> quoted <@&42> mention\nlast line";

        assert!(contains_quoted_role_mention(content));
    }

    #[test]
    fn multiple_matching_lines_still_match_once() {
        let content = "> one <@&1>\n> two <@&2>";

        assert!(contains_quoted_role_mention(content));
    }
}
