use poise::serenity_prelude::{self as serenity, CreateAllowedMentions, Mentionable};

use crate::{models::bug_report::WebhookPayload, Context, Error};

fn report_content(mention: &str, report: &str) -> String {
    format!("{mention} reported:\n{report}")
}

/// report a bug to the devs.
#[poise::command(prefix_command, aliases("bug", "b"))]
#[tracing::instrument(skip_all)]
pub async fn bugreport(ctx: Context<'_>) -> Result<(), Error> {
    let Some(url) = ctx.data().bug_report_url.clone() else {
        ctx.send(
            poise::CreateReply::default()
                .reply(true)
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
                .content("bug reports aren't set up on this instance, sorry!"),
        )
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

        return Ok(());
    };

    ctx.send(
        poise::CreateReply::default()
            .reply(true)
            .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
            .content("now send the full bug report in one message."),
    )
    .await
    .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    let Some(report) = serenity::collector::MessageCollector::new(ctx)
        .channel_id(ctx.channel_id())
        .author_id(ctx.author().id)
        .timeout(std::time::Duration::from_secs(300))
        .await
    else {
        ctx.send(
            poise::CreateReply::default()
                .reply(true)
                .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
                .content("i waited five minutes and didn't get a report... try again?"),
        )
        .await
        .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

        return Ok(());
    };

    let payload = WebhookPayload {
        username: ctx.author().display_name().to_string(),
        avatar_url: ctx.author().avatar_url().unwrap_or_default(),
        content: report_content(&ctx.author().mention().to_string(), &report.content),
    };

    let mut form =
        reqwest::multipart::Form::new().text("payload_json", serde_json::to_string(&payload)?);

    for (i, attachment) in report.attachments.iter().enumerate() {
        let bytes = attachment.download().await.inspect_err(|e| {
            tracing::error!(err = ?e, filename = %attachment.filename, "an error occurred when downloading attachment");
        })?;

        form = form.part(
            i.to_string(),
            reqwest::multipart::Part::bytes(bytes).file_name(attachment.filename.clone()),
        );
    }

    match ctx
        .data()
        .reqwest_client
        .post(&url)
        .multipart(form)
        .send()
        .await
    {
        Ok(res) if res.status().is_success() => {
            tracing::info!(status = %res.status(), "bug report delivered");
        }
        Ok(res) => {
            tracing::error!(status = %res.status(), "bug report endpoint rejected the payload");
        }
        Err(e) => {
            tracing::error!(err = ?e, "an error occurred when delivering bug report");
        }
    }

    ctx.send(
        poise::CreateReply::default()
            .reply(true)
            .allowed_mentions(CreateAllowedMentions::new().replied_user(false))
            .content("got it, thanks for the report!"),
    )
    .await
    .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when sending reply"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::report_content;
    use crate::models::bug_report::WebhookPayload;

    #[test]
    fn report_content_is_prefixed_with_the_reporter() {
        assert_eq!(
            report_content("<@42>", "the thing broke"),
            "<@42> reported:\nthe thing broke"
        );
    }

    #[test]
    fn report_content_keeps_multiline_reports_intact() {
        assert_eq!(
            report_content("<@42>", "line one\nline two"),
            "<@42> reported:\nline one\nline two"
        );
    }

    #[test]
    fn payload_serializes_with_webhook_field_names() {
        let payload = WebhookPayload {
            username: "rin".to_string(),
            avatar_url: "https://example.com/a.png".to_string(),
            content: report_content("<@42>", "help"),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["username"], "rin");
        assert_eq!(json["avatar_url"], "https://example.com/a.png");
        assert_eq!(json["content"], "<@42> reported:\nhelp");
    }
}
