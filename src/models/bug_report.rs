use serde::Serialize;

/// the `payload_json` half of a webhook upload; attachments ride along as
/// separate multipart parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub content: String,
}
