//! # Glo Attachment Endpoints
//!
//! The service deletes an uploaded attachment after one hour unless a card
//! description or comment links to it. [`GloClient::create_attachment`]
//! uploads the file and immediately posts a comment with the link;
//! [`GloClient::upload_attachment`] only uploads and leaves linking to the
//! caller.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::{info, instrument};

use crate::client::GloClient;
use crate::consts::ATTACHMENT_FORM_FIELD;
use crate::error::{GloError, Result};
use crate::models::{
  Attachment, AttachmentUpload, AttachmentsPage, CommentInput, CreatedAttachment, UploadedAttachment,
};
use crate::query::Pagination;
use crate::resource::{Resource, decode};

/// Optional attachment attributes requested on list
pub const ATTACHMENT_FIELDS: &[&str] = &["created_date", "created_by", "filename", "mime_type"];

impl Resource for Attachment {
  const NAME: &'static str = "attachment";
  const FIELDS: &'static [&'static str] = ATTACHMENT_FIELDS;
  type Listing = Vec<Self>;
}

/// Markdown link text that keeps an attachment alive: `[description](url)`
pub fn attachment_link(description: &str, url: &str) -> String {
  format!("[{description}]({url})")
}

fn upload_form(upload: AttachmentUpload) -> Result<Form> {
  let mut part = Part::bytes(upload.data).file_name(upload.filename);
  if let Some(mime_type) = upload.mime_type {
    part = part.mime_str(&mime_type).map_err(|e| GloError::InvalidBody {
      what: Attachment::NAME,
      reason: e.to_string(),
    })?;
  }
  Ok(Form::new().part(ATTACHMENT_FORM_FIELD, part))
}

impl GloClient {
  /// List the attachments of a card
  #[instrument(skip(self), level = "debug")]
  pub async fn list_attachments(
    &self,
    board_id: &str,
    card_id: &str,
    pagination: &Pagination,
  ) -> Result<AttachmentsPage> {
    self
      .list_resource(
        self.endpoint(&["boards", board_id, "cards", card_id, "attachments"])?,
        pagination,
        false,
      )
      .await
  }

  /// Upload a file to a card without linking it.
  ///
  /// The attachment expires after one hour unless its URL is referenced from
  /// the card description or a comment.
  #[instrument(skip(self, upload), fields(filename = %upload.filename), level = "debug")]
  pub async fn upload_attachment(
    &self,
    board_id: &str,
    card_id: &str,
    upload: AttachmentUpload,
  ) -> Result<UploadedAttachment> {
    info!(
      "Uploading {} ({} bytes) to card {}",
      upload.filename,
      upload.data.len(),
      card_id
    );

    let url = self.endpoint(&["boards", board_id, "cards", card_id, "attachments"])?;
    let form = upload_form(upload)?;

    let response = self.multipart_request(Method::POST, url, form, None).await?;

    decode(Attachment::NAME, &response.body)
  }

  /// Upload a file and post a comment linking to it as
  /// `[description](url)`, so the service keeps the attachment.
  ///
  /// # Errors
  ///
  /// Fails on the first failing step. When the comment cannot be posted the
  /// upload has already happened and will expire.
  #[instrument(skip(self, upload), fields(filename = %upload.filename), level = "debug")]
  pub async fn create_attachment(
    &self,
    board_id: &str,
    card_id: &str,
    upload: AttachmentUpload,
    description: &str,
  ) -> Result<CreatedAttachment> {
    let attachment = self.upload_attachment(board_id, card_id, upload).await?;

    let input = CommentInput::new(attachment_link(description, &attachment.url));
    let comment = self.create_comment(board_id, card_id, &input).await?;

    info!(
      "Linked attachment {} from comment {}",
      attachment.attachment.id, comment.id
    );

    Ok(CreatedAttachment { attachment, comment })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  async fn setup() -> anyhow::Result<(MockServer, GloClient)> {
    let mock_server = MockServer::start().await;
    let client = GloClient::builder("test_token").base_url(mock_server.uri()).build()?;
    Ok((mock_server, client))
  }

  #[test]
  fn test_attachment_link_format() {
    assert_eq!(attachment_link("desc", "X"), "[desc](X)");
  }

  #[test]
  fn test_upload_form_rejects_invalid_mime_type() {
    let upload = AttachmentUpload::new("a.bin", b"x".to_vec()).with_mime_type("not a mime");
    let err = upload_form(upload).unwrap_err();
    assert!(matches!(err, GloError::InvalidBody { what: "attachment", .. }));
  }

  #[tokio::test]
  async fn test_list_attachments() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("GET"))
      .and(path("/boards/b1/cards/card1/attachments"))
      .and(query_param("fields", "mime_type"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header("has-more", "false")
          .set_body_json(json!([{
              "id": "a1",
              "filename": "log.txt",
              "mime_type": "text/plain",
              "created_by": {"id": "u1"}
          }])),
      )
      .mount(&mock_server)
      .await;

    let page = client
      .list_attachments("b1", "card1", &Pagination::default())
      .await?;

    assert!(!page.has_more);
    assert_eq!(page.items[0].filename, "log.txt");
    assert_eq!(page.items[0].mime_type, "text/plain");

    Ok(())
  }

  #[tokio::test]
  async fn test_upload_attachment_sends_file_part() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/attachments"))
      .and(body_string_contains("name=\"file\""))
      .and(body_string_contains("filename=\"log.txt\""))
      .and(body_string_contains("hello attachment"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "a1",
          "filename": "log.txt",
          "mime_type": "text/plain",
          "url": "https://app.gitkraken.com/glo/a1"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let upload = AttachmentUpload::new("log.txt", b"hello attachment".to_vec()).with_mime_type("text/plain");
    let uploaded = client.upload_attachment("b1", "card1", upload).await?;

    assert_eq!(uploaded.attachment.id, "a1");
    assert_eq!(uploaded.url, "https://app.gitkraken.com/glo/a1");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_attachment_posts_link_comment() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/attachments"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "a1",
          "filename": "log.txt",
          "url": "X"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/comments"))
      .and(body_json(json!({"text": "[desc](X)"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "cm1",
          "card_id": "card1",
          "board_id": "b1",
          "text": "[desc](X)"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let created = client
      .create_attachment("b1", "card1", AttachmentUpload::new("log.txt", b"data".to_vec()), "desc")
      .await?;

    assert_eq!(created.attachment.url, "X");
    assert_eq!(created.comment.text, "[desc](X)");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_attachment_stops_when_upload_fails() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/attachments"))
      .respond_with(ResponseTemplate::new(429))
      .mount(&mock_server)
      .await;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/comments"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cm1"})))
      .expect(0)
      .mount(&mock_server)
      .await;

    let err = client
      .create_attachment("b1", "card1", AttachmentUpload::new("log.txt", b"data".to_vec()), "desc")
      .await
      .unwrap_err();

    assert!(err.is_rate_limited());

    Ok(())
  }
}
