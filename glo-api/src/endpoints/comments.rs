//! # Glo Comment Endpoints
//!
//! Unlike other listings, comment pages arrive wrapped in an object whose
//! `comments` key holds the records.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::client::GloClient;
use crate::error::Result;
use crate::models::{Comment, CommentInput, CommentsPage};
use crate::query::Pagination;
use crate::resource::Resource;

/// Optional comment attributes requested on list
pub const COMMENT_FIELDS: &[&str] = &[
  "board_id",
  "card_id",
  "created_date",
  "created_by",
  "updated_by",
  "updated_date",
  "text",
];

/// Wire shape of a comment listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsEnvelope {
  #[serde(default, alias = "Comments")]
  pub comments: Vec<Comment>,
}

impl From<CommentsEnvelope> for Vec<Comment> {
  fn from(envelope: CommentsEnvelope) -> Self {
    envelope.comments
  }
}

impl Resource for Comment {
  const NAME: &'static str = "comment";
  const FIELDS: &'static [&'static str] = COMMENT_FIELDS;
  type Listing = CommentsEnvelope;
}

impl GloClient {
  /// List the comments of a card
  #[instrument(skip(self), level = "debug")]
  pub async fn list_comments(&self, board_id: &str, card_id: &str, pagination: &Pagination) -> Result<CommentsPage> {
    self
      .list_resource(self.endpoint(&["boards", board_id, "cards", card_id, "comments"])?, pagination, false)
      .await
  }

  /// Add a comment to a card
  #[instrument(skip(self), level = "debug")]
  pub async fn create_comment(&self, board_id: &str, card_id: &str, input: &CommentInput) -> Result<Comment> {
    info!("Commenting on card {} of board {}", card_id, board_id);
    self
      .post_resource(
        Comment::NAME,
        self.endpoint(&["boards", board_id, "cards", card_id, "comments"])?,
        input,
      )
      .await
  }

  /// Replace the text of a comment
  #[instrument(skip(self), level = "debug")]
  pub async fn edit_comment(
    &self,
    board_id: &str,
    card_id: &str,
    comment_id: &str,
    input: &CommentInput,
  ) -> Result<Comment> {
    self
      .post_resource(
        Comment::NAME,
        self.endpoint(&["boards", board_id, "cards", card_id, "comments", comment_id])?,
        input,
      )
      .await
  }

  /// Delete a comment
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_comment(&self, board_id: &str, card_id: &str, comment_id: &str) -> Result<()> {
    info!("Deleting comment {} from card {}", comment_id, card_id);
    self
      .delete_resource(self.endpoint(&["boards", board_id, "cards", card_id, "comments", comment_id])?)
      .await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::error::GloError;

  async fn setup() -> anyhow::Result<(MockServer, GloClient)> {
    let mock_server = MockServer::start().await;
    let client = GloClient::builder("test_token").base_url(mock_server.uri()).build()?;
    Ok((mock_server, client))
  }

  #[tokio::test]
  async fn test_list_comments_decodes_envelope() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("GET"))
      .and(path("/boards/b1/cards/card1/comments"))
      .and(query_param("fields", "text"))
      .and(query_param_is_missing("archived"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header("has-more", "true")
          .set_body_json(json!({
              "comments": [
                  {"id": "cm1", "card_id": "card1", "board_id": "b1", "text": "first"},
                  {"id": "cm2", "card_id": "card1", "board_id": "b1", "text": "second"}
              ]
          })),
      )
      .mount(&mock_server)
      .await;

    let page = client.list_comments("b1", "card1", &Pagination::default()).await?;

    assert!(page.has_more);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].text, "second");

    Ok(())
  }

  #[tokio::test]
  async fn test_list_comments_rejects_bare_array() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("GET"))
      .and(path("/boards/b1/cards/card1/comments"))
      .respond_with(
        ResponseTemplate::new(200)
          .insert_header("has-more", "false")
          .set_body_json(json!([])),
      )
      .mount(&mock_server)
      .await;

    let err = client
      .list_comments("b1", "card1", &Pagination::default())
      .await
      .unwrap_err();

    assert!(matches!(err, GloError::Decode { what: "comment", .. }));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_comment() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/comments"))
      .and(body_json(json!({"text": "hello"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "cm1",
          "card_id": "card1",
          "board_id": "b1",
          "text": "hello",
          "created_by": {"id": "u1"}
      })))
      .mount(&mock_server)
      .await;

    let comment = client.create_comment("b1", "card1", &CommentInput::new("hello")).await?;

    assert_eq!(comment.id, "cm1");
    assert_eq!(comment.text, "hello");

    Ok(())
  }

  #[tokio::test]
  async fn test_edit_comment() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("POST"))
      .and(path("/boards/b1/cards/card1/comments/cm1"))
      .and(body_json(json!({"text": "edited"})))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "cm1", "text": "edited"})))
      .mount(&mock_server)
      .await;

    let comment = client
      .edit_comment("b1", "card1", "cm1", &CommentInput::new("edited"))
      .await?;

    assert_eq!(comment.text, "edited");

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_comment() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("DELETE"))
      .and(path("/boards/b1/cards/card1/comments/cm1"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    client.delete_comment("b1", "card1", "cm1").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_comment_escapes_reserved_characters() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    Mock::given(method("DELETE"))
      .and(path("/boards/b1/cards/card1%23/comments/cm1"))
      .respond_with(ResponseTemplate::new(204))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("DELETE"))
      .and(path("/boards/b1/cards/card1"))
      .respond_with(ResponseTemplate::new(204))
      .expect(0)
      .mount(&mock_server)
      .await;

    client.delete_comment("b1", "card1#", "cm1").await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_delete_comment_rejects_dot_segments_before_sending() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await?;

    let err = client.delete_comment("b1", "..", "cm1").await.unwrap_err();
    assert!(matches!(err, GloError::InvalidPathSegment { .. }));

    client.delete_comment("b1", "../../boards/b1", "cm1").await.unwrap_err();

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/boards/b1/cards/..%2F..%2Fboards%2Fb1/comments/cm1");

    Ok(())
  }

  #[test]
  fn test_envelope_accepts_capitalized_key() {
    let envelope: CommentsEnvelope = serde_json::from_value(json!({"Comments": [{"id": "cm1"}]})).unwrap();
    let comments: Vec<Comment> = envelope.into();
    assert_eq!(comments[0].id, "cm1");
  }
}
