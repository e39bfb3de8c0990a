//! Records mirroring the JSON shapes of the Glo API.
//!
//! Field selection means the service may omit any optional attribute, so
//! response records default every missing field.

use serde::{Deserialize, Serialize};

/// Minimized user reference embedded in other records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialUser {
  pub id: String,
}

impl PartialUser {
  pub fn new(id: impl Into<String>) -> Self {
    Self { id: id.into() }
  }
}

/// Represents a Glo user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
  pub id: String,
  pub name: String,
  pub username: String,
  pub email: String,
}

/// RGBA colour of a label
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: f64,
}

/// Represents a board label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
  pub id: String,
  pub name: String,
  pub color: Color,
  pub created_date: Option<String>,
  pub created_by: Option<PartialUser>,
}

/// Minimized label reference used on cards
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialLabel {
  pub id: String,
  #[serde(default, skip_serializing_if = "String::is_empty")]
  pub name: String,
}

impl PartialLabel {
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      name: String::new(),
    }
  }
}

/// Represents a board member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardMember {
  pub id: String,
  pub role: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub username: Option<String>,
}

/// Represents a Glo board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
  pub id: String,
  pub name: String,
  pub columns: Vec<Column>,
  pub archived_columns: Vec<Column>,
  pub invited_members: Vec<BoardMember>,
  pub members: Vec<BoardMember>,
  pub archived_date: Option<String>,
  pub created_date: Option<String>,
  pub created_by: Option<PartialUser>,
  pub labels: Vec<Label>,
}

/// Payload for creating or renaming a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInput {
  pub name: String,
}

/// Represents a board column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
  pub id: String,
  pub name: String,
  /// Ordering of the column within its board
  pub position: i64,
  pub archived_date: Option<String>,
  pub created_date: Option<String>,
  pub created_by: Option<PartialUser>,
}

/// Payload for creating or editing a column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInput {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub position: Option<i64>,
}

/// Full card description as returned by the service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
  pub text: String,
  pub created_date: Option<String>,
  pub updated_date: Option<String>,
  pub created_by: Option<PartialUser>,
  pub updated_by: Option<PartialUser>,
}

/// Text-only description sent when creating or editing a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimizedDescription {
  pub text: String,
}

impl MinimizedDescription {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

/// Represents a Glo card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Card {
  pub id: String,
  pub name: String,
  pub position: i64,
  /// The service spells this key `Description`.
  #[serde(rename = "Description", alias = "description")]
  pub description: Option<Description>,
  pub board_id: String,
  pub column_id: String,
  pub created_date: Option<String>,
  pub updated_date: Option<String>,
  pub archived_date: Option<String>,
  pub assignees: Vec<PartialUser>,
  pub labels: Vec<PartialLabel>,
  pub due_date: Option<String>,
  pub comment_count: u32,
  pub attachment_count: u32,
  pub completed_task_count: u32,
  pub total_task_count: u32,
  pub created_by: Option<PartialUser>,
}

/// Payload for creating or editing a card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub position: Option<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<MinimizedDescription>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub column_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignees: Option<Vec<PartialUser>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub labels: Option<Vec<PartialLabel>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub due_date: Option<String>,
}

impl CardInput {
  /// A card named `name` placed in `column_id`
  pub fn new(name: impl Into<String>, column_id: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      column_id: Some(column_id.into()),
      ..Self::default()
    }
  }

  /// Attach a text description
  pub fn with_description(mut self, text: impl Into<String>) -> Self {
    self.description = Some(MinimizedDescription::new(text));
    self
  }
}

/// Represents a card comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
  pub id: String,
  pub card_id: String,
  pub board_id: String,
  pub created_date: Option<String>,
  pub updated_date: Option<String>,
  pub created_by: Option<PartialUser>,
  pub updated_by: Option<PartialUser>,
  pub text: String,
}

/// Payload for creating or editing a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentInput {
  pub text: String,
}

impl CommentInput {
  pub fn new(text: impl Into<String>) -> Self {
    Self { text: text.into() }
  }
}

/// Represents a card attachment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
  pub id: String,
  pub filename: String,
  pub mime_type: String,
  pub created_date: Option<String>,
  pub created_by: Option<PartialUser>,
}

/// Response of an attachment upload: the stored attachment plus the URL a
/// card description or comment must link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedAttachment {
  #[serde(flatten)]
  pub attachment: Attachment,
  pub url: String,
}

/// A file to upload as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentUpload {
  pub filename: String,
  /// Media type of the file; the service infers one when absent
  pub mime_type: Option<String>,
  pub data: Vec<u8>,
}

impl AttachmentUpload {
  pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
    Self {
      filename: filename.into(),
      mime_type: None,
      data: data.into(),
    }
  }

  pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
    self.mime_type = Some(mime_type.into());
    self
  }
}

/// Result of the composite attachment creation: the upload and the comment
/// that links to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedAttachment {
  pub attachment: UploadedAttachment,
  pub comment: Comment,
}

/// A page of a list endpoint.
///
/// `has_more` comes from the `has-more` response header, never from the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
  pub items: Vec<T>,
  pub has_more: bool,
}

pub type BoardsPage = Paginated<Board>;
pub type CardsPage = Paginated<Card>;
pub type CommentsPage = Paginated<Comment>;
pub type AttachmentsPage = Paginated<Attachment>;

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_board_deserialization() {
    let json = json!({
        "id": "b1",
        "name": "Roadmap",
        "columns": [{"id": "c1", "name": "Todo", "position": 0}],
        "members": [{"id": "u1", "role": "owner", "username": "jack"}],
        "labels": [{"id": "l1", "name": "bug", "color": {"r": 255, "g": 0, "b": 0, "a": 1.0}}],
        "created_by": {"id": "u1"}
    });

    let board: Board = serde_json::from_value(json).unwrap();

    assert_eq!(board.id, "b1");
    assert_eq!(board.columns[0].name, "Todo");
    assert!(board.archived_columns.is_empty());
    assert_eq!(board.members[0].username.as_deref(), Some("jack"));
    assert_eq!(board.labels[0].color.r, 255);
    assert_eq!(board.created_by, Some(PartialUser::new("u1")));
  }

  #[test]
  fn test_card_description_uses_service_casing() {
    let json = json!({
        "id": "card1",
        "name": "Fix login",
        "Description": {"text": "steps", "created_by": {"id": "u1"}},
        "assignees": [{"id": "u2"}],
        "labels": [{"id": "l1", "name": "bug"}],
        "comment_count": 3
    });

    let card: Card = serde_json::from_value(json).unwrap();
    let description = card.description.unwrap();
    assert_eq!(description.text, "steps");
    assert_eq!(description.created_by, Some(PartialUser::new("u1")));
    assert_eq!(card.assignees, vec![PartialUser::new("u2")]);
    assert_eq!(card.comment_count, 3);

    let lower: Card = serde_json::from_value(json!({"description": {"text": "lower"}})).unwrap();
    assert_eq!(lower.description.map(|d| d.text), Some("lower".to_string()));
  }

  #[test]
  fn test_board_tolerates_partial_colour_and_negative_position() {
    let json = json!({
        "id": "b1",
        "columns": [{"id": "c1", "name": "Icebox", "position": -1}],
        "labels": [{"id": "l1", "name": "bug", "color": {"r": 255, "g": 0, "b": 0}}]
    });

    let board: Board = serde_json::from_value(json).unwrap();

    assert_eq!(board.columns[0].position, -1);
    assert_eq!(board.labels[0].color, Color { r: 255, g: 0, b: 0, a: 0.0 });
  }

  #[test]
  fn test_card_negative_position() {
    let card: Card = serde_json::from_value(json!({"id": "card1", "position": -3})).unwrap();
    assert_eq!(card.position, -3);
  }

  #[test]
  fn test_card_input_omits_unset_fields() {
    let input = CardInput::new("Fix login", "c1").with_description("steps");

    let value = serde_json::to_value(&input).unwrap();

    assert_eq!(
      value,
      json!({"name": "Fix login", "column_id": "c1", "description": {"text": "steps"}})
    );
  }

  #[test]
  fn test_board_member_omits_missing_username() {
    let member = BoardMember {
      id: "u1".to_string(),
      role: "admin".to_string(),
      username: None,
    };

    assert_eq!(serde_json::to_value(&member).unwrap(), json!({"id": "u1", "role": "admin"}));
  }

  #[test]
  fn test_uploaded_attachment_requires_url() {
    let uploaded: UploadedAttachment = serde_json::from_value(json!({
        "id": "a1",
        "filename": "log.txt",
        "mime_type": "text/plain",
        "url": "https://app.gitkraken.com/a1"
    }))
    .unwrap();
    assert_eq!(uploaded.attachment.filename, "log.txt");
    assert_eq!(uploaded.url, "https://app.gitkraken.com/a1");

    let missing = serde_json::from_value::<UploadedAttachment>(json!({"id": "a1"}));
    assert!(missing.is_err());
  }
}
