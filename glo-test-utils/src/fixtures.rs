//! Canned Glo API records

use serde_json::{Value, json};

/// A board with one column, one member and one label
pub fn board(id: &str, name: &str) -> Value {
  json!({
    "id": id,
    "name": name,
    "columns": [{"id": "c1", "name": "Todo", "position": 0}],
    "archived_columns": [],
    "invited_members": [],
    "members": [{"id": "u1", "role": "owner", "username": "owner"}],
    "labels": [{"id": "l1", "name": "bug", "color": {"r": 255, "g": 0, "b": 0, "a": 1.0}}],
    "created_date": "2019-01-01T00:00:00.000Z",
    "created_by": {"id": "u1"}
  })
}

/// A card in column `c1` of `board_id`
pub fn card(id: &str, board_id: &str, name: &str) -> Value {
  json!({
    "id": id,
    "name": name,
    "position": 0,
    "board_id": board_id,
    "column_id": "c1",
    "Description": {"text": "details", "created_by": {"id": "u1"}},
    "assignees": [{"id": "u1"}],
    "labels": [{"id": "l1", "name": "bug"}],
    "comment_count": 1,
    "attachment_count": 0,
    "completed_task_count": 0,
    "total_task_count": 2,
    "created_by": {"id": "u1"}
  })
}

/// A comment on `card_id`
pub fn comment(id: &str, card_id: &str, text: &str) -> Value {
  json!({
    "id": id,
    "card_id": card_id,
    "board_id": "b1",
    "text": text,
    "created_by": {"id": "u1"}
  })
}

/// An attachment record as listed
pub fn attachment(id: &str, filename: &str) -> Value {
  json!({
    "id": id,
    "filename": filename,
    "mime_type": "text/plain",
    "created_by": {"id": "u1"}
  })
}

/// The authenticated user
pub fn user() -> Value {
  json!({
    "id": "u1",
    "name": "Test User",
    "username": "test_user",
    "email": "test@example.com"
  })
}
