//! # Glo Column Endpoints
//!
//! Columns are listed as part of their board; the service only exposes
//! create, edit and delete for them.

use tracing::{info, instrument};

use crate::client::GloClient;
use crate::error::Result;
use crate::models::{Column, ColumnInput};

impl GloClient {
  /// Create a column on a board
  #[instrument(skip(self), level = "debug")]
  pub async fn create_column(&self, board_id: &str, input: &ColumnInput) -> Result<Column> {
    info!("Creating column {:?} on board {}", input.name, board_id);
    self
      .post_resource("column", self.endpoint(&["boards", board_id, "columns"])?, input)
      .await
  }

  /// Rename or move a column
  #[instrument(skip(self), level = "debug")]
  pub async fn edit_column(&self, board_id: &str, column_id: &str, name: &str, position: i64) -> Result<Column> {
    let input = ColumnInput {
      name: name.to_string(),
      position: Some(position),
    };
    self
      .post_resource("column", self.endpoint(&["boards", board_id, "columns", column_id])?, &input)
      .await
  }

  /// Delete a column
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_column(&self, board_id: &str, column_id: &str) -> Result<()> {
    info!("Deleting column {} from board {}", column_id, board_id);
    self
      .delete_resource(self.endpoint(&["boards", board_id, "columns", column_id])?)
      .await
  }
}
