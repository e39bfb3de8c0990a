//! # Glo Board Endpoints
//!
//! Creating, editing, listing, fetching and deleting boards.

use tracing::{info, instrument};

use crate::client::GloClient;
use crate::error::Result;
use crate::models::{Board, BoardInput, BoardsPage};
use crate::query::Pagination;
use crate::resource::Resource;

/// Optional board attributes requested on list and get
pub const BOARD_FIELDS: &[&str] = &[
  "archived_columns",
  "archived_date",
  "columns",
  "created_by",
  "created_date",
  "invited_members",
  "labels",
  "members",
  "name",
];

impl Resource for Board {
  const NAME: &'static str = "board";
  const FIELDS: &'static [&'static str] = BOARD_FIELDS;
  type Listing = Vec<Self>;
}

impl GloClient {
  /// Create a board
  #[instrument(skip(self), level = "debug")]
  pub async fn create_board(&self, input: &BoardInput) -> Result<Board> {
    info!("Creating board {:?}", input.name);
    self.post_resource(Board::NAME, self.endpoint(&["boards"])?, input).await
  }

  /// Rename a board
  #[instrument(skip(self), level = "debug")]
  pub async fn edit_board(&self, board_id: &str, input: &BoardInput) -> Result<Board> {
    info!("Editing board {}", board_id);
    self
      .post_resource(Board::NAME, self.endpoint(&["boards", board_id])?, input)
      .await
  }

  /// List boards visible to the token owner
  ///
  /// # Errors
  ///
  /// Besides transport and status errors, fails when the `has-more` header
  /// is missing or not a boolean.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_boards(&self, pagination: &Pagination, archived: bool) -> Result<BoardsPage> {
    self.list_resource(self.endpoint(&["boards"])?, pagination, archived).await
  }

  /// Get a board by ID
  #[instrument(skip(self), level = "debug")]
  pub async fn get_board(&self, board_id: &str) -> Result<Board> {
    self.get_resource(self.endpoint(&["boards", board_id])?).await
  }

  /// Delete a board
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_board(&self, board_id: &str) -> Result<()> {
    info!("Deleting board {}", board_id);
    self.delete_resource(self.endpoint(&["boards", board_id])?).await
  }
}
