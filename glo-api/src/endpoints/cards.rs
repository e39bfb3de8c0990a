//! # Glo Card Endpoints
//!
//! Card listing (per board or per column), fetching, creation, editing and
//! deletion.

use tracing::{info, instrument};

use crate::client::GloClient;
use crate::error::Result;
use crate::models::{Card, CardInput, CardsPage};
use crate::query::Pagination;
use crate::resource::Resource;

/// Optional card attributes requested on list and get
pub const CARD_FIELDS: &[&str] = &[
  "archived_date",
  "assignees",
  "attachment_count",
  "board_id",
  "column_id",
  "comment_count",
  "completed_task_count",
  "created_by",
  "created_date",
  "due_date",
  "description",
  "labels",
  "name",
  "total_task_count",
  "updated_date",
];

impl Resource for Card {
  const NAME: &'static str = "card";
  const FIELDS: &'static [&'static str] = CARD_FIELDS;
  type Listing = Vec<Self>;
}

impl GloClient {
  /// List the cards of a board
  #[instrument(skip(self), level = "debug")]
  pub async fn list_cards(&self, board_id: &str, pagination: &Pagination, archived: bool) -> Result<CardsPage> {
    self
      .list_resource(self.endpoint(&["boards", board_id, "cards"])?, pagination, archived)
      .await
  }

  /// List the cards of a single column
  #[instrument(skip(self), level = "debug")]
  pub async fn list_cards_by_column(
    &self,
    board_id: &str,
    column_id: &str,
    pagination: &Pagination,
    archived: bool,
  ) -> Result<CardsPage> {
    // The service route ends with a slash.
    self
      .list_resource(
        self.endpoint_with_trailing_slash(&["boards", board_id, "columns", column_id, "cards"])?,
        pagination,
        archived,
      )
      .await
  }

  /// Get a card by ID
  #[instrument(skip(self), level = "debug")]
  pub async fn get_card(&self, board_id: &str, card_id: &str) -> Result<Card> {
    self
      .get_resource(self.endpoint(&["boards", board_id, "cards", card_id])?)
      .await
  }

  /// Create a card on a board
  #[instrument(skip(self), level = "debug")]
  pub async fn create_card(&self, board_id: &str, input: &CardInput) -> Result<Card> {
    info!("Creating card {:?} on board {}", input.name, board_id);
    self
      .post_resource(Card::NAME, self.endpoint(&["boards", board_id, "cards"])?, input)
      .await
  }

  /// Edit a card
  #[instrument(skip(self), level = "debug")]
  pub async fn edit_card(&self, board_id: &str, card_id: &str, input: &CardInput) -> Result<Card> {
    info!("Editing card {} on board {}", card_id, board_id);
    self
      .post_resource(Card::NAME, self.endpoint(&["boards", board_id, "cards", card_id])?, input)
      .await
  }

  /// Delete a card
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_card(&self, board_id: &str, card_id: &str) -> Result<()> {
    info!("Deleting card {} from board {}", card_id, board_id);
    self
      .delete_resource(self.endpoint(&["boards", board_id, "cards", card_id])?)
      .await
  }
}
