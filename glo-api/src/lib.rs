//! # Glo API Client
//!
//! Typed client for the GitKraken Glo boards REST API: boards, columns,
//! cards, comments, attachments and the authenticated user.
//!
//! Every operation is one HTTP round trip made with a bearer token. List
//! operations return a [`Paginated`] page whose `has_more` flag is read from
//! the `has-more` response header.
//!
//! ```no_run
//! use glo_api::{GloClient, Pagination};
//!
//! # async fn example() -> glo_api::Result<()> {
//! let client = GloClient::new("my-token")?;
//! let boards = client.list_boards(&Pagination::new(1, 20), false).await?;
//! for board in &boards.items {
//!   println!("{} {}", board.id, board.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod query;
pub mod resource;

// Re-export the client
pub use client::{GloClient, GloClientBuilder};
// Re-export endpoint helpers
pub use endpoints::attachments::{ATTACHMENT_FIELDS, attachment_link};
pub use endpoints::boards::BOARD_FIELDS;
pub use endpoints::cards::CARD_FIELDS;
pub use endpoints::comments::{COMMENT_FIELDS, CommentsEnvelope};
pub use endpoints::users::USER_FIELDS;
pub use error::{GloError, Result};
// Re-export models
pub use models::{
  Attachment, AttachmentUpload, AttachmentsPage, Board, BoardInput, BoardMember, BoardsPage, Card, CardInput,
  CardsPage, Color, Column, ColumnInput, Comment, CommentInput, CommentsPage, CreatedAttachment, Description, Label,
  MinimizedDescription, Paginated, PartialLabel, PartialUser, UploadedAttachment, User,
};
pub use query::{Pagination, Query};
pub use resource::Resource;
