//! # Comments Command
//!
//! Lists, adds, edits and deletes card comments.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glo_api::{Comment, CommentInput, GloClient};
use tabled::Tabled;

use super::PageArgs;
use crate::output::{
  OutputFormat, format_id, format_success, more_pages_hint, or_dash, render_json, render_table,
};

/// Command for card comments
#[derive(Args)]
pub struct CommentsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CommentsSubcommands,
}

/// Subcommands for the comments command
#[derive(Subcommand)]
pub enum CommentsSubcommands {
  /// List the comments on a card
  #[command(alias = "ls")]
  List {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    #[command(flatten)]
    page: PageArgs,
  },

  /// Comment on a card
  Add {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    /// Comment text (Markdown)
    text: String,
  },

  /// Replace the text of a comment
  Edit {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    /// Comment ID
    comment_id: String,

    /// New comment text
    text: String,
  },

  /// Delete a comment
  #[command(alias = "rm")]
  Delete {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    /// Comment ID
    comment_id: String,
  },
}

#[derive(Tabled)]
struct CommentRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Author")]
  author: String,
  #[tabled(rename = "Created")]
  created: String,
  #[tabled(rename = "Text")]
  text: String,
}

impl From<&Comment> for CommentRow {
  fn from(comment: &Comment) -> Self {
    Self {
      id: comment.id.clone(),
      author: or_dash(comment.created_by.as_ref().map(|u| u.id.as_str())),
      created: or_dash(comment.created_date.as_deref()),
      text: comment.text.clone(),
    }
  }
}

pub(super) async fn handle_comments_command(
  client: &GloClient,
  args: CommentsArgs,
  format: OutputFormat,
) -> Result<String> {
  match args.subcommand {
    CommentsSubcommands::List {
      board_id,
      card_id,
      page,
    } => {
      let comments = client
        .list_comments(&board_id, &card_id, &page.pagination())
        .await
        .with_context(|| format!("Failed to list comments on card {card_id}"))?;

      match format {
        OutputFormat::Json => render_json(&comments),
        OutputFormat::Table => {
          let rows = comments.items.iter().map(CommentRow::from).collect();
          let mut output = render_table(rows, "No comments found");
          if let Some(hint) = more_pages_hint(comments.has_more, page.page) {
            output.push('\n');
            output.push_str(&hint);
          }
          Ok(output)
        }
      }
    }
    CommentsSubcommands::Add {
      board_id,
      card_id,
      text,
    } => {
      let comment = client
        .create_comment(&board_id, &card_id, &CommentInput::new(text))
        .await
        .with_context(|| format!("Failed to comment on card {card_id}"))?;

      render_saved(&comment, "Added", format)
    }
    CommentsSubcommands::Edit {
      board_id,
      card_id,
      comment_id,
      text,
    } => {
      let comment = client
        .edit_comment(&board_id, &card_id, &comment_id, &CommentInput::new(text))
        .await
        .with_context(|| format!("Failed to edit comment {comment_id}"))?;

      render_saved(&comment, "Updated", format)
    }
    CommentsSubcommands::Delete {
      board_id,
      card_id,
      comment_id,
    } => {
      client
        .delete_comment(&board_id, &card_id, &comment_id)
        .await
        .with_context(|| format!("Failed to delete comment {comment_id}"))?;

      Ok(format_success(&format!("Deleted comment {}", format_id(&comment_id))))
    }
  }
}

fn render_saved(comment: &Comment, verb: &str, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Json => render_json(comment),
    OutputFormat::Table => Ok(format_success(&format!("{verb} comment {}", format_id(&comment.id)))),
  }
}
