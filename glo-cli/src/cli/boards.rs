//! # Boards Command
//!
//! Lists, shows, creates, renames and deletes boards.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glo_api::{Board, BoardInput, Column, GloClient};
use tabled::Tabled;

use super::PageArgs;
use crate::output::{
  OutputFormat, format_id, format_success, more_pages_hint, or_dash, render_json, render_table,
};

/// Command for board management
#[derive(Args)]
pub struct BoardsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: BoardsSubcommands,
}

impl BoardsArgs {
  /// Paging options, for subcommands that list
  pub fn page_args(&self) -> Option<&PageArgs> {
    match &self.subcommand {
      BoardsSubcommands::List { page, .. } => Some(page),
      _ => None,
    }
  }
}

/// Subcommands for the boards command
#[derive(Subcommand)]
pub enum BoardsSubcommands {
  /// List boards visible to the token
  #[command(alias = "ls")]
  List {
    #[command(flatten)]
    page: PageArgs,

    /// Include archived boards
    #[arg(long)]
    archived: bool,
  },

  /// Show a board and its columns
  Get {
    /// Board ID
    board_id: String,
  },

  /// Create a board
  Create {
    /// Board name
    name: String,
  },

  /// Rename a board
  Edit {
    /// Board ID
    board_id: String,

    /// New board name
    name: String,
  },

  /// Delete a board
  #[command(alias = "rm")]
  Delete {
    /// Board ID
    board_id: String,
  },
}

#[derive(Tabled)]
struct BoardRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Columns")]
  columns: usize,
  #[tabled(rename = "Members")]
  members: usize,
  #[tabled(rename = "Created")]
  created: String,
}

impl From<&Board> for BoardRow {
  fn from(board: &Board) -> Self {
    Self {
      id: board.id.clone(),
      name: board.name.clone(),
      columns: board.columns.len(),
      members: board.members.len(),
      created: or_dash(board.created_date.as_deref()),
    }
  }
}

#[derive(Tabled)]
pub(super) struct ColumnRow {
  #[tabled(rename = "Position")]
  position: i64,
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
}

impl From<&Column> for ColumnRow {
  fn from(column: &Column) -> Self {
    Self {
      position: column.position,
      id: column.id.clone(),
      name: column.name.clone(),
    }
  }
}

pub(super) async fn handle_boards_command(client: &GloClient, args: BoardsArgs, format: OutputFormat) -> Result<String> {
  match args.subcommand {
    BoardsSubcommands::List { page, archived } => {
      let boards = client
        .list_boards(&page.pagination(), archived)
        .await
        .context("Failed to list boards")?;

      match format {
        OutputFormat::Json => render_json(&boards),
        OutputFormat::Table => {
          let rows = boards.items.iter().map(BoardRow::from).collect();
          let mut output = render_table(rows, "No boards found");
          if let Some(hint) = more_pages_hint(boards.has_more, page.page) {
            output.push('\n');
            output.push_str(&hint);
          }
          Ok(output)
        }
      }
    }
    BoardsSubcommands::Get { board_id } => {
      let board = client
        .get_board(&board_id)
        .await
        .with_context(|| format!("Failed to fetch board {board_id}"))?;

      match format {
        OutputFormat::Json => render_json(&board),
        OutputFormat::Table => Ok(render_board(&board)),
      }
    }
    BoardsSubcommands::Create { name } => {
      let board = client
        .create_board(&BoardInput { name })
        .await
        .context("Failed to create board")?;

      render_saved(&board, "Created", format)
    }
    BoardsSubcommands::Edit { board_id, name } => {
      let board = client
        .edit_board(&board_id, &BoardInput { name })
        .await
        .with_context(|| format!("Failed to edit board {board_id}"))?;

      render_saved(&board, "Updated", format)
    }
    BoardsSubcommands::Delete { board_id } => {
      client
        .delete_board(&board_id)
        .await
        .with_context(|| format!("Failed to delete board {board_id}"))?;

      Ok(format_success(&format!("Deleted board {}", format_id(&board_id))))
    }
  }
}

fn render_saved(board: &Board, verb: &str, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Json => render_json(board),
    OutputFormat::Table => Ok(format_success(&format!(
      "{verb} board {} ({})",
      board.name,
      format_id(&board.id)
    ))),
  }
}

fn render_board(board: &Board) -> String {
  let mut columns: Vec<&Column> = board.columns.iter().collect();
  columns.sort_by_key(|c| c.position);

  let summary = render_table(vec![BoardRow::from(board)], "Board not found");
  let columns = render_table(
    columns.into_iter().map(ColumnRow::from).collect(),
    "This board has no columns",
  );

  format!("{summary}\n\nColumns\n{columns}")
}
