//! # Columns Command
//!
//! Creates, edits and deletes board columns.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glo_api::{Column, ColumnInput, GloClient};

use super::boards::ColumnRow;
use crate::output::{OutputFormat, format_id, format_success, render_json, render_table};

/// Command for column management
#[derive(Args)]
pub struct ColumnsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ColumnsSubcommands,
}

/// Subcommands for the columns command
#[derive(Subcommand)]
pub enum ColumnsSubcommands {
  /// Add a column to a board
  Create {
    /// Board ID
    board_id: String,

    /// Column name
    name: String,

    /// Position within the board; appended when omitted
    #[arg(long)]
    position: Option<i64>,
  },

  /// Rename or move a column
  Edit {
    /// Board ID
    board_id: String,

    /// Column ID
    column_id: String,

    /// Column name
    name: String,

    /// Position within the board
    #[arg(long)]
    position: i64,
  },

  /// Delete a column
  #[command(alias = "rm")]
  Delete {
    /// Board ID
    board_id: String,

    /// Column ID
    column_id: String,
  },
}

pub(super) async fn handle_columns_command(
  client: &GloClient,
  args: ColumnsArgs,
  format: OutputFormat,
) -> Result<String> {
  match args.subcommand {
    ColumnsSubcommands::Create {
      board_id,
      name,
      position,
    } => {
      let column = client
        .create_column(&board_id, &ColumnInput { name, position })
        .await
        .with_context(|| format!("Failed to create column on board {board_id}"))?;

      render_saved(&column, "Created", format)
    }
    ColumnsSubcommands::Edit {
      board_id,
      column_id,
      name,
      position,
    } => {
      let column = client
        .edit_column(&board_id, &column_id, &name, position)
        .await
        .with_context(|| format!("Failed to edit column {column_id}"))?;

      render_saved(&column, "Updated", format)
    }
    ColumnsSubcommands::Delete { board_id, column_id } => {
      client
        .delete_column(&board_id, &column_id)
        .await
        .with_context(|| format!("Failed to delete column {column_id}"))?;

      Ok(format_success(&format!("Deleted column {}", format_id(&column_id))))
    }
  }
}

fn render_saved(column: &Column, verb: &str, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Json => render_json(column),
    OutputFormat::Table => {
      let table = render_table(vec![ColumnRow::from(column)], "No column returned");
      Ok(format!(
        "{}\n{table}",
        format_success(&format!("{verb} column {}", column.name))
      ))
    }
  }
}
