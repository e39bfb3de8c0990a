//! # Cards Command
//!
//! Lists, shows, creates, edits and deletes cards.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glo_api::{Card, CardInput, GloClient, MinimizedDescription, PartialLabel, PartialUser};
use tabled::Tabled;

use super::PageArgs;
use crate::output::{
  OutputFormat, format_id, format_success, more_pages_hint, or_dash, render_json, render_table,
};

/// Command for card management
#[derive(Args)]
pub struct CardsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: CardsSubcommands,
}

/// Optional card attributes shared by create and edit
#[derive(Args, Debug, Clone, Default)]
pub struct CardFields {
  /// Card description text
  #[arg(long, short = 'd')]
  pub description: Option<String>,

  /// Position within the column
  #[arg(long)]
  pub position: Option<i64>,

  /// Due date as an ISO 8601 timestamp
  #[arg(long = "due-date")]
  pub due_date: Option<String>,

  /// Assignee user ID (repeatable)
  #[arg(long = "assignee")]
  pub assignees: Vec<String>,

  /// Label ID (repeatable)
  #[arg(long = "label")]
  pub labels: Vec<String>,
}

impl CardFields {
  /// Build the request payload; unset options stay off the wire.
  fn into_input(self, name: String, column_id: Option<String>) -> CardInput {
    CardInput {
      name,
      position: self.position,
      description: self.description.map(MinimizedDescription::new),
      column_id,
      assignees: (!self.assignees.is_empty()).then(|| self.assignees.into_iter().map(PartialUser::new).collect()),
      labels: (!self.labels.is_empty()).then(|| self.labels.into_iter().map(PartialLabel::new).collect()),
      due_date: self.due_date,
    }
  }
}

/// Subcommands for the cards command
#[derive(Subcommand)]
pub enum CardsSubcommands {
  /// List the cards of a board, or of one column
  #[command(alias = "ls")]
  List {
    /// Board ID
    board_id: String,

    /// Only list cards in this column
    #[arg(long)]
    column: Option<String>,

    #[command(flatten)]
    page: PageArgs,

    /// Include archived cards
    #[arg(long)]
    archived: bool,
  },

  /// Show a card
  Get {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,
  },

  /// Create a card in a column
  Create {
    /// Board ID
    board_id: String,

    /// Column ID
    column_id: String,

    /// Card name
    name: String,

    #[command(flatten)]
    fields: CardFields,
  },

  /// Edit a card
  Edit {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    /// Card name
    name: String,

    /// Move the card to this column
    #[arg(long)]
    column: Option<String>,

    #[command(flatten)]
    fields: CardFields,
  },

  /// Delete a card
  #[command(alias = "rm")]
  Delete {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,
  },
}

#[derive(Tabled)]
struct CardRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Column")]
  column: String,
  #[tabled(rename = "Due")]
  due: String,
  #[tabled(rename = "Comments")]
  comments: u32,
  #[tabled(rename = "Tasks")]
  tasks: String,
}

impl From<&Card> for CardRow {
  fn from(card: &Card) -> Self {
    Self {
      id: card.id.clone(),
      name: card.name.clone(),
      column: or_dash(Some(card.column_id.as_str())),
      due: or_dash(card.due_date.as_deref()),
      comments: card.comment_count,
      tasks: format!("{}/{}", card.completed_task_count, card.total_task_count),
    }
  }
}

#[derive(Tabled)]
struct FieldRow {
  #[tabled(rename = "Field")]
  field: &'static str,
  #[tabled(rename = "Value")]
  value: String,
}

fn field(field: &'static str, value: impl Into<String>) -> FieldRow {
  FieldRow {
    field,
    value: value.into(),
  }
}

fn card_details(card: &Card) -> Vec<FieldRow> {
  let assignees = card.assignees.iter().map(|u| u.id.as_str()).collect::<Vec<_>>().join(", ");
  let labels = card
    .labels
    .iter()
    .map(|l| if l.name.is_empty() { l.id.as_str() } else { l.name.as_str() })
    .collect::<Vec<_>>()
    .join(", ");

  vec![
    field("ID", card.id.as_str()),
    field("Name", card.name.as_str()),
    field("Board", or_dash(Some(card.board_id.as_str()))),
    field("Column", or_dash(Some(card.column_id.as_str()))),
    field("Position", card.position.to_string()),
    field("Description", or_dash(card.description.as_ref().map(|d| d.text.as_str()))),
    field("Assignees", or_dash(Some(assignees.as_str()))),
    field("Labels", or_dash(Some(labels.as_str()))),
    field("Due", or_dash(card.due_date.as_deref())),
    field("Comments", card.comment_count.to_string()),
    field("Attachments", card.attachment_count.to_string()),
    field("Tasks", format!("{}/{}", card.completed_task_count, card.total_task_count)),
    field("Created", or_dash(card.created_date.as_deref())),
  ]
}

pub(super) async fn handle_cards_command(client: &GloClient, args: CardsArgs, format: OutputFormat) -> Result<String> {
  match args.subcommand {
    CardsSubcommands::List {
      board_id,
      column,
      page,
      archived,
    } => {
      let pagination = page.pagination();
      let cards = match &column {
        Some(column_id) => client
          .list_cards_by_column(&board_id, column_id, &pagination, archived)
          .await
          .with_context(|| format!("Failed to list cards in column {column_id}"))?,
        None => client
          .list_cards(&board_id, &pagination, archived)
          .await
          .with_context(|| format!("Failed to list cards on board {board_id}"))?,
      };

      match format {
        OutputFormat::Json => render_json(&cards),
        OutputFormat::Table => {
          let rows = cards.items.iter().map(CardRow::from).collect();
          let mut output = render_table(rows, "No cards found");
          if let Some(hint) = more_pages_hint(cards.has_more, page.page) {
            output.push('\n');
            output.push_str(&hint);
          }
          Ok(output)
        }
      }
    }
    CardsSubcommands::Get { board_id, card_id } => {
      let card = client
        .get_card(&board_id, &card_id)
        .await
        .with_context(|| format!("Failed to fetch card {card_id}"))?;

      match format {
        OutputFormat::Json => render_json(&card),
        OutputFormat::Table => Ok(render_table(card_details(&card), "Card not found")),
      }
    }
    CardsSubcommands::Create {
      board_id,
      column_id,
      name,
      fields,
    } => {
      let input = fields.into_input(name, Some(column_id));
      let card = client
        .create_card(&board_id, &input)
        .await
        .with_context(|| format!("Failed to create card on board {board_id}"))?;

      render_saved(&card, "Created", format)
    }
    CardsSubcommands::Edit {
      board_id,
      card_id,
      name,
      column,
      fields,
    } => {
      let input = fields.into_input(name, column);
      let card = client
        .edit_card(&board_id, &card_id, &input)
        .await
        .with_context(|| format!("Failed to edit card {card_id}"))?;

      render_saved(&card, "Updated", format)
    }
    CardsSubcommands::Delete { board_id, card_id } => {
      client
        .delete_card(&board_id, &card_id)
        .await
        .with_context(|| format!("Failed to delete card {card_id}"))?;

      Ok(format_success(&format!("Deleted card {}", format_id(&card_id))))
    }
  }
}

fn render_saved(card: &Card, verb: &str, format: OutputFormat) -> Result<String> {
  match format {
    OutputFormat::Json => render_json(card),
    OutputFormat::Table => Ok(format_success(&format!(
      "{verb} card {} ({})",
      card.name,
      format_id(&card.id)
    ))),
  }
}
