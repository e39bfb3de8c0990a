//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the glo tool. Every
//! handler renders its result to a string; [`handle_cli`] prints it.

mod attachments;
mod boards;
mod cards;
mod columns;
mod comments;
mod user;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Args, Parser, Subcommand};
use glo_api::{GloClient, Pagination};
use tracing::debug;

use crate::clients::create_glo_runtime_and_client;
use crate::config::GloConfig;
use crate::consts::DEFAULT_TIMEOUT_SECS;
use crate::output::{ColorMode, OutputFormat, print_output};

/// Top-level CLI command for the glo tool
#[derive(Parser)]
#[command(name = "glo")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Manage GitKraken Glo boards from the terminal")]
#[command(
  long_about = "glo talks to the GitKraken Glo REST API.\n\n\
        It lists, creates, edits and deletes boards, columns, cards, comments\n\
        and attachments using a personal access token."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Personal access token (defaults to $GLO_TOKEN, then $TOKEN)
  #[arg(long, global = true)]
  pub token: Option<String>,

  /// API base address (defaults to $GLO_BASE_URL, then the hosted API)
  #[arg(long = "base-url", global = true)]
  pub base_url: Option<String>,

  /// Request timeout in seconds
  #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
  pub timeout: u64,

  /// Print results as pretty JSON instead of tables
  #[arg(long, global = true)]
  pub json: bool,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the glo tool
#[derive(Subcommand)]
pub enum Commands {
  /// Show the authenticated user
  #[command(alias = "me")]
  User,

  /// Board management
  #[command(long_about = "List, inspect, create, rename and delete boards.")]
  #[command(alias = "b")]
  Boards(boards::BoardsArgs),

  /// Column management
  #[command(long_about = "Create, edit and delete the columns of a board.\n\n\
            Columns are listed as part of `glo boards get`.")]
  #[command(alias = "col")]
  Columns(columns::ColumnsArgs),

  /// Card management
  #[command(alias = "c")]
  Cards(cards::CardsArgs),

  /// Card comments
  Comments(comments::CommentsArgs),

  /// Card attachments
  #[command(long_about = "List and upload card attachments.\n\n\
            Uploaded files expire after an hour unless a comment or the card description\n\
            links to them. `glo attachments upload` posts that comment for you unless\n\
            --no-link is given.")]
  #[command(alias = "att")]
  Attachments(attachments::AttachmentsArgs),
}

impl Commands {
  /// Run the command against `client` and render its result.
  pub async fn run(self, client: &GloClient, format: OutputFormat) -> Result<String> {
    match self {
      Self::User => user::handle_user_command(client, format).await,
      Self::Boards(args) => boards::handle_boards_command(client, args, format).await,
      Self::Columns(args) => columns::handle_columns_command(client, args, format).await,
      Self::Cards(args) => cards::handle_cards_command(client, args, format).await,
      Self::Comments(args) => comments::handle_comments_command(client, args, format).await,
      Self::Attachments(args) => attachments::handle_attachments_command(client, args, format).await,
    }
  }
}

/// Paging options shared by list subcommands
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
  /// Page number, starting at 1
  #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
  pub page: u32,

  /// Number of records per page
  #[arg(long = "per-page", default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
  pub per_page: u32,

  /// Sort in descending order
  #[arg(long)]
  pub desc: bool,
}

impl PageArgs {
  pub const fn pagination(&self) -> Pagination {
    let pagination = Pagination::new(self.page, self.per_page);
    if self.desc { pagination.descending() } else { pagination }
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config = GloConfig::resolve(cli.token, cli.base_url, cli.timeout)?;
  debug!("Resolved configuration: {:?}", config);

  let (rt, client) = create_glo_runtime_and_client(&config)?;
  let format = OutputFormat::from_json_flag(cli.json);

  let output = rt.block_on(cli.command.run(&client, format))?;
  print_output(&output);

  Ok(())
}
