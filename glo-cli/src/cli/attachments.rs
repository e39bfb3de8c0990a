//! # Attachments Command
//!
//! Lists card attachments and uploads files to cards.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use glo_api::{Attachment, AttachmentUpload, GloClient};
use tabled::Tabled;
use tracing::warn;

use super::PageArgs;
use crate::output::{
  OutputFormat, format_id, format_info, format_success, more_pages_hint, or_dash, render_json, render_table,
};

/// Command for card attachments
#[derive(Args)]
pub struct AttachmentsArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: AttachmentsSubcommands,
}

/// Subcommands for the attachments command
#[derive(Subcommand)]
pub enum AttachmentsSubcommands {
  /// List the attachments of a card
  #[command(alias = "ls")]
  List {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    #[command(flatten)]
    page: PageArgs,
  },

  /// Upload a file to a card
  Upload {
    /// Board ID
    board_id: String,

    /// Card ID
    card_id: String,

    /// File to upload
    file: PathBuf,

    /// Link text of the comment; defaults to the file name
    #[arg(long, short = 'd')]
    description: Option<String>,

    /// Media type of the file; inferred by the service when omitted
    #[arg(long = "mime-type")]
    mime_type: Option<String>,

    /// Only upload; the attachment expires unless linked within an hour
    #[arg(long = "no-link")]
    no_link: bool,
  },
}

#[derive(Tabled)]
struct AttachmentRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Filename")]
  filename: String,
  #[tabled(rename = "Type")]
  mime_type: String,
  #[tabled(rename = "Created")]
  created: String,
}

impl From<&Attachment> for AttachmentRow {
  fn from(attachment: &Attachment) -> Self {
    Self {
      id: attachment.id.clone(),
      filename: attachment.filename.clone(),
      mime_type: or_dash(Some(attachment.mime_type.as_str())),
      created: or_dash(attachment.created_date.as_deref()),
    }
  }
}

/// Read `path` into an upload named after the file.
fn read_upload(path: &Path, mime_type: Option<String>) -> Result<AttachmentUpload> {
  let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
  let filename = path
    .file_name()
    .map(|n| n.to_string_lossy().into_owned())
    .with_context(|| format!("{} does not name a file", path.display()))?;

  let upload = AttachmentUpload::new(filename, data);
  Ok(match mime_type {
    Some(mime_type) => upload.with_mime_type(mime_type),
    None => upload,
  })
}

pub(super) async fn handle_attachments_command(
  client: &GloClient,
  args: AttachmentsArgs,
  format: OutputFormat,
) -> Result<String> {
  match args.subcommand {
    AttachmentsSubcommands::List {
      board_id,
      card_id,
      page,
    } => {
      let attachments = client
        .list_attachments(&board_id, &card_id, &page.pagination())
        .await
        .with_context(|| format!("Failed to list attachments on card {card_id}"))?;

      match format {
        OutputFormat::Json => render_json(&attachments),
        OutputFormat::Table => {
          let rows = attachments.items.iter().map(AttachmentRow::from).collect();
          let mut output = render_table(rows, "No attachments found");
          if let Some(hint) = more_pages_hint(attachments.has_more, page.page) {
            output.push('\n');
            output.push_str(&hint);
          }
          Ok(output)
        }
      }
    }
    AttachmentsSubcommands::Upload {
      board_id,
      card_id,
      file,
      description,
      mime_type,
      no_link,
    } => {
      let upload = read_upload(&file, mime_type)?;
      let description = description.unwrap_or_else(|| upload.filename.clone());

      if no_link {
        warn!("Uploading without a link; the attachment expires in one hour");
        let uploaded = client
          .upload_attachment(&board_id, &card_id, upload)
          .await
          .with_context(|| format!("Failed to upload {}", file.display()))?;

        return match format {
          OutputFormat::Json => render_json(&uploaded),
          OutputFormat::Table => Ok(format!(
            "{}\n{}",
            format_success(&format!(
              "Uploaded {} ({})",
              uploaded.attachment.filename,
              format_id(&uploaded.attachment.id)
            )),
            format_info(&format!("Link {} from the card within an hour to keep it", uploaded.url))
          )),
        };
      }

      let created = client
        .create_attachment(&board_id, &card_id, upload, &description)
        .await
        .with_context(|| format!("Failed to attach {}", file.display()))?;

      match format {
        OutputFormat::Json => render_json(&created),
        OutputFormat::Table => Ok(format_success(&format!(
          "Attached {} ({}) and linked it from comment {}",
          created.attachment.attachment.filename,
          format_id(&created.attachment.attachment.id),
          format_id(&created.comment.id)
        ))),
      }
    }
  }
}
