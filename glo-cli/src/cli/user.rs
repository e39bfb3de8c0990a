//! # User Command
//!
//! Shows the account the access token belongs to.

use anyhow::{Context, Result};
use glo_api::{GloClient, User};
use tabled::Tabled;

use crate::output::{OutputFormat, or_dash, render_json, render_table};

#[derive(Tabled)]
struct UserRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Username")]
  username: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Email")]
  email: String,
}

impl From<&User> for UserRow {
  fn from(user: &User) -> Self {
    Self {
      id: user.id.clone(),
      username: or_dash(Some(user.username.as_str())),
      name: or_dash(Some(user.name.as_str())),
      email: or_dash(Some(user.email.as_str())),
    }
  }
}

pub(super) async fn handle_user_command(client: &GloClient, format: OutputFormat) -> Result<String> {
  let user = client.get_user().await.context("Failed to fetch the current user")?;

  match format {
    OutputFormat::Json => render_json(&user),
    OutputFormat::Table => Ok(render_table(vec![UserRow::from(&user)], "No user returned")),
  }
}
