use tracing::instrument;

use crate::client::GloClient;
use crate::error::Result;
use crate::models::User;
use crate::resource::Resource;

/// Optional user attributes requested on get
pub const USER_FIELDS: &[&str] = &["created_date", "email", "name", "username"];

impl Resource for User {
  const NAME: &'static str = "user";
  const FIELDS: &'static [&'static str] = USER_FIELDS;
  type Listing = Vec<Self>;
}

impl GloClient {
  /// Get the user the access token belongs to
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self) -> Result<User> {
    self.get_resource(self.endpoint(&["user"])?).await
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::error::GloError;

  #[tokio::test]
  async fn test_get_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GloClient::builder("test_token").base_url(mock_server.uri()).build()?;

    Mock::given(method("GET"))
      .and(path("/user"))
      .and(header("authorization", "Bearer test_token"))
      .and(query_param("fields", "email"))
      .and(query_param("fields", "username"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "u1",
          "name": "Test User",
          "username": "test_user",
          "email": "test@example.com"
      })))
      .mount(&mock_server)
      .await;

    let user = client.get_user().await?;
    assert_eq!(user.id, "u1");
    assert_eq!(user.username, "test_user");
    assert_eq!(user.email, "test@example.com");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_user_unauthorized() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = GloClient::builder("invalid_token").base_url(mock_server.uri()).build()?;

    Mock::given(method("GET"))
      .and(path("/user"))
      .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"message": "Unauthorized"})))
      .mount(&mock_server)
      .await;

    let err = client.get_user().await.unwrap_err();
    assert!(matches!(err, GloError::UnsupportedStatus { code: 401, .. }));

    Ok(())
  }
}
