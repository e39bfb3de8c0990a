//! Helpers for mounting Glo endpoints on a wiremock server

use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Token used by clients created in tests
pub const TEST_TOKEN: &str = "test_token";

/// Mount a `200` JSON response for `verb path`, requiring the test token
pub async fn mount_json(server: &MockServer, verb: &str, route: &str, body: Value) {
  Mock::given(method(verb))
    .and(path(route))
    .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
    .respond_with(ResponseTemplate::new(200).set_body_json(body))
    .mount(server)
    .await;
}

/// Mount a list page for `GET path`.
///
/// `has_more` is the raw header value; `None` leaves the header out.
pub async fn mount_page(server: &MockServer, route: &str, has_more: Option<&str>, body: Value) {
  let mut template = ResponseTemplate::new(200).set_body_json(body);
  if let Some(value) = has_more {
    template = template.insert_header("has-more", value);
  }

  Mock::given(method("GET"))
    .and(path(route))
    .respond_with(template)
    .mount(server)
    .await;
}

/// Mount an empty response with the given status for any method on `path`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
  Mock::given(path(route))
    .respond_with(ResponseTemplate::new(status))
    .mount(server)
    .await;
}

/// Responds with the request body as a `200` JSON response
pub struct EchoBody;

impl Respond for EchoBody {
  fn respond(&self, request: &Request) -> ResponseTemplate {
    ResponseTemplate::new(200)
      .insert_header("content-type", "application/json")
      .set_body_bytes(request.body.clone())
  }
}

/// Mount a responder that echoes the JSON body of `verb path` back
pub async fn mount_echo(server: &MockServer, verb: &str, route: &str) {
  Mock::given(method(verb))
    .and(path(route))
    .respond_with(EchoBody)
    .mount(server)
    .await;
}
