//! # Resource Helper
//!
//! The list/get/create/edit/delete shapes shared by every resource module.
//! A resource only declares what differs: its name, its field allowlist and
//! the wire shape of its listings. URLs are built by the endpoint modules
//! through [`GloClient::endpoint`].

use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::client::GloClient;
use crate::consts::HAS_MORE_HEADER;
use crate::error::{GloError, Result};
use crate::models::Paginated;
use crate::query::{Pagination, Query};

/// A record that can be fetched with field selection.
pub trait Resource: DeserializeOwned {
  /// Name used in logs and decode errors.
  const NAME: &'static str;

  /// Optional attributes requested through `fields` query parameters.
  const FIELDS: &'static [&'static str];

  /// JSON shape of a listing body. Most resources are listed as a bare
  /// array; some arrive wrapped in an object.
  type Listing: DeserializeOwned + Into<Vec<Self>>;
}

/// Decode a JSON body into `T`, naming `what` on failure.
pub(crate) fn decode<T: DeserializeOwned>(what: &'static str, body: &[u8]) -> Result<T> {
  serde_json::from_slice(body).map_err(|source| GloError::Decode { what, source })
}

/// Encode a request payload as JSON.
pub(crate) fn encode<T: Serialize>(what: &'static str, input: &T) -> Result<Vec<u8>> {
  serde_json::to_vec(input).map_err(|e| GloError::InvalidBody {
    what,
    reason: e.to_string(),
  })
}

/// Read the `has-more` header as a boolean.
///
/// Missing or malformed values are an error rather than a default.
pub(crate) fn has_more(headers: &HeaderMap) -> Result<bool> {
  let Some(raw) = headers.get(HAS_MORE_HEADER) else {
    return Err(GloError::HeaderParse {
      header: HAS_MORE_HEADER,
      value: None,
    });
  };

  let value = String::from_utf8_lossy(raw.as_bytes());
  parse_bool(&value).ok_or_else(|| GloError::HeaderParse {
    header: HAS_MORE_HEADER,
    value: Some(value.into_owned()),
  })
}

/// Boolean literals accepted in the pagination header.
fn parse_bool(value: &str) -> Option<bool> {
  match value {
    "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
    "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
    _ => None,
  }
}

impl GloClient {
  /// GET a collection: field selection, paging, optional archived filter.
  #[instrument(skip(self, url, pagination), fields(resource = R::NAME, url = %url), level = "debug")]
  pub(crate) async fn list_resource<R: Resource>(
    &self,
    url: Url,
    pagination: &Pagination,
    archived: bool,
  ) -> Result<Paginated<R>> {
    let mut query = Query::fields(R::FIELDS);
    pagination.apply(&mut query);
    if archived {
      query.set("archived", true);
    }

    let response = self.json_request(Method::GET, url, None, Some(&query)).await?;

    let listing: R::Listing = decode(R::NAME, &response.body)?;
    let items: Vec<R> = listing.into();
    let has_more = has_more(&response.headers)?;

    debug!("Fetched {} {} record(s), has_more={}", items.len(), R::NAME, has_more);

    Ok(Paginated { items, has_more })
  }

  /// GET a single record with field selection.
  #[instrument(skip(self, url), fields(resource = R::NAME, url = %url), level = "debug")]
  pub(crate) async fn get_resource<R: Resource>(&self, url: Url) -> Result<R> {
    let query = Query::fields(R::FIELDS);

    let response = self.json_request(Method::GET, url, None, Some(&query)).await?;

    decode(R::NAME, &response.body)
  }

  /// POST a JSON payload and decode the record the service returns.
  #[instrument(skip(self, url, input), fields(url = %url), level = "debug")]
  pub(crate) async fn post_resource<I, O>(&self, what: &'static str, url: Url, input: &I) -> Result<O>
  where
    I: Serialize,
    O: DeserializeOwned,
  {
    let body = encode(what, input)?;

    let response = self.json_request(Method::POST, url, Some(body), None).await?;

    decode(what, &response.body)
  }

  /// DELETE a record, discarding any body.
  #[instrument(skip(self, url), fields(url = %url), level = "debug")]
  pub(crate) async fn delete_resource(&self, url: Url) -> Result<()> {
    self.json_request(Method::DELETE, url, None, None).await?;

    Ok(())
  }
}
