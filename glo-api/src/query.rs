//! Query string construction for field selection and pagination.

use std::fmt::Display;

use url::Url;

/// Query parameters of a single request.
///
/// `fields` may repeat; every other key holds one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  pairs: Vec<(String, String)>,
}

impl Query {
  /// Create an empty query
  pub const fn new() -> Self {
    Self { pairs: Vec::new() }
  }

  /// Create a query selecting the given optional fields, one `fields`
  /// parameter per name.
  pub fn fields(fields: &[&str]) -> Self {
    let mut query = Self::new();
    for field in fields {
      query.add("fields", field);
    }
    query
  }

  /// Append a value, keeping existing values for the same key
  pub fn add(&mut self, key: &str, value: impl Display) {
    self.pairs.push((key.to_string(), value.to_string()));
  }

  /// Replace all values of `key` with a single value
  pub fn set(&mut self, key: &str, value: impl Display) {
    self.pairs.retain(|(k, _)| k != key);
    self.add(key, value);
  }

  /// All values recorded for `key`, in insertion order
  pub fn get_all(&self, key: &str) -> Vec<&str> {
    self
      .pairs
      .iter()
      .filter(|(k, _)| k == key)
      .map(|(_, v)| v.as_str())
      .collect()
  }

  /// The first value recorded for `key`
  pub fn get(&self, key: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
  }

  /// Encode the parameters into `url`, leaving it untouched when empty.
  pub(crate) fn apply(&self, url: &mut Url) {
    if self.pairs.is_empty() {
      return;
    }
    url.query_pairs_mut().extend_pairs(self.pairs.iter());
  }
}

/// Paging and ordering options shared by every list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  /// 1-based page number
  pub page: u32,
  /// Page size
  pub per_page: u32,
  /// Request descending order (`sort=desc`)
  pub sort_desc: bool,
}

impl Default for Pagination {
  fn default() -> Self {
    Self {
      page: 1,
      per_page: 50,
      sort_desc: false,
    }
  }
}

impl Pagination {
  pub const fn new(page: u32, per_page: u32) -> Self {
    Self {
      page,
      per_page,
      sort_desc: false,
    }
  }

  /// Request descending order
  pub const fn descending(mut self) -> Self {
    self.sort_desc = true;
    self
  }

  /// Write `page`, `per_page` and, when requested, `sort=desc`.
  pub(crate) fn apply(&self, query: &mut Query) {
    query.set("page", self.page);
    query.set("per_page", self.per_page);
    if self.sort_desc {
      query.set("sort", "desc");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_fields_repeat_key() {
    let query = Query::fields(&["name", "labels"]);
    assert_eq!(query.get_all("fields"), vec!["name", "labels"]);
  }

  #[test]
  fn test_set_replaces_values() {
    let mut query = Query::new();
    query.add("page", 1);
    query.add("page", 2);
    query.set("page", 3);
    assert_eq!(query.get_all("page"), vec!["3"]);
  }

  #[test]
  fn test_apply_encodes_pairs() -> anyhow::Result<()> {
    let mut url = Url::parse("https://example.com/boards")?;
    let mut query = Query::fields(&["name"]);
    query.set("archived", true);
    query.apply(&mut url);
    assert_eq!(url.as_str(), "https://example.com/boards?fields=name&archived=true");
    Ok(())
  }

  #[test]
  fn test_empty_query_leaves_url_untouched() -> anyhow::Result<()> {
    let mut url = Url::parse("https://example.com/boards")?;
    Query::new().apply(&mut url);
    assert_eq!(url.as_str(), "https://example.com/boards");
    Ok(())
  }

  #[test]
  fn test_pagination_apply() {
    let mut query = Query::new();
    Pagination::new(2, 25).apply(&mut query);
    assert_eq!(query.get("page"), Some("2"));
    assert_eq!(query.get("per_page"), Some("25"));
    assert_eq!(query.get("sort"), None);

    Pagination::new(2, 25).descending().apply(&mut query);
    assert_eq!(query.get("sort"), Some("desc"));
  }
}
