use serde::Deserialize;

/// Query parameters of the dispatch endpoint. Both are optional on the
/// wire; an absent parameter behaves like the empty string.
#[derive(Debug, Deserialize)]
pub struct DispatchDto {
  pub action: Option<String>,
  pub id: Option<String>,
}
