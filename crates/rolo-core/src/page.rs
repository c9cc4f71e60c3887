//! Pagination — permissive `page`/`limit` handling for list queries.
//!
//! Query values are parsed best-effort and never rejected. Anything absent,
//! non-numeric, or below 1 falls back to the documented defaults, so the
//! resulting offset is never negative.

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// A validated limit/offset window over the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  pub limit:  i64,
  pub offset: i64,
}

impl Page {
  /// Build a window from raw query values: `offset = (page - 1) * limit`.
  pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
    let page  = parse_positive(page).unwrap_or(DEFAULT_PAGE);
    let limit = parse_positive(limit).unwrap_or(DEFAULT_LIMIT);
    Page { limit, offset: (page - 1) * limit }
  }
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
  raw
    .and_then(|s| s.trim().parse::<i64>().ok())
    .filter(|n| *n >= 1)
}
