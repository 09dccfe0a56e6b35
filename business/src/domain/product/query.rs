//! Translation of list request parameters into a store filter and a
//! pagination window.

use super::model::Product;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest skip a store can be asked for; MongoDB encodes it as a signed
/// 64-bit integer.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Raw list parameters exactly as they arrived on the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListProductsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Case-insensitive predicate over one text field.
///
/// `Exact` must consume the whole field value, `Contains` may match anywhere
/// inside it. The value is always matched literally.
#[derive(Debug, Clone, PartialEq)]
pub enum TextMatch {
    Exact(String),
    Contains(String),
}

impl TextMatch {
    /// Regex source for stores that filter with patterns. Metacharacters in
    /// the user value are escaped; callers apply case-insensitivity.
    pub fn pattern(&self) -> String {
        match self {
            TextMatch::Exact(value) => format!("^{}$", regex::escape(value)),
            TextMatch::Contains(value) => regex::escape(value),
        }
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        let candidate = candidate.to_lowercase();
        match self {
            TextMatch::Exact(value) => candidate == value.to_lowercase(),
            TextMatch::Contains(value) => candidate.contains(&value.to_lowercase()),
        }
    }
}

/// Structural product filter; all present predicates must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<TextMatch>,
    pub name: Option<TextMatch>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.name.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|m| m.is_match(&product.category));
        let name_ok = self.name.as_ref().is_none_or(|m| m.is_match(&product.name));
        category_ok && name_ok
    }
}

/// Page number and size echoed back in the list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Documents to pass over, saturated at [`MAX_SKIP`].
    pub fn skip(&self) -> u64 {
        (u64::from(self.page - 1) * u64::from(self.limit)).min(MAX_SKIP)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            skip: self.skip(),
            limit: self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Slice of the filtered collection a store should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedQuery {
    pub filter: ProductFilter,
    pub pagination: Pagination,
}

pub fn translate(query: &ListProductsQuery) -> TranslatedQuery {
    let filter = ProductFilter {
        category: non_empty(&query.category).map(|c| TextMatch::Exact(c.to_string())),
        name: non_empty(&query.search).map(|s| TextMatch::Contains(s.to_string())),
    };

    let pagination = Pagination {
        page: coerce_positive(query.page.as_deref(), DEFAULT_PAGE),
        limit: coerce_positive(query.limit.as_deref(), DEFAULT_LIMIT),
    };

    TranslatedQuery { filter, pagination }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Reads `raw` as an integer prefix, falling back to `default` when there is
/// nothing numeric to read and clamping everything else into `1..=u32::MAX`.
fn coerce_positive(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(parse_int_prefix) {
        None => default,
        Some(n) if n < 1 => 1,
        Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
    }
}

/// Integer-prefix parsing: skips leading whitespace and an optional sign,
/// then reads digits until the first non-digit. `"2.9"` reads as 2 and
/// `"12abc"` as 12. Returns `None` when no digit follows. Saturates on
/// overflow.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}
