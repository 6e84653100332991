//! Query-string builder for the hosted data API.
//!
//! The service exposes tables through a REST dialect where filters ride
//! in the query string: `column=eq.value`, `tags=cs.{tag}`,
//! `or=(a.ilike.*q*,b.ilike.*q*)`, `order=col.desc.nullsfirst`,
//! `limit`/`offset`. Filters with empty values are omitted entirely, so
//! an untouched filter widget adds nothing to the request.

/// Sort direction for [`Query::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Placement of null values within an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nulls {
    First,
    Last,
}

impl Nulls {
    fn as_str(self) -> &'static str {
        match self {
            Self::First => "nullsfirst",
            Self::Last => "nullslast",
        }
    }
}

/// Builder for one request's query string.
///
/// Parameters render in call order; values are percent-encoded with the
/// dialect's operator characters left literal.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
    order: Vec<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict returned columns, e.g. `"id,slug,title"`.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// Equality filter: `column=eq.value`. Empty values are omitted.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.params.push((column.into(), format!("eq.{value}")));
        }
        self
    }

    /// Array-contains filter: `column=cs.{value}`. Empty values are omitted.
    pub fn contains(mut self, column: &str, value: &str) -> Self {
        if !value.is_empty() {
            self.params.push((column.into(), format!("cs.{{{value}}}")));
        }
        self
    }

    /// Case-insensitive substring match across several columns:
    /// `or=(a.ilike.*needle*,b.ilike.*needle*)`. An empty needle adds no
    /// parameter at all.
    pub fn ilike_any(mut self, columns: &[&str], needle: &str) -> Self {
        if needle.is_empty() || columns.is_empty() {
            return self;
        }
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| format!("{column}.ilike.*{needle}*"))
            .collect();
        self.params
            .push(("or".into(), format!("({})", clauses.join(","))));
        self
    }

    /// Append an ordering term. Repeated calls join with commas.
    pub fn order(mut self, column: &str, direction: Direction, nulls: Option<Nulls>) -> Self {
        let mut term = format!("{column}.{}", direction.as_str());
        if let Some(nulls) = nulls {
            term.push('.');
            term.push_str(nulls.as_str());
        }
        self.order.push(term);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Limit/offset for a 1-based page of `page_size` rows.
    pub fn page(self, page: u32, page_size: u32) -> Self {
        self.limit(page_size)
            .offset(page.saturating_sub(1) * page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.order.is_empty() && self.limit.is_none() && self.offset.is_none()
    }

    /// Render the query string, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", encode::component(key), encode::component(value)))
            .collect();
        if !self.order.is_empty() {
            parts.push(format!("order={}", encode::component(&self.order.join(","))));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        parts.join("&")
    }
}

// Percent-encoding helper
mod encode {
    /// Encode a query component, leaving the dialect's operator
    /// characters (`. * , ( ) { }`) and unreserved characters literal.
    pub fn component(raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for byte in raw.bytes() {
            match byte {
                b'A'..=b'Z'
                | b'a'..=b'z'
                | b'0'..=b'9'
                | b'-'
                | b'_'
                | b'.'
                | b'~'
                | b'{'
                | b'}'
                | b'('
                | b')'
                | b'*'
                | b','
                | b':' => out.push(byte as char),
                _ => {
                    out.push('%');
                    out.push_str(&format!("{byte:02X}"));
                }
            }
        }
        out
    }
}
