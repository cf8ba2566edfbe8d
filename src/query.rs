//! Query-string parsing.
//!
//! A raw query string such as `precision=2&foo=bar` is parsed into an ordered
//! list of decoded `(key, value)` pairs. Keys may repeat; lookups scan the list
//! in order so the first occurrence wins.
//!
//! Parsing never fails. Empty segments are skipped, a segment without `=` is a
//! key with an empty value, and bad percent escapes are kept as written.

/// Parsed query string, in the order the pairs appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Parse a raw query string. A leading `?` is ignored.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(segment), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// Parse an optional query string; `None` behaves like `""`.
    pub fn parse_opt(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    /// First value for `key` (exact, case-sensitive match).
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value for `key`, in order.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// True when the query held no non-empty segments.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of pairs, repeated keys included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Form-style decoding: `+` is a space, `%XX` is a byte.
fn decode(input: &str) -> String {
    if !input.contains(&['%', '+'][..]) {
        return input.to_string();
    }

    let spaced = input.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
