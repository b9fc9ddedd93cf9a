use std::fmt;

use serde::{Deserialize, Serialize};

/// Naming pattern for item columns, e.g. `BFI_{:02d}` or `LOT_R_{}`.
///
/// Exactly one placeholder is allowed. Supported forms are `{}`, `{:d}`
/// and `{:0Nd}` (zero-padded to `N` digits).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemFormat {
    head: String,
    tail: String,
    width: usize,
}

impl ItemFormat {
    pub fn parse(pattern: &str) -> Result<Self, String> {
        let open = pattern
            .find('{')
            .ok_or_else(|| format!("'{pattern}' has no index placeholder"))?;
        let close = pattern[open..]
            .find('}')
            .map(|i| i + open)
            .ok_or_else(|| format!("'{pattern}' has an unterminated placeholder"))?;

        let head = &pattern[..open];
        let tail = &pattern[close + 1..];
        if head.contains('}') || tail.contains(['{', '}']) {
            return Err(format!("'{pattern}' must contain exactly one placeholder"));
        }

        let width = match &pattern[open + 1..close] {
            "" | ":d" => 0,
            placeholder if placeholder.starts_with(":0") && placeholder.ends_with('d') && placeholder.len() > 3 => {
                placeholder[2..placeholder.len() - 1]
                    .parse::<usize>()
                    .map_err(|_| format!("'{pattern}' has an invalid padding width"))?
            }
            placeholder => {
                return Err(format!("unsupported placeholder '{{{placeholder}}}' in '{pattern}'"));
            }
        };

        Ok(Self {
            head: head.to_string(),
            tail: tail.to_string(),
            width,
        })
    }

    pub fn new(head: impl Into<String>, width: usize, tail: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
            width,
        }
    }

    /// `{head}{index:0width}` with no suffix.
    pub fn padded(head: impl Into<String>, width: usize) -> Self {
        Self::new(head, width, "")
    }

    pub fn head(&self) -> &str {
        &self.head
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Zero-padding width; 0 means unpadded.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn column_name(&self, index: u32) -> String {
        format!("{}{:0width$}{}", self.head, index, self.tail, width = self.width)
    }

    /// Inverse of [`column_name`](Self::column_name): the index a column
    /// name was rendered from, if any.
    pub fn index_of(&self, name: &str) -> Option<u32> {
        let digits = name.strip_prefix(&self.head)?.strip_suffix(&self.tail)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index = digits.parse::<u32>().ok()?;
        (self.column_name(index) == name).then_some(index)
    }
}

impl fmt::Display for ItemFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width > 0 {
            write!(f, "{}{{:0{}d}}{}", self.head, self.width, self.tail)
        } else {
            write!(f, "{}{{}}{}", self.head, self.tail)
        }
    }
}

impl TryFrom<String> for ItemFormat {
    type Error = String;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::parse(&pattern)
    }
}

impl From<ItemFormat> for String {
    fn from(format: ItemFormat) -> Self {
        format.to_string()
    }
}

/// An item reference resolved to a concrete column name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemColumn {
    pub index: u32,
    pub name: String,
}
