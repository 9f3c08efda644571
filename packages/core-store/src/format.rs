//! Format hints for on-disk encoding.

use std::borrow::Cow;
use std::fmt;

/// A hint about the encoding of a store file.
///
/// Codecs use the format to decide whether they can handle a file, and
/// stores use it to pick the file extension. MIME-type-like strings are used
/// for familiarity, but any string a codec understands works.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format(pub Cow<'static, str>);

impl Format {
    /// JSON format (`application/json`)
    pub const JSON: Format = Format(Cow::Borrowed("application/json"));

    pub fn new(s: impl Into<String>) -> Self {
        Format(Cow::Owned(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_json(&self) -> bool {
        self == &Self::JSON
    }

    /// File extension used for store files in this format.
    ///
    /// Unknown formats fall back to `dat`.
    pub fn extension(&self) -> &'static str {
        if self.is_json() {
            "json"
        } else {
            "dat"
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
