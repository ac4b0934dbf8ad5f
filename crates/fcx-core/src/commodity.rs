//! Commodity names.
//!
//! A commodity is an opaque label ("fresh_fuel", "spent_fuel", …) under which
//! requests and bids are paired.  The simulator assigns each commodity a
//! solution priority at scenario load; the core only ever compares names.

use std::fmt;

/// A traded good, identified by name.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Commodity(String);

impl Commodity {
    pub fn new(name: impl Into<String>) -> Self {
        Commodity(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Commodity {
    fn from(s: &str) -> Self {
        Commodity(s.to_owned())
    }
}

impl From<String> for Commodity {
    fn from(s: String) -> Self {
        Commodity(s)
    }
}
