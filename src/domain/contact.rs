use core::fmt;

use serde::{Deserialize, Serialize};

/// One address-book entry. The `(name, number)` pair is the de facto key:
/// there is no synthetic id, equality is exact string match on both fields
/// (no trimming, case folding, or number normalization), and nothing stops
/// two identical entries from coexisting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.number)
    }
}
