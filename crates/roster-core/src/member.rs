use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

// ---------------------------------------------------------------------------
// MemberId
// ---------------------------------------------------------------------------

/// A validated member identifier: a non-empty string of ASCII digits.
///
/// The raw text is kept as-is (leading zeros included) because roster ids
/// are compared as strings, not as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Validate a raw id. Returns `None` for empty or non-numeric input.
    pub fn new(raw: &str) -> Option<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------------

/// One roster entry.
///
/// Fields other than `id` and `name` are carried through untouched so the
/// full record can be handed back to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Project down to the public `{id, name}` pair.
    pub fn summary(&self) -> MemberSummary {
        MemberSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The `{id, name}` projection returned by single-member lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// The ordered list of members read from the backing store.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Parse raw roster text.
    ///
    /// Blank input is reported as [`RosterError::Empty`]; anything that is
    /// not an array of objects with string `id` and `name` fields is a
    /// [`RosterError::Parse`].
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(RosterError::Empty);
        }
        let members: Vec<Member> = serde_json::from_str(text)?;
        Ok(Self { members })
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// First member whose id matches, in file order.
    pub fn find(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id.as_str())
    }

    pub fn contains(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| m.id == id.as_str())
    }

    /// Every member except those with the given id, order preserved.
    pub fn excluding(&self, id: &MemberId) -> Vec<Member> {
        self.members
            .iter()
            .filter(|m| m.id != id.as_str())
            .cloned()
            .collect()
    }
}
