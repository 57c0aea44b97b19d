use async_trait::async_trait;

use crate::error::Result;
use crate::member::Roster;

/// The trait every roster backend implements.
///
/// A source only hands back the raw text of the roster. Deciding whether
/// that text counts as "no data" and turning it into members is left to the
/// caller through [`Roster::parse`], so handlers can tell an empty store
/// apart from a broken one.
#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Read the current roster contents.
    async fn load(&self) -> Result<String>;

    /// Read and parse the current roster in one step.
    async fn load_roster(&self) -> Result<Roster> {
        let text = self.load().await?;
        Roster::parse(&text)
    }
}
