//! Screens that can live on the sheet's inner stack.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One screen of the inner stack. Only the displayed content differs between
/// variants, so they share a single type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationEntry {
    #[default]
    Page1,
    Page2,
    Page3,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page {0:?} (expected page1, page2 or page3)")]
pub struct ParseEntryError(pub String);

impl NavigationEntry {
    pub fn title(self) -> &'static str {
        match self {
            Self::Page1 => "Page 1",
            Self::Page2 => "Page 2",
            Self::Page3 => "Page 3",
        }
    }

    pub fn body(self) -> &'static [&'static str] {
        match self {
            Self::Page1 => &[
                "This is the root of the sheet's own navigation stack.",
                "Screens pushed from here stay inside the sheet;",
                "the screen behind it never changes.",
            ],
            Self::Page2 => &[
                "A second screen, pushed on top of Page 1.",
                "Going back returns to Page 1 instead of closing the sheet.",
            ],
            Self::Page3 => &[
                "The deepest screen of the sample flow.",
                "Go back twice to reach the root, once more to close.",
            ],
        }
    }

    /// The entry the primary action on this screen leads to.
    pub fn next(self) -> Option<NavigationEntry> {
        match self {
            Self::Page1 => Some(Self::Page2),
            Self::Page2 => Some(Self::Page3),
            Self::Page3 => None,
        }
    }
}

impl fmt::Display for NavigationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for NavigationEntry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "page1" | "1" => Ok(Self::Page1),
            "page2" | "2" => Ok(Self::Page2),
            "page3" | "3" => Ok(Self::Page3),
            _ => Err(ParseEntryError(s.to_string())),
        }
    }
}
