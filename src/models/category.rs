//! Transaction categories
//!
//! Transactions carry a raw category label; resolution to a known category
//! happens at read time and is total: unknown labels land in `Other`.
//! Categories expose machine-readable identifiers and display tokens only.
//! Turning those into localized names is the UI layer's job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of transaction categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Food,
    Transport,
    Housing,
    Entertainment,
    Bills,
    Shopping,
    Income,
    #[default]
    Other,
}

/// Resolved display attributes for a category
///
/// `background` is the category color with a fixed 15% opacity marker,
/// a token naming convention the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub symbol: String,
    pub color: String,
    pub background: String,
}

impl TransactionCategory {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Housing,
            Self::Entertainment,
            Self::Bills,
            Self::Shopping,
            Self::Income,
            Self::Other,
        ]
    }

    /// Resolve a raw category label
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// The long form "transportation" maps to `Transport`. Anything
    /// unrecognized, including the empty string, resolves to `Other`, so
    /// resolution never fails.
    pub fn resolve(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "transport" | "transportation" => Self::Transport,
            "housing" => Self::Housing,
            "entertainment" => Self::Entertainment,
            "bills" => Self::Bills,
            "shopping" => Self::Shopping,
            "income" => Self::Income,
            _ => Self::Other,
        }
    }

    /// Get the machine-readable identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Entertainment => "entertainment",
            Self::Bills => "bills",
            Self::Shopping => "shopping",
            Self::Income => "income",
            Self::Other => "other",
        }
    }

    /// Get the icon identifier for this category
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Food => "fork.knife",
            Self::Transport => "car.fill",
            Self::Housing => "house.fill",
            Self::Entertainment => "tv.fill",
            Self::Bills => "doc.text.fill",
            Self::Shopping => "bag.fill",
            Self::Income => "dollarsign.circle.fill",
            Self::Other => "questionmark.circle.fill",
        }
    }

    /// Get the color token for this category
    pub fn color(&self) -> &'static str {
        match self {
            Self::Food => "orange",
            Self::Transport => "blue",
            Self::Housing => "purple",
            Self::Entertainment => "pink",
            Self::Bills => "red",
            Self::Shopping => "green",
            Self::Income => "mint",
            Self::Other => "gray",
        }
    }

    /// Get the background token for this category (color at 15% opacity)
    pub fn background(&self) -> String {
        format!("{}-15", self.color())
    }

    /// Get the full display descriptor for this category
    pub fn descriptor(&self) -> CategoryDescriptor {
        CategoryDescriptor {
            symbol: self.symbol().to_string(),
            color: self.color().to_string(),
            background: self.background(),
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
