//! ==============================================================================
//! category.rs - content categories and their endpoint table
//! ==============================================================================
//!
//! purpose:
//!     the four content verticals served by the rate-limited api. each one
//!     maps to a fixed backend path plus the copy shown above the prompt.
//!
//! relationships:
//!     - used by: state (active view), configure (target endpoint)
//!     - used by: dashboard (tab navigation, select options)
//!
//! ==============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

// ==============================================================================
// types
// ==============================================================================

/// content category selectable from the navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Trivia,
    Travel,
    Sports,
    Movies,
}

/// static display and routing metadata for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// path appended to the api base, always starts with '/'
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
}

// ==============================================================================
// endpoint table
// ==============================================================================

const TRIVIA: EndpointDescriptor = EndpointDescriptor {
    path: "/trivia",
    title: "Trivia Generator",
    description: "Discover fascinating facts about anything.",
    placeholder: "Enter a topic...",
};

const TRAVEL: EndpointDescriptor = EndpointDescriptor {
    path: "/travel",
    title: "Travel Guide",
    description: "Plan your next adventure.",
    placeholder: "Enter a destination...",
};

const SPORTS: EndpointDescriptor = EndpointDescriptor {
    path: "/sports",
    title: "Sports Center",
    description: "Sports facts and history.",
    placeholder: "Enter a sport...",
};

const MOVIES: EndpointDescriptor = EndpointDescriptor {
    path: "/movies",
    title: "Movie Suggestions",
    description: "Find a movie to watch.",
    placeholder: "Enter a genre or mood...",
};

impl Category {
    /// navigation order
    pub const ALL: [Category; 4] = [
        Category::Trivia,
        Category::Travel,
        Category::Sports,
        Category::Movies,
    ];

    pub fn descriptor(self) -> &'static EndpointDescriptor {
        match self {
            Category::Trivia => &TRIVIA,
            Category::Travel => &TRAVEL,
            Category::Sports => &SPORTS,
            Category::Movies => &MOVIES,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Category::Trivia => "trivia",
            Category::Travel => "travel",
            Category::Sports => "sports",
            Category::Movies => "movies",
        }
    }

    /// label used on the navigation buttons
    pub fn nav_label(self) -> &'static str {
        match self {
            Category::Trivia => "🧠 Trivia",
            Category::Travel => "✈️ Travel",
            Category::Sports => "🏅 Sports",
            Category::Movies => "🎬 Movies",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ClientError::UnknownCategory(s.to_string()))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_paths_match_ids() {
        for category in Category::ALL {
            assert_eq!(category.descriptor().path, format!("/{}", category.id()));
        }
    }

    #[test]
    fn test_descriptor_copy() {
        let travel = Category::Travel.descriptor();
        assert_eq!(travel.title, "Travel Guide");
        assert_eq!(travel.description, "Plan your next adventure.");
        assert_eq!(travel.placeholder, "Enter a destination...");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("movies".parse::<Category>().unwrap(), Category::Movies);
        assert!(matches!(
            "weather".parse::<Category>(),
            Err(ClientError::UnknownCategory(ref s)) if s == "weather"
        ));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Sports).unwrap();
        assert_eq!(json, "\"sports\"");
    }
}
