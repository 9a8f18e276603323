//! The five fixed scoring categories and their per-category payloads.
//!
//! Category metadata (wire key, display title, "nothing to improve" text) lives
//! in the static [`CATEGORIES`] table so views iterate the table instead of
//! spelling out each category.

use serde::{Deserialize, Serialize};

use super::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Content,
    Format,
    Skills,
    Sections,
    Style,
}

/// Static description of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    /// Key used in `ats_score.categories` and `suggestions`.
    pub key: &'static str,
    pub title: &'static str,
    /// Single list item shown when the category has no suggestions.
    pub placeholder: &'static str,
}

/// Categories in display order.
pub static CATEGORIES: [CategoryInfo; 5] = [
    CategoryInfo {
        category: Category::Content,
        key: "content",
        title: "Content",
        placeholder: "Great job! No content improvements needed.",
    },
    CategoryInfo {
        category: Category::Format,
        key: "format",
        title: "Format",
        placeholder: "Great job! No format improvements needed.",
    },
    CategoryInfo {
        category: Category::Skills,
        key: "skills",
        title: "Skills",
        placeholder: "Great job! No skills improvements needed.",
    },
    CategoryInfo {
        category: Category::Sections,
        key: "sections",
        title: "Sections",
        placeholder: "Great job! No section improvements needed.",
    },
    CategoryInfo {
        category: Category::Style,
        key: "style",
        title: "Style",
        placeholder: "Great job! No style improvements needed.",
    },
];

impl Category {
    pub fn info(self) -> &'static CategoryInfo {
        // The table holds every variant in declaration order.
        &CATEGORIES[self as usize]
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        CATEGORIES.iter().find(|c| c.key == key).map(|c| c.category)
    }
}

/// `ats_score.categories`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    #[serde(default)]
    pub content: Score,
    #[serde(default)]
    pub format: Score,
    #[serde(default)]
    pub skills: Score,
    #[serde(default)]
    pub sections: Score,
    #[serde(default)]
    pub style: Score,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Content => self.content,
            Category::Format => self.format,
            Category::Skills => self.skills,
            Category::Sections => self.sections,
            Category::Style => self.style,
        }
    }
}

/// Improvement suggestions per category, in the order the service produced them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub format: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sections: Vec<String>,
    #[serde(default)]
    pub style: Vec<String>,
}

impl Suggestions {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Content => &self.content,
            Category::Format => &self.format,
            Category::Skills => &self.skills,
            Category::Sections => &self.sections,
            Category::Style => &self.style,
        }
    }
}
