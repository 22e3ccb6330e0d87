//! Category tags and their badge styles

use std::fmt;

/// Badge classes used for categories without a dedicated style
pub const DEFAULT_BADGE_STYLE: &str = "bg-muted text-muted-foreground";

/// Known post categories. Anything else is carried as [`Category::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Piano,
    Guitar,
    Theory,
    Practice,
    Recording,
    Performance,
    Jazz,
    Instruments,
    Production,
    Songwriting,
    Classical,
    Electronic,
    Technique,
    Other(String),
}

impl Category {
    /// Parse a category tag. Matching is exact; `"piano"` is not `PIANO`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "PIANO" => Category::Piano,
            "GUITAR" => Category::Guitar,
            "THEORY" => Category::Theory,
            "PRACTICE" => Category::Practice,
            "RECORDING" => Category::Recording,
            "PERFORMANCE" => Category::Performance,
            "JAZZ" => Category::Jazz,
            "INSTRUMENTS" => Category::Instruments,
            "PRODUCTION" => Category::Production,
            "SONGWRITING" => Category::Songwriting,
            "CLASSICAL" => Category::Classical,
            "ELECTRONIC" => Category::Electronic,
            "TECHNIQUE" => Category::Technique,
            other => Category::Other(other.to_string()),
        }
    }

    /// The tag as written in the catalog
    pub fn as_str(&self) -> &str {
        match self {
            Category::Piano => "PIANO",
            Category::Guitar => "GUITAR",
            Category::Theory => "THEORY",
            Category::Practice => "PRACTICE",
            Category::Recording => "RECORDING",
            Category::Performance => "PERFORMANCE",
            Category::Jazz => "JAZZ",
            Category::Instruments => "INSTRUMENTS",
            Category::Production => "PRODUCTION",
            Category::Songwriting => "SONGWRITING",
            Category::Classical => "CLASSICAL",
            Category::Electronic => "ELECTRONIC",
            Category::Technique => "TECHNIQUE",
            Category::Other(tag) => tag,
        }
    }

    /// Badge classes for this category
    pub fn badge_style(&self) -> &'static str {
        match self {
            Category::Piano => "bg-primary text-primary-foreground",
            Category::Guitar => "bg-secondary text-secondary-foreground",
            Category::Theory => "bg-accent text-accent-foreground",
            Category::Practice => "bg-gradient-to-r from-primary to-secondary text-white",
            Category::Recording => "bg-gradient-to-r from-secondary to-accent text-white",
            Category::Performance => "bg-gradient-to-r from-accent to-primary text-white",
            Category::Jazz => "bg-destructive text-destructive-foreground",
            Category::Instruments => "bg-gradient-primary text-white",
            Category::Production => "bg-gradient-secondary text-white",
            Category::Songwriting => "bg-gradient-accent text-white",
            Category::Classical => "bg-muted text-muted-foreground",
            Category::Electronic => {
                "bg-gradient-to-r from-primary via-secondary to-accent text-white"
            }
            Category::Technique => "bg-gradient-to-r from-accent to-primary text-white",
            Category::Other(_) => DEFAULT_BADGE_STYLE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge classes for a raw category tag. Total over all strings.
pub fn badge_style(tag: &str) -> &'static str {
    Category::parse(tag).badge_style()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_style() {
        assert_eq!(badge_style("PIANO"), "bg-primary text-primary-foreground");
        assert_eq!(
            badge_style("TECHNIQUE"),
            "bg-gradient-to-r from-accent to-primary text-white"
        );
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(badge_style("UNKNOWN_XYZ"), DEFAULT_BADGE_STYLE);
        assert_eq!(badge_style(""), DEFAULT_BADGE_STYLE);
        assert_eq!(badge_style("piano"), DEFAULT_BADGE_STYLE);
    }

    #[test]
    fn test_parse_keeps_unknown_tag() {
        let category = Category::parse("UKULELE");
        assert_eq!(category, Category::Other("UKULELE".to_string()));
        assert_eq!(category.to_string(), "UKULELE");
        assert_eq!(Category::parse("JAZZ").as_str(), "JAZZ");
    }
}
