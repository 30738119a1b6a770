//! Static display metadata for category slugs.

use serde::Serialize;

pub const DEFAULT_ACCENT: &str = "#6c757d";
pub const DEFAULT_ICON: &str = "fas fa-newspaper";

/// Display metadata for a category route segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub accent_color: String,
    pub icon_token: String,
}

struct Entry {
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    accent_color: &'static str,
    icon_token: &'static str,
}

impl Entry {
    fn descriptor(&self) -> CategoryDescriptor {
        CategoryDescriptor {
            slug: self.slug.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            accent_color: self.accent_color.to_string(),
            icon_token: self.icon_token.to_string(),
        }
    }
}

static TABLE: &[Entry] = &[
    Entry {
        slug: "palestine",
        title: "Palestine",
        description: "Latest news and updates on Palestinian affairs, Gaza, West Bank, and the ongoing struggle for justice.",
        accent_color: "#dc3545",
        icon_token: "fas fa-flag",
    },
    Entry {
        slug: "middle-east",
        title: "Middle East",
        description: "Comprehensive coverage of Middle Eastern countries including politics, culture, and regional developments.",
        accent_color: "#fd7e14",
        icon_token: "fas fa-mosque",
    },
    Entry {
        slug: "south-asia",
        title: "South Asia",
        description: "News from Pakistan, India, Bangladesh, Afghanistan, and other South Asian Muslim communities.",
        accent_color: "#ffc107",
        icon_token: "fas fa-mountain",
    },
    Entry {
        slug: "southeast-asia",
        title: "Southeast Asia",
        description: "Updates from Indonesia, Malaysia, Brunei, and Southeast Asian Muslim populations.",
        accent_color: "#28a745",
        icon_token: "fas fa-island-tropical",
    },
    Entry {
        slug: "africa",
        title: "Africa",
        description: "African Muslim communities, developments in Nigeria, Morocco, Algeria, and across the continent.",
        accent_color: "#6f42c1",
        icon_token: "fas fa-globe-africa",
    },
    Entry {
        slug: "europe",
        title: "Europe",
        description: "European Muslim communities, integration stories, and developments across European nations.",
        accent_color: "#20c997",
        icon_token: "fas fa-globe-europe",
    },
    Entry {
        slug: "americas",
        title: "Americas",
        description: "Muslim communities in North and South America, community developments and achievements.",
        accent_color: "#17a2b8",
        icon_token: "fas fa-globe-americas",
    },
    Entry {
        slug: "community",
        title: "Community",
        description: "Community initiatives, charity work, social programs, and grassroots developments.",
        accent_color: "#e83e8c",
        icon_token: "fas fa-users",
    },
    Entry {
        slug: "culture",
        title: "Culture",
        description: "Islamic culture, traditions, religious observances, and cultural celebrations worldwide.",
        accent_color: "#6c757d",
        icon_token: "fas fa-star-and-crescent",
    },
    Entry {
        slug: "economics",
        title: "Economics",
        description: "Business developments, Islamic finance, halal industry, and economic achievements.",
        accent_color: "#343a40",
        icon_token: "fas fa-chart-line",
    },
    Entry {
        slug: "politics",
        title: "Politics",
        description: "Political developments, governance, policy changes, and political participation.",
        accent_color: "#007bff",
        icon_token: "fas fa-landmark",
    },
    Entry {
        slug: "education",
        title: "Education",
        description: "Educational achievements, Islamic education, scholarships, and academic developments.",
        accent_color: "#28a745",
        icon_token: "fas fa-graduation-cap",
    },
    Entry {
        slug: "technology",
        title: "Technology",
        description: "Innovation, startups, digital developments, and technological achievements.",
        accent_color: "#17a2b8",
        icon_token: "fas fa-microchip",
    },
    Entry {
        slug: "health",
        title: "Health",
        description: "Healthcare developments, medical achievements, and health-related community initiatives.",
        accent_color: "#dc3545",
        icon_token: "fas fa-heartbeat",
    },
    Entry {
        slug: "sports",
        title: "Sports",
        description: "Athletic achievements, sports developments, and Muslim athletes making headlines.",
        accent_color: "#fd7e14",
        icon_token: "fas fa-trophy",
    },
    Entry {
        slug: "tragedy",
        title: "Human Rights",
        description: "Documenting human rights violations, humanitarian crises, and the people affected by them.",
        accent_color: "#b02a37",
        icon_token: "fas fa-hand-holding-heart",
    },
];

/// Resolves a slug to its descriptor. Never fails: unknown slugs get a
/// neutral descriptor titled with the raw slug.
pub fn resolve(slug: &str) -> CategoryDescriptor {
    let key = slug.trim().to_lowercase();
    TABLE
        .iter()
        .find(|entry| entry.slug == key)
        .map(Entry::descriptor)
        .unwrap_or_else(|| fallback(slug))
}

fn fallback(slug: &str) -> CategoryDescriptor {
    CategoryDescriptor {
        slug: slug.to_string(),
        title: slug.to_string(),
        description: String::new(),
        accent_color: DEFAULT_ACCENT.to_string(),
        icon_token: DEFAULT_ICON.to_string(),
    }
}

pub fn is_known(slug: &str) -> bool {
    let key = slug.trim().to_lowercase();
    TABLE.iter().any(|entry| entry.slug == key)
}

/// Every known category in display order.
pub fn descriptors() -> Vec<CategoryDescriptor> {
    TABLE.iter().map(Entry::descriptor).collect()
}

/// Turns a display name such as "Middle East" into its route slug.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug() {
        let palestine = resolve("palestine");
        assert_eq!(palestine.title, "Palestine");
        assert_eq!(palestine.accent_color, "#dc3545");
        assert_eq!(palestine.icon_token, "fas fa-flag");
    }

    #[test]
    fn test_mixed_case_and_whitespace_resolve() {
        assert_eq!(resolve("Middle-East").title, "Middle East");
        assert_eq!(resolve("  SPORTS ").title, "Sports");
    }

    #[test]
    fn test_resolver_is_total() {
        for input in ["", "unknown-region", "Sport", "ÄÖÜ", "palestine/../x"] {
            let descriptor = resolve(input);
            assert_eq!(descriptor.title, input);
            assert_eq!(descriptor.description, "");
            assert_eq!(descriptor.accent_color, DEFAULT_ACCENT);
            assert_eq!(descriptor.icon_token, DEFAULT_ICON);
        }
    }

    #[test]
    fn test_table_slugs_are_routable() {
        for descriptor in descriptors() {
            assert_eq!(descriptor.slug, slugify(&descriptor.slug));
            assert!(is_known(&descriptor.slug));
            assert!(!descriptor.title.is_empty());
        }
        assert_eq!(descriptors().len(), 16);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Southeast Asia"), "southeast-asia");
        assert_eq!(slugify("Palestine"), "palestine");
    }
}
