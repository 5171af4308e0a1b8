//! Fixed category taxonomy shared with the directory API.

/// A selectable category. `id` is sent verbatim as `event_category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Shorter label for narrow layouts.
    pub compact_name: Option<&'static str>,
}

pub const CATEGORIES: [Category; 6] = [
    Category {
        id: "",
        name: "All Categories",
        compact_name: None,
    },
    Category {
        id: "Fan Intelligence",
        name: "Fan Intelligence",
        compact_name: Some("Fan Intel"),
    },
    Category {
        id: "Advertising & Media",
        name: "Advertising & Media",
        compact_name: Some("Ad & Media"),
    },
    Category {
        id: "Creative & Personalization",
        name: "Creative & Personalization",
        compact_name: Some("Creative"),
    },
    Category {
        id: "Sponsorship & Revenue Growth",
        name: "Sponsorship & Revenue Growth",
        compact_name: Some("Revenue"),
    },
    Category {
        id: "Measurement & Analytics",
        name: "Measurement & Analytics",
        compact_name: Some("Analytics"),
    },
];

impl Category {
    pub fn label(&self, compact: bool) -> &'static str {
        match self.compact_name {
            Some(short) if compact => short,
            _ => self.name,
        }
    }

    pub fn position(id: &str) -> Option<usize> {
        CATEGORIES.iter().position(|c| c.id == id)
    }
}

/// Label for the selected category id, falling back to "All Categories".
pub fn selected_label(id: &str, compact: bool) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.label(compact))
        .unwrap_or(CATEGORIES[0].name)
}
