//! Category catalog.
//!
//! The catalog is fixed and independent of the record data. Records may
//! reference ids that are not listed here; those render with
//! [`DEFAULT_ICON`].

/// Sentinel id meaning "no category filter"
pub const ALL_CATEGORY: &str = "all";

/// Icon used for category ids missing from the catalog
pub const DEFAULT_ICON: &str = "🔖";

/// Number of catalog entries shown before the category bar is expanded
pub const INITIAL_CATEGORY_COUNT: usize = 10;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

const fn cat(id: &'static str, name: &'static str, icon: &'static str) -> Category {
    Category { id, name, icon }
}

/// The canonical catalog, `all` first.
pub static CATALOG: &[Category] = &[
    cat(ALL_CATEGORY, "All", ""),
    cat("photography", "Photography", "📷"),
    cat("portrait", "Portrait", "👤"),
    cat("nature", "Nature", "🌿"),
    cat("landscape", "Landscape", "🏔️"),
    cat("architecture", "Architecture", "🏛️"),
    cat("interior", "Interior", "🏠"),
    cat("3d", "3D", "🧊"),
    cat("illustration", "Illustration", "🎨"),
    cat("character", "Character", "👾"),
    cat("anime", "Anime", "🌸"),
    cat("fashion", "Fashion", "👗"),
    cat("product", "Product", "📦"),
    cat("food", "Food", "🍔"),
    cat("logo", "Logo", "🔷"),
    cat("branding", "Branding", "💼"),
    cat("typography", "Typography", "🅰️"),
    cat("poster", "Poster", "📜"),
    cat("ui", "UI", "📱"),
    cat("icon", "Icon", "🏷️"),
    cat("game", "Game", "🎮"),
    cat("sci-fi", "Sci-Fi", "🚀"),
    cat("fantasy", "Fantasy", "🦄"),
    cat("retro", "Retro", "📼"),
    cat("minimalist", "Minimalist", "✨"),
    cat("neon", "Neon", "🎆"),
    cat("clay", "Clay", "🧸"),
    cat("paper", "Paper Cut", "✂️"),
    cat("texture", "Texture", "🧶"),
    cat("animal", "Animal", "🐾"),
    cat("vehicle", "Vehicle", "🚗"),
];

/// Look up a catalog entry by id
pub fn find(id: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Icon for a category id, falling back to [`DEFAULT_ICON`]
pub fn icon_for(id: &str) -> &'static str {
    match find(id) {
        Some(category) if !category.icon.is_empty() => category.icon,
        _ => DEFAULT_ICON,
    }
}

/// Catalog entries shown in the category bar
pub fn visible_categories(expanded: bool) -> &'static [Category] {
    if expanded {
        CATALOG
    } else {
        &CATALOG[..INITIAL_CATEGORY_COUNT.min(CATALOG.len())]
    }
}

/// Whether the category bar needs an expand/collapse toggle
pub fn needs_toggle() -> bool {
    CATALOG.len() > INITIAL_CATEGORY_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn all_sentinel_comes_first() {
        assert_eq!(CATALOG[0].id, ALL_CATEGORY);
    }

    #[test]
    fn icon_lookup() {
        assert_eq!(icon_for("animal"), "🐾");
        assert_eq!(icon_for("vehicle"), "🚗");
        assert_eq!(icon_for("other"), DEFAULT_ICON);
        // `all` carries no icon of its own
        assert_eq!(icon_for(ALL_CATEGORY), DEFAULT_ICON);
    }

    #[test]
    fn collapsed_bar_shows_initial_count() {
        assert_eq!(visible_categories(false).len(), INITIAL_CATEGORY_COUNT);
        assert_eq!(visible_categories(true).len(), CATALOG.len());
        assert!(needs_toggle());
    }
}
