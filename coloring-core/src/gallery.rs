//! Category gallery that leads into a coloring session.

use serde::{Deserialize, Serialize};

use crate::{CanvasError, CanvasResult};

/// Categories shown when the application starts.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Nature", "Animals", "Fantasy"];

/// Pages listed under each category.
pub const PAGES_PER_CATEGORY: usize = 3;

/// A page picked from the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRef {
    /// Category name.
    pub category: String,
    /// Zero-based index within the category.
    pub index: usize,
}

impl PageRef {
    /// Label shown on the thumbnail, e.g. `"Nature 1"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.category, self.index + 1)
    }
}

/// The list of coloring pages, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    categories: Vec<String>,
    pages_per_category: usize,
}

impl Gallery {
    /// Create a gallery with the given categories.
    #[must_use]
    pub fn new(categories: Vec<String>, pages_per_category: usize) -> Self {
        Self {
            categories,
            pages_per_category,
        }
    }

    /// Category names in display order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    fn find(&self, category: &str) -> Option<&String> {
        self.categories
            .iter()
            .find(|c| c.eq_ignore_ascii_case(category))
    }

    /// Pages listed under `category`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::PageNotFound`] for unknown categories.
    pub fn pages(&self, category: &str) -> CanvasResult<Vec<PageRef>> {
        let name = self
            .find(category)
            .ok_or_else(|| CanvasError::PageNotFound(category.to_string()))?;
        Ok((0..self.pages_per_category)
            .map(|index| PageRef {
                category: name.clone(),
                index,
            })
            .collect())
    }

    /// Pick a page.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::PageNotFound`] for unknown categories or
    /// indexes past the end.
    pub fn select(&self, category: &str, index: usize) -> CanvasResult<PageRef> {
        self.pages(category)?
            .into_iter()
            .nth(index)
            .ok_or_else(|| CanvasError::PageNotFound(format!("{category} #{index}")))
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
            PAGES_PER_CATEGORY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gallery() {
        let gallery = Gallery::default();
        assert_eq!(gallery.categories(), ["Nature", "Animals", "Fantasy"]);
        let pages = gallery.pages("Animals").expect("pages");
        let titles: Vec<_> = pages.iter().map(PageRef::title).collect();
        assert_eq!(titles, ["Animals 1", "Animals 2", "Animals 3"]);
    }

    #[test]
    fn test_select_is_case_insensitive() {
        let page = Gallery::default().select("fantasy", 2).expect("page");
        assert_eq!(page.category, "Fantasy");
        assert_eq!(page.title(), "Fantasy 3");
    }

    #[test]
    fn test_missing_pages() {
        let gallery = Gallery::default();
        assert!(matches!(
            gallery.select("Vehicles", 0),
            Err(CanvasError::PageNotFound(_))
        ));
        assert!(matches!(
            gallery.select("Nature", 3),
            Err(CanvasError::PageNotFound(_))
        ));
    }
}
