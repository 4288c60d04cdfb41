//! Category lookup and lazy creation

use std::collections::HashSet;

use crate::traits::*;
use crate::types::*;

/// Resolves category titles to stored categories, creating missing ones
pub struct CategoryResolver<S: LedgerStorage> {
    pub(crate) storage: S,
}

impl<S: LedgerStorage> CategoryResolver<S> {
    /// Create a new category resolver
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Find the category titled `title`, creating and saving it if absent
    pub async fn find_or_create(&mut self, title: &str) -> LedgerResult<Category> {
        if let Some(existing) = self.storage.find_category_by_title(title).await? {
            return Ok(existing);
        }

        let category = Category::new(title);
        self.storage.save_category(&category).await?;
        tracing::debug!(category = %category.title, id = %category.id, "created category");

        Ok(category)
    }

    /// Resolve every title in `titles` with one lookup and at most one save
    ///
    /// `titles` may contain duplicates. The result holds the existing
    /// categories followed by the newly created ones; a title appearing more
    /// than once in `titles` creates a single category.
    pub async fn resolve_all(&mut self, titles: &[String]) -> LedgerResult<Vec<Category>> {
        let existing = self.storage.find_categories_by_titles(titles).await?;
        let created: Vec<Category> = {
            let existing_titles: HashSet<&str> =
                existing.iter().map(|c| c.title.as_str()).collect();
            let mut seen = HashSet::new();

            titles
                .iter()
                .filter(|title| !existing_titles.contains(title.as_str()))
                .filter(|title| seen.insert(title.as_str()))
                .map(|title| Category::new(title.as_str()))
                .collect()
        };

        if !created.is_empty() {
            self.storage.save_categories(&created).await?;
            tracing::debug!(count = created.len(), "created categories");
        }

        let mut categories = existing;
        categories.extend(created);
        Ok(categories)
    }
}

/// Pick the first category titled `title`
pub fn find_by_title<'a>(categories: &'a [Category], title: &str) -> LedgerResult<&'a Category> {
    categories
        .iter()
        .find(|category| category.title == title)
        .ok_or_else(|| LedgerError::CategoryNotFound(title.to_string()))
}
