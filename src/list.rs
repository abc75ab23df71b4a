use log::debug;

use crate::error::ValidationError;
use crate::model::Recipe;

/// The owned, ordered recipe collection behind a single mutation entry point.
///
/// All mutation happens through [`add`](Self::add) and
/// [`remove`](Self::remove); the rendering layer reads the list and watches
/// [`revision`](Self::revision) to know when to restart its row sequence.
#[derive(Debug, Default)]
pub struct RecipeList {
    recipes: Vec<Recipe>,
    revision: u64,
}

impl RecipeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a recipe.
    ///
    /// Both fields must be non-empty, and the (title, image URL) pair must
    /// not already be present. Title-only collisions with a different URL
    /// are allowed; the duplicate check is on the exact pair.
    pub fn add(&mut self, title: &str, image_url: &str) -> Result<(), ValidationError> {
        if title.is_empty() || image_url.is_empty() {
            debug!("rejected add: empty field");
            return Err(ValidationError::MissingField);
        }

        let exists = self
            .recipes
            .iter()
            .any(|r| r.title == title && r.image_url.as_deref() == Some(image_url));
        if exists {
            debug!("rejected add: duplicate of {:?}", title);
            return Err(ValidationError::DuplicateEntry);
        }

        self.recipes
            .push(Recipe::new(title, Some(image_url.to_string())));
        self.revision += 1;
        Ok(())
    }

    /// Remove the first entry equal to `recipe`.
    ///
    /// Returns `true` if an entry was removed. Removing an entry that is no
    /// longer present is a no-op, so deleting the same entry twice has no
    /// effect beyond the first deletion.
    pub fn remove(&mut self, recipe: &Recipe) -> bool {
        match self.recipes.iter().position(|r| r == recipe) {
            Some(index) => {
                self.recipes.remove(index);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// The recipe at `index` in list order, if any.
    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }

    /// Current entries, in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Monotonic counter bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
