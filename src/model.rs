/// A user-entered recipe: a title plus an optional image URL.
///
/// Recipes are only created through [`RecipeList::add`](crate::RecipeList::add)
/// after validation, and only destroyed by deleting them from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn new(title: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            title: title.into(),
            image_url,
        }
    }
}
