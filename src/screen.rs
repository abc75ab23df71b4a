use std::sync::Arc;

use log::debug;

use crate::error::ValidationError;
use crate::images::ImageLoader;
use crate::list::RecipeList;
use crate::model::Recipe;
use crate::notify::NotificationSink;

/// Banner shown above the list.
pub const BANNER: &str = "Healthy Living App";
/// Notice shown when one or both input fields are empty at submit time.
pub const MSG_MISSING_FIELDS: &str = "Error, debe completar todos los campos";
/// Notice shown when the submitted (title, image URL) pair already exists.
pub const MSG_DUPLICATE_ENTRY: &str = "Error, el elemento ya existe en la lista";

/// One rendered row: the title plus the URL the image loader should
/// resolve for display, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub title: String,
    pub image_url: Option<String>,
}

/// The recipe list screen: two text fields, a submit action, and a
/// tappable list of rows.
///
/// Owns the list and the form state; every mutation flows through
/// [`submit`](Self::submit) or [`tap`](Self::tap), in response to one user
/// action at a time. Validation failures never escape: they surface only
/// as transient notifications, and the screen state is left unchanged.
pub struct RecipeScreen {
    list: RecipeList,
    title_input: String,
    url_input: String,
    notifier: Arc<dyn NotificationSink>,
}

impl RecipeScreen {
    pub fn new(notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            list: RecipeList::new(),
            title_input: String::new(),
            url_input: String::new(),
            notifier,
        }
    }

    /// Replace the contents of the title field.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title_input = value.into();
    }

    /// Replace the contents of the image URL field.
    pub fn set_image_url(&mut self, value: impl Into<String>) {
        self.url_input = value.into();
    }

    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    pub fn image_url_input(&self) -> &str {
        &self.url_input
    }

    /// Submit the form ("Agregar a la lista").
    ///
    /// On success the recipe is appended and both fields are cleared. On
    /// validation failure a notice is shown and the fields keep their
    /// values so the user can correct them.
    pub fn submit(&mut self) {
        match self.list.add(&self.title_input, &self.url_input) {
            Ok(()) => {
                debug!("added recipe {:?}", self.title_input);
                self.title_input.clear();
                self.url_input.clear();
            }
            Err(ValidationError::MissingField) => {
                self.notifier.notify(MSG_MISSING_FIELDS);
            }
            Err(ValidationError::DuplicateEntry) => {
                self.notifier.notify(MSG_DUPLICATE_ENTRY);
            }
        }
    }

    /// Tap the row at `index`, deleting its recipe.
    ///
    /// Tapping a row that no longer exists is a no-op.
    pub fn tap(&mut self, index: usize) {
        let Some(recipe) = self.list.get(index).cloned() else {
            return;
        };
        if self.list.remove(&recipe) {
            self.notifier
                .notify(&format!("Receta de: {} eliminada", recipe.title));
        }
    }

    /// Snapshot of the current rows, in list order.
    ///
    /// Restarted by the hosting loop on every revision change; image
    /// resolution happens per row, outside the screen.
    pub fn rows(&self) -> Vec<Row> {
        self.list
            .recipes()
            .iter()
            .map(|r| Row {
                title: r.title.clone(),
                image_url: r.image_url.clone(),
            })
            .collect()
    }

    pub fn recipes(&self) -> &[Recipe] {
        self.list.recipes()
    }

    pub fn revision(&self) -> u64 {
        self.list.revision()
    }
}

/// Render one row to a line of text, resolving its image if present.
///
/// A row whose image fails to load shows just the title; the loader has
/// already swallowed the failure.
pub async fn render_row(row: &Row, loader: &dyn ImageLoader) -> String {
    let mut line = row.title.clone();
    if let Some(url) = &row.image_url {
        if let Some(image) = loader.resolve(url).await {
            let kind = image.content_type.as_deref().unwrap_or("imagen");
            line.push_str(&format!("  [{kind}, {} bytes]", image.bytes.len()));
        }
    }
    line
}
