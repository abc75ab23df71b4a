pub mod config;
pub mod error;
pub mod images;
pub mod list;
pub mod model;
pub mod notify;
pub mod screen;

pub use config::AppConfig;
pub use error::{AppError, ValidationError};
pub use images::{HttpImageLoader, ImageLoader, LoadedImage, NoopImageLoader};
pub use list::RecipeList;
pub use model::Recipe;
pub use notify::{NotificationSink, RecordingSink, TerminalToast};
pub use screen::{render_row, RecipeScreen, Row, BANNER, MSG_DUPLICATE_ENTRY, MSG_MISSING_FIELDS};
