pub mod app;
pub mod cli;
pub mod selector;

pub use app::{load_catalog_or_default, run};
pub use cli::Cli;
pub use selector::{resolve_selection, select_model};
