pub mod app;
pub mod cli;
pub mod constants;
pub mod directory;
pub mod resolver;
pub mod runtime;
pub mod session;
pub mod utils;

pub use app::{load_config, Config};
pub use directory::{Directory, HttpDirectory, RecordId, Route, Stop};
pub use resolver::{Intent, IntentResolver, ParsedQuery, Resolution};
pub use utils::{DirectoryError, RutabotError};
