// Gateway module for utils - follows the Train Station Pattern
// All external access must go through this gateway

mod errors;
mod logger;
mod text;

pub use errors::{DirectoryError, RutabotError};
pub use logger::{init_logger, log_status};
pub use text::{fold, tokenize};
