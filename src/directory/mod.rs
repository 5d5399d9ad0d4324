// Gateway module for directory - follows the Train Station Pattern
// All external access must go through this gateway

mod http;
mod traits;
mod types;

pub use http::HttpDirectory;
pub use traits::Directory;
#[cfg(test)]
pub use traits::MockDirectory;
pub use types::{RecordId, Route, Stop};
