pub mod controller;
pub mod http_source;
pub mod source;

pub use controller::{FetchState, FetchStatus, MenuController};
pub use http_source::HttpMenuSource;
pub use source::MenuSource;
