pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod logging;
pub mod storage;
pub mod url_model;

pub use error::FetchError;
pub use fetcher::{fetch_and_save, FetchResult, FETCH_DIR};
