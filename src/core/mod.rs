pub mod fetch;
pub mod showcase;

pub use crate::domain::model::{FetchOutcome, ResponseMeta};
pub use crate::domain::ports::Fetcher;
pub use crate::utils::error::Result;
