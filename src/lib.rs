pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{DemoConfig, FetchConfig};

pub use config::toml_config::{RequestConfig, RequestFile};
pub use core::{
    fetch::{request, HttpFetcher},
    showcase::Showcase,
};
pub use domain::{
    arithmetic::{add, Operand},
    geometry::{area, circumference},
    model::{FetchOutcome, ResponseMeta},
    ports::Fetcher,
};
pub use utils::error::{DemoError, Result};
