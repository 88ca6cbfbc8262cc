pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BrowseCommand, CliConfig};

pub use config::cli::ConsolePresenter;
pub use config::toml_config::TomlConfig;
pub use core::{browser::BrowseEngine, client::BreedApiClient};
pub use domain::ports::{BreedSource, ConfigProvider, Presenter};
pub use utils::error::{BrowseError, Result};
