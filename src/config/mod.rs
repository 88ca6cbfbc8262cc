pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "breed-browser")]
#[command(about = "Browse dog breeds and fetch random breed images")]
pub struct CliConfig {
    #[arg(long, default_value = "https://dog.ceo/api")]
    pub base_url: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Load networking settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process stats around fetches")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<BrowseCommand>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum BrowseCommand {
    /// Print every breed, sorted ascending
    List,
    /// Print one random image URL for the given breed
    Image { breed: String },
    /// List breeds numbered, pick one, fetch an image for it
    Browse,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;

        if let Some(BrowseCommand::Image { breed }) = &self.command {
            validate_non_empty_string("breed", breed)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_the_dog_api() {
        let config = CliConfig::parse_from(["breed-browser"]);

        assert_eq!(config.base_url, "https://dog.ceo/api");
        assert_eq!(config.timeout_seconds, 10);
        assert!(config.command.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_image_subcommand_requires_a_breed_name() {
        let config = CliConfig::parse_from(["breed-browser", "image", "  "]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["breed-browser", "image", "akita"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_base_url_fails_validation() {
        let config = CliConfig::parse_from(["breed-browser", "--base-url", "ftp://dog.ceo", "list"]);
        assert!(config.validate().is_err());
    }
}
