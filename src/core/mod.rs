pub mod browser;
pub mod client;

pub use crate::domain::model::{BreedImageResponse, BreedListResponse};
pub use crate::domain::ports::{BreedSource, ConfigProvider, Presenter};
pub use crate::utils::error::Result;
