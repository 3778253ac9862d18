pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod traits;

pub use config::{AppConfig, ClientSettings, ServerSettings};
pub use error::MissionError;
pub use result::MissionResult;
pub use traits::{Entity, Repository};
