pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::profile::ShowProfile;
pub use crate::config::sheet::EpisodeSheet;
pub use crate::config::storage::LocalStorage;
pub use crate::core::form::{Field, FormState, Outputs};
pub use crate::core::render::Renderer;
pub use crate::domain::model::{Clip, Episode, Podcast};
pub use crate::domain::ports::{Clock, FixedClock, ProfileProvider, Storage, SystemClock};
pub use crate::utils::error::{Result, ShowmailError};
