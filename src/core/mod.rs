pub mod escape;
pub mod form;
pub mod guests;
pub mod render;
pub mod schedule;
pub mod slug;

pub use crate::domain::model::{Clip, Episode, Podcast};
pub use crate::domain::ports::{Clock, ProfileProvider};
pub use crate::utils::error::Result;
