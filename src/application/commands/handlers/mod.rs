//! Command Handlers

mod story_handlers;

pub use story_handlers::{GenerateStoryHandler, StoryGenerated};
