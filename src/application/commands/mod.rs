//! Application Commands

mod story_commands;

pub mod handlers;

pub use story_commands::GenerateStory;
