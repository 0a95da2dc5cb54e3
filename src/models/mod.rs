// Core data models for stagehand

pub mod stage;

pub use stage::*;
