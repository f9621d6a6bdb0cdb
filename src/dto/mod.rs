//! DTO modules that bridge services with templates.

pub mod lists;
pub mod main;
pub mod phases;
pub mod settings;
