pub mod commands;
pub mod entries;
