// src/core/ignore.rs
mod loader;
mod patterns;

pub use loader::load_ignore_list;
pub use patterns::IgnoreList;
