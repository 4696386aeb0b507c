// src/core.rs
pub mod exporter;
pub mod ignore;
pub mod selector;
