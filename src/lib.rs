// Rust Pickers Library
// Calendar and clock pickers with their egui input fields

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
