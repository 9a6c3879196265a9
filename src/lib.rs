pub mod app;
pub mod config;
pub mod error;
pub mod items;
pub mod meals;
pub mod settings;
pub mod shopping;
pub mod state;
pub mod stats;
pub mod store;
pub mod transfer;
