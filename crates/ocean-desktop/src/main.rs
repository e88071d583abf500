//! Ocean Notes Desktop Application
//!
//! A desktop client for a remote notes REST service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let filter = match "ocean=debug".parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Ocean Notes...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Ocean Notes")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new().with_cfg(config).launch(app::App);
}
