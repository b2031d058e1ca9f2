//! Hiwjang Frontend Entry Point

mod models;
mod catalog;
mod cart;
mod customize;
mod storage;
mod config;
mod error;
mod format;
mod visitor;
mod contact;
mod store;
mod components;
mod app;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(SiteConfig::default().log_level) {
        web_sys::console::error_1(&format!("[APP] Logger init failed: {}", e).into());
    }
    log::info!("[APP] Starting");
    mount_to_body(App);
}
