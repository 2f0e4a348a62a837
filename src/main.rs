#![allow(warnings)]
//! Wrap-Up Checklist Frontend Entry Point

mod app;
mod audio;
mod browser;
mod components;
mod config;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info, 200) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
