//! GigBoard Frontend Entry Point

mod models;
mod format;
mod api;
mod loader;
mod context;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
