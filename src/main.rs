//! Bestiary Frontend Entry Point

mod models;
mod validate;
mod api;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
