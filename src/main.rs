mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // The stylesheets are linked from index.html and load with the page.
    // If #app is missing the page stays inert, same as an unmatched mount
    // selector would leave it.
    if let Some(root) = document().get_element_by_id("app") {
        mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
    }
}
