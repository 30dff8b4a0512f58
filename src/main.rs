mod app;
mod catalog;
mod checkout;
mod components;
mod config;
mod error;
pub mod models;
pub mod utils;

use std::rc::Rc;

use app::{App, AppProps};
use config::CheckoutConfig;

fn main() {
    console_error_panic_hook::set_once();
    let (config, note) = CheckoutConfig::load();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("Checkout widget v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(note) = note {
        note.log();
    }
    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
}
