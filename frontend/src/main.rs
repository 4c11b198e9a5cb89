use prize_wheel::{config, App};
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));

    Renderer::<App>::new().render();
}
