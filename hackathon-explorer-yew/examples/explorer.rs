use hackathon_explorer_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Hackathon Explorer");

    yew::Renderer::<App>::new().render();
}
