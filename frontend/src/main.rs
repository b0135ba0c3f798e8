use portfolio_frontend::Portfolio;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Mounting portfolio");
    yew::Renderer::<Portfolio>::new().render();
}
