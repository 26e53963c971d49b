use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;
use gloo_timers::future::TimeoutFuture;
use shared_types::Document;

use document_ui::{initial_state, DocumentStudio, SaveFuture};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let state = use_signal(initial_state);

    // No agent transport here; saves are acknowledged locally.
    let on_save = use_callback(move |document: Document| -> SaveFuture {
        Box::pin(async move {
            TimeoutFuture::new(300).await;
            dioxus_logger::tracing::info!(
                "Saved document \"{}\" ({} bytes)",
                document.title,
                document.content.len()
            );
            Ok(())
        })
    });

    rsx! {
        DocumentStudio { state: state(), on_save }
    }
}
