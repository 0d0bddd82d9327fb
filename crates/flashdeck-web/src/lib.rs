pub mod app;
pub mod components;
pub mod config;
pub mod pages;

#[cfg(feature = "hydrate")]
pub mod widgets;

/// Browser entry point, called by the script `HydrationScripts` injects.
///
/// The pages are static server output; the only client-side behavior is the
/// flashcard widgets, so this mounts them instead of hydrating the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    widgets::mount_all();
}
