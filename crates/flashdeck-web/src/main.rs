#[cfg(feature = "ssr")]
#[derive(clap::Parser, Debug)]
#[command(name = "flashdeck-web", about = "Serve flashcard decks as study/quiz widgets")]
struct Args {
    /// Deck catalog (TOML). Missing file = built-in sample decks.
    #[arg(long, env = "FLASHDECK_DECKS", default_value = "./data/decks.toml")]
    decks: std::path::PathBuf,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use clap::Parser;
    use flashdeck_web::app::{App, shell};
    use flashdeck_web::config::{self, Catalog};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;
    use tower_http::services::ServeDir;

    let args = Args::parse();

    let catalog = Catalog::load_or_sample(&args.decks).map_err(|e| {
        eprintln!("[config] {:#}", e);
        e
    })?;
    println!(
        "[config] {} deck(s), {} card(s)",
        catalog.decks.len(),
        catalog.decks.iter().map(|d| d.cards.len()).sum::<usize>()
    );
    config::install(catalog)?;

    let conf = get_configuration(None).map_err(|e| {
        eprintln!("Failed to load Leptos configuration: {}", e);
        e
    })?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let site_root = leptos_options.site_root.clone();
    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback_service(ServeDir::new(&*site_root))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        eprintln!("Failed to bind to {}: {}", addr, e);
        e
    })?;

    println!("Listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        eprintln!("Server error: {}", e);
        e
    })?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // Client entry point is `flashdeck_web::hydrate` in the wasm lib
}
