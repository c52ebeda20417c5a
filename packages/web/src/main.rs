use dioxus::prelude::*;

use ui::views::PageShell;
use ui::{AuthProvider, NotificationStack, SiteDataProvider};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                eprintln!("Failed to start the async runtime: {e}");
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = api::settings::settings();

    // Initialize database pool
    let pool = api::db::get_pool().await?;

    // Run migrations
    sqlx::migrate!("../api/migrations").run(pool).await?;

    // Session store shares the content database
    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let expiry = Duration::from_secs(60 * 60 * 24 * settings.session.expiry_days.max(1) as u64);
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(expiry.try_into()?));

    tokio::fs::create_dir_all(&settings.uploads.dir).await?;

    let router = axum::Router::new()
        .nest_service(
            &settings.uploads.public_path,
            ServeDir::new(&settings.uploads.dir),
        )
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::SITE_CSS }

        SiteDataProvider {
            AuthProvider {
                Router::<Route> {}
            }
            NotificationStack {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        PageShell {}
    }
}
