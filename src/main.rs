mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use tower_http::services::ServeDir;

        use crate::server::{
            config::{Config, MediaBackend},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let storage = startup::setup_media_storage(&config);

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);

        // Serve files written by the local backend
        let upload_prefix = config.upload_url_prefix.trim_end_matches('/');
        if config.media_backend == MediaBackend::Local && upload_prefix.starts_with('/') {
            router = router.nest_service(upload_prefix, ServeDir::new(&config.upload_dir));
        }

        let state = AppState::new(db, storage, config.contact.clone());
        let server_routes = server::router::router(config.upload_max_bytes).with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
