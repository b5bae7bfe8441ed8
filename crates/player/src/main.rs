//! PlaceMap Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use placemap_player::application::api::Api;
use placemap_player::application::services::LocationService;
use placemap_player::application::SyncController;
use placemap_player::config::PlaceMapConfig;
use placemap_player::infrastructure::http_client::ApiAdapter;
use placemap_player::infrastructure::map::LeafletMap;
use placemap_player::ports::outbound::{MapRendererPort, PlatformPort};

/// DOM id of the map container
const MAP_ELEMENT_ID: &str = "map";

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine; real environment variables still apply.
        dotenvy::dotenv().ok();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "placemap_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = PlaceMapConfig::from_env()?;
    tracing::info!(api = %config.api_url(), "Starting PlaceMap Player");

    // Platform
    let platform = placemap_player::infrastructure::platform::create_platform();
    let dialogs = Arc::new(platform.clone());
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let raw_api = Arc::new(ApiAdapter::new(config.api_base.clone()));
    let api = Api::new(raw_api);
    let locations = Arc::new(LocationService::new(api, config.collection_path.clone()));

    // Map
    let map = Arc::new(LeafletMap::new(MAP_ELEMENT_ID, config.map.clone()));
    let renderer: Arc<dyn MapRendererPort> = map.clone();

    let sync = SyncController::new(locations, renderer, dialogs)
        .with_focus_zoom(config.map.focus_zoom);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = load_player_css();
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(placemap_player::ui::presentation::Services::new(sync, map))
        .launch(placemap_player::ui::app);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
