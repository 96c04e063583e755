use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

/// Builds the shared HTTP client from `API_BASE_URL`. A bad value is logged and
/// replaced by the local default so the app still starts.
pub fn make_client() -> ApiClient {
    let config = ApiConfig::from_env().unwrap_or_else(|e| {
        tracing::error!("{}; using {}", e, api::config::DEFAULT_API_BASE_URL);
        ApiConfig::default()
    });
    tracing::info!("Notes API at {}", config.base_url);
    ApiClient::new(&config)
}

pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

#[component]
pub fn ApiProvider(children: Element) -> Element {
    let client = use_signal(make_client);
    use_context_provider(|| client);

    rsx! {
        {children}
    }
}
