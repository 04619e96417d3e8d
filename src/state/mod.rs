use crate::api::{ApiClient, ApiStatus};
use crate::config::EnvConfig;
use crate::locale::Locale;
use crate::uikit;
use leptos::prelude::*;

pub(crate) const SHARED_MESSAGE_KEY: &str = "shared:message";

#[derive(Clone)]
pub(crate) struct AppState {
    pub env: StoredValue<EnvConfig>,
    pub api_client: StoredValue<ApiClient>,
    pub api_status: RwSignal<ApiStatus>,

    pub locale: RwSignal<Locale>,
    /// Translated "Locale" label from the i18n store.
    pub locale_label: RwSignal<String>,

    /// Mirrors the cross-module shared value under [`SHARED_MESSAGE_KEY`].
    pub shared_message: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_env(EnvConfig::new(), uikit::shared_string(SHARED_MESSAGE_KEY))
    }

    pub fn with_env(env: EnvConfig, shared_message: String) -> Self {
        let api_client = ApiClient::from_env(&env);
        Self {
            env: StoredValue::new(env),
            api_client: StoredValue::new(api_client),
            api_status: RwSignal::new(ApiStatus::Idle),
            locale: RwSignal::new(Locale::default()),
            locale_label: RwSignal::new(String::new()),
            shared_message: RwSignal::new(shared_message),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
