//! Root application component wiring configuration and shared state.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::pages::studio::StudioPage;
use crate::state::diag::DiagState;
use crate::state::library::LibraryState;

/// Root application component.
///
/// Resolves the configuration once, builds the API client from it, and
/// provides both plus the shared state signals as context for the page
/// tree. There is a single page; the `/test` health check is served
/// outside this application.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    let library = RwSignal::new(LibraryState::default());
    let diag = RwSignal::new(DiagState::default());

    provide_context(ApiClient::new(config.api_base.clone()));
    provide_context(config);
    provide_context(library);
    provide_context(diag);

    view! {
        <Title text="Touchline Studio"/>
        <StudioPage/>
    }
}
