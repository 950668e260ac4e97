use crate::components::HackathonsSection;
use crate::providers::HackathonProvider;
use hackathon_explorer_core::{HackathonStore, StoreError, StoreLoad};
use yew::prelude::*;

const BUNDLED_FEED: &str = include_str!("../assets/hackathons.json");

/// Extract the search text from the `q` URL query parameter
fn get_search_from_url() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    let query = url.search_params().get("q")?;

    tracing::info!("Found search query in URL: {}", query);
    Some(query)
}

fn load_store(feed: &str) -> Result<HackathonStore, StoreError> {
    let StoreLoad { store, rejected } = HackathonStore::from_json(feed)?;

    if !rejected.is_empty() {
        tracing::warn!("Skipped {} malformed hackathons", rejected.len());
    }
    tracing::info!("Loaded {} hackathons", store.len());
    Ok(store)
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_state(|| {
        load_store(BUNDLED_FEED).unwrap_or_else(|e| {
            tracing::error!("Failed to load hackathons: {}", e);
            HackathonStore::empty()
        })
    });

    let initial_search = use_state(|| get_search_from_url().map(AttrValue::from));

    html! {
        <div class="app">
            <HackathonProvider store={(*store).clone()}>
                <HackathonsSection initial_search={(*initial_search).clone()} />
            </HackathonProvider>
        </div>
    }
}
