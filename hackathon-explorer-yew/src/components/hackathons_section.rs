use crate::components::{FilterCard, HackathonCard, SearchBar};
use crate::hooks::{use_click_outside, use_hackathons};
use chrono::Utc;
use hackathon_explorer_core::{filter_hackathons, ExplorerConfig, FilterOptions, HackathonSource};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HackathonsSectionProps {
    #[prop_or_default]
    pub config: ExplorerConfig,

    /// Pre-filled search text (e.g. from a deep link)
    #[prop_or_default]
    pub initial_search: Option<AttrValue>,
}

/// Searchable, filterable grid of hackathons
#[function_component(HackathonsSection)]
pub fn hackathons_section(props: &HackathonsSectionProps) -> Html {
    let store = use_hackathons();

    let search_text = use_state(|| {
        props
            .initial_search
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_default()
    });
    let filter_options = use_state(FilterOptions::default);
    let filter_ref = use_node_ref();

    use_click_outside(
        filter_ref.clone(),
        Callback::from(|root: Element| {
            if root.has_attribute("open") {
                tracing::debug!("Closing filter dropdown after outside click");
                if let Err(e) = root.remove_attribute("open") {
                    tracing::warn!("Failed to close filter dropdown: {:?}", e);
                }
            }
        }),
    );

    let on_search = {
        let search_text = search_text.clone();
        Callback::from(move |text: String| search_text.set(text))
    };

    let on_filter = {
        let filter_options = filter_options.clone();
        Callback::from(move |options: FilterOptions| {
            tracing::debug!("Filter options changed: {:?}", options);
            filter_options.set(options);
        })
    };

    let filtered = filter_hackathons(
        store.hackathons(),
        &search_text,
        &filter_options,
        Utc::now(),
    );

    let config = &props.config;

    html! {
        <section class="hackathons">
            <div class="hackathons__controls">
                <h2 class="hackathons__title">{&config.title}</h2>
                <div class="hackathons__toolbar">
                    <SearchBar
                        search_text={AttrValue::from((*search_text).clone())}
                        on_change={on_search}
                        placeholder={AttrValue::from(config.search_placeholder.clone())}
                    />
                    <FilterCard
                        filter_ref={filter_ref}
                        options={*filter_options}
                        on_change={on_filter}
                        label={AttrValue::from(config.filter_label.clone())}
                    />
                </div>
            </div>
            <div class="hackathons__results">
                {if filtered.is_empty() {
                    html! {
                        <h3 class="hackathons__empty">{&config.empty_message}</h3>
                    }
                } else {
                    html! {
                        <div class="hackathons__grid">
                            {for filtered.iter().map(|hackathon| html! {
                                <HackathonCard
                                    key={hackathon.id.to_string()}
                                    hackathon={(*hackathon).clone()}
                                />
                            })}
                        </div>
                    }
                }}
            </div>
        </section>
    }
}

