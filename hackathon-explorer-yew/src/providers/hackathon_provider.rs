use crate::hooks::HackathonContext;
use hackathon_explorer_core::HackathonStore;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HackathonProviderProps {
    pub store: HackathonStore,
    pub children: Children,
}

/// Shares a hackathon store with every descendant
#[function_component(HackathonProvider)]
pub fn hackathon_provider(props: &HackathonProviderProps) -> Html {
    let context = HackathonContext {
        store: props.store.clone(),
    };

    html! {
        <ContextProvider<HackathonContext> {context}>
            {props.children.clone()}
        </ContextProvider<HackathonContext>>
    }
}
