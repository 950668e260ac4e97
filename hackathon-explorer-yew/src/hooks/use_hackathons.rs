use hackathon_explorer_core::HackathonStore;
use yew::prelude::*;

/// Hackathon list shared with every view below a `HackathonProvider`.
///
/// Read-only: views get the store but no way to change it.
#[derive(Clone, PartialEq)]
pub struct HackathonContext {
    pub store: HackathonStore,
}

/// Hook to access the shared hackathon list
///
/// # Example
///
/// ```rust,no_run
/// use hackathon_explorer_core::HackathonSource;
/// use hackathon_explorer_yew::use_hackathons;
/// use yew::prelude::*;
///
/// #[function_component(Names)]
/// fn names() -> Html {
///     let store = use_hackathons();
///     html! {
///         <ul>{for store.hackathons().iter().map(|h| html! { <li>{&h.name}</li> })}</ul>
///     }
/// }
/// ```
#[hook]
pub fn use_hackathons() -> HackathonStore {
    use_context::<HackathonContext>()
        .expect("use_hackathons must be used within a HackathonProvider")
        .store
}
