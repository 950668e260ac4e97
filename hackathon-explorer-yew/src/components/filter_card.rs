use hackathon_explorer_core::{FilterOptions, Level, StatusFlag};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterCardProps {
    /// Attached to the `<details>` root so the owner can close it
    pub filter_ref: NodeRef,
    pub options: FilterOptions,
    pub on_change: Callback<FilterOptions>,

    #[prop_or_else(|| AttrValue::from("Filter"))]
    pub label: AttrValue,
}

/// Dropdown with the status and level toggles
#[function_component(FilterCard)]
pub fn filter_card(props: &FilterCardProps) -> Html {
    let options = props.options;

    let status_toggles = StatusFlag::ALL.into_iter().map(|flag| {
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |_: Event| {
            let mut next = options;
            next.toggle_status(flag);
            on_change.emit(next);
        });

        html! {
            <label class="hackathon-filter__option" key={flag.label()}>
                <input
                    type="checkbox"
                    checked={options.is_status_set(flag)}
                    {onchange}
                />
                <span>{flag.label()}</span>
            </label>
        }
    });

    let level_toggles = Level::ALL.into_iter().map(|level| {
        let on_change = props.on_change.clone();
        let onchange = Callback::from(move |_: Event| {
            let mut next = options;
            next.toggle_level(level);
            on_change.emit(next);
        });

        html! {
            <label class="hackathon-filter__option" key={level.as_str()}>
                <input
                    type="checkbox"
                    checked={options.is_level_set(level)}
                    {onchange}
                />
                <span>{level.as_str()}</span>
            </label>
        }
    });

    html! {
        <details class="hackathon-filter" ref={props.filter_ref.clone()}>
            <summary class="hackathon-filter__summary">{props.label.clone()}</summary>
            <div class="hackathon-filter__menu">
                <fieldset class="hackathon-filter__group">
                    <legend class="hackathon-filter__legend">{"Status"}</legend>
                    {for status_toggles}
                </fieldset>
                <fieldset class="hackathon-filter__group">
                    <legend class="hackathon-filter__legend">{"Level"}</legend>
                    {for level_toggles}
                </fieldset>
            </div>
        </details>
    }
}
