use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub search_text: AttrValue,
    pub on_change: Callback<String>,

    #[prop_or_else(|| AttrValue::from("Search"))]
    pub placeholder: AttrValue,
}

/// Free-text search input
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="hackathon-search">
            <input
                class="hackathon-search__input"
                type="search"
                aria-label="Search hackathons"
                placeholder={props.placeholder.clone()}
                value={props.search_text.clone()}
                {oninput}
            />
        </div>
    }
}
