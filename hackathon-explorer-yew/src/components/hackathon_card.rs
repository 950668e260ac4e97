use chrono::Utc;
use hackathon_explorer_core::{Hackathon, HackathonStatus};
use yew::prelude::*;

const EXCERPT_CHARS: usize = 140;

#[derive(Properties, PartialEq)]
pub struct HackathonCardProps {
    pub hackathon: Hackathon,
}

/// One hackathon in the results grid
#[function_component(HackathonCard)]
pub fn hackathon_card(props: &HackathonCardProps) -> Html {
    let hackathon = &props.hackathon;
    let now = Utc::now();
    let status = hackathon.status_at(now);

    let status_class = match status {
        HackathonStatus::Upcoming => "upcoming",
        HackathonStatus::Active => "active",
        HackathonStatus::Past => "past",
    };

    html! {
        <article class={classes!("hackathon-card", status_class)}>
            {if let Some(image) = &hackathon.image {
                html! {
                    <img class="hackathon-card__image" src={image.clone()} alt={hackathon.name.clone()} />
                }
            } else {
                html! {}
            }}
            <div class="hackathon-card__body">
                <span class="hackathon-card__status">{status.as_str()}</span>
                <h3 class="hackathon-card__name">{&hackathon.name}</h3>
                <p class="hackathon-card__schedule">{hackathon.schedule_at(now).to_string()}</p>
                <span class="hackathon-card__level">{hackathon.level.as_str()}</span>
                <p class="hackathon-card__description">{excerpt(&hackathon.description, EXCERPT_CHARS)}</p>
            </div>
        </article>
    }
}

/// First `max` characters of `text`, with an ellipsis when cut
fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
