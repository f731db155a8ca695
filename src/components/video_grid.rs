//! "Your Videos" grid with clickable, selectable cards.

use leptos::prelude::*;

use crate::net::types::Video;
use crate::state::library::LibraryState;

/// Grid of library videos. Clicking a card selects that video; the studio
/// page reacts to the selection change by loading its markers.
#[component]
pub fn VideoGrid() -> impl IntoView {
    let library = expect_context::<RwSignal<LibraryState>>();

    let on_select = Callback::new(move |id: String| library.update(|l| l.select(id)));

    view! {
        <div class="video-grid">
            <h3>"Your Videos"</h3>
            {move || {
                let state = library.get();
                if state.videos.is_empty() {
                    return view! {
                        <p class="video-grid__empty">"No videos yet."</p>
                    }
                        .into_any();
                }

                let selected = state.selected;
                view! {
                    <ul class="video-grid__cards">
                        {state
                            .videos
                            .into_iter()
                            .map(|video| {
                                let active = selected.as_deref() == Some(video.id.as_str());
                                view! {
                                    <VideoCard video=video active=active on_select=on_select/>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}

/// One clickable card: title, url, and tag chips when present.
#[component]
fn VideoCard(video: Video, active: bool, on_select: Callback<String>) -> impl IntoView {
    let id = video.id.clone();
    let tags = video.tags.clone();

    view! {
        <li
            class="video-grid__card"
            class=("video-grid__card--active", move || active)
            on:click=move |_| on_select.run(id.clone())
        >
            <p class="video-grid__card-title">{video.title.clone()}</p>
            <p class="video-grid__card-url">{video.url.clone()}</p>
            {(!tags.is_empty())
                .then(|| view! {
                    <div class="video-grid__tags">
                        {tags
                            .iter()
                            .map(|tag| view! { <span class="video-grid__tag">{tag.clone()}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                })}
        </li>
    }
}
