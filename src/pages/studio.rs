//! Studio page — owns the library state and all traffic to the remote API.
//!
//! Data flow: the video list loads on mount and auto-selects the first
//! entry; whenever the selection moves to a new id, that video's markers
//! load; the panel raises captured drafts back up and the page persists
//! them. Lists are only ever replaced after a confirmed fetch — writes
//! never mutate local state optimistically.
//!
//! ERROR HANDLING
//! ==============
//! Reads fail silently toward the user (previous data stays on screen;
//! the failure is logged and recorded in `DiagState`). Writes surface a
//! blocking alert and leave the lists and the form untouched so the user
//! can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::add_video_form::{AddVideoForm, VideoFormFields};
use crate::components::player_panel::PlayerPanel;
use crate::components::video_grid::VideoGrid;
use crate::net::api::ApiClient;
use crate::net::types::{NewMarker, NewVideo};
use crate::state::diag::{DiagState, ReadOp};
use crate::state::library::LibraryState;
use crate::state::player::MarkerDraft;

/// The single page: player and grid on one side, forms on the other.
#[component]
pub fn StudioPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let library = expect_context::<RwSignal<LibraryState>>();
    let diag = expect_context::<RwSignal<DiagState>>();

    let form = VideoFormFields::new();

    // Initial library load.
    {
        let api = api.clone();
        spawn_local(async move {
            load_videos(&api, library, diag).await;
        });
    }

    // Load markers whenever the selection moves to an id we have not
    // loaded yet. The guard keeps marker replacements (which also touch
    // `library`) from re-triggering a fetch for the same selection.
    let last_loaded = RwSignal::new(None::<String>);
    {
        let api = api.clone();
        Effect::new(move || {
            let Some(id) = library.with(|l| l.selected.clone()) else {
                return;
            };
            if last_loaded.get().as_deref() == Some(id.as_str()) {
                return;
            }
            last_loaded.set(Some(id.clone()));

            let api = api.clone();
            spawn_local(async move {
                load_markers(&api, library, diag, id).await;
            });
        });
    }

    let on_add_video = {
        let api = api.clone();
        Callback::new(move |payload: NewVideo| {
            let api = api.clone();
            spawn_local(async move {
                create_video(&api, library, diag, form, payload).await;
            });
        })
    };

    let on_add_marker = {
        let api = api.clone();
        Callback::new(move |draft: MarkerDraft| {
            // Capturing without a selection is a silent no-op.
            let Some(video_id) = library.with(|l| l.selected.clone()) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                create_marker(&api, library, diag, video_id, draft).await;
            });
        })
    };

    // Memoized so marker reloads do not recreate the panel (and with it
    // the media element) when the selected video itself has not changed.
    let selected_video = Memo::new(move |_| library.with(|l| l.selected_video().cloned()));
    let markers = Signal::derive(move || library.with(|l| l.markers.clone()));
    let saving = Signal::derive(move || library.with(|l| l.saving));

    view! {
        <div class="studio-page">
            <header class="studio-page__header">
                <h1>"Touchline Studio"</h1>
                <a class="studio-page__health" href="/test">"Health Check"</a>
            </header>

            <main class="studio-page__main">
                <section class="studio-page__review">
                    {move || match selected_video.get() {
                        Some(video) => view! {
                            <PlayerPanel
                                src=video.url
                                markers=markers
                                on_add_marker=on_add_marker
                            />
                        }
                            .into_any(),
                        None => view! {
                            <div class="studio-page__placeholder">
                                <p>"Add a video to get started"</p>
                            </div>
                        }
                            .into_any(),
                    }}
                    <VideoGrid/>
                </section>

                <aside class="studio-page__side">
                    <AddVideoForm fields=form saving=saving on_submit=on_add_video/>
                    <div class="studio-page__planner">
                        <h3>"Session Planner"</h3>
                        <p>"Coming soon: build training sessions and attach videos."</p>
                    </div>
                </aside>
            </main>

            <footer class="studio-page__footer">"Film review for the touchline"</footer>
        </div>
    }
}

/// Fetch the video collection and replace the library's list. Read
/// failures keep the previous list and are only logged and recorded.
async fn load_videos(api: &ApiClient, library: RwSignal<LibraryState>, diag: RwSignal<DiagState>) {
    match api.fetch_videos().await {
        Ok(videos) => library.update(|l| l.apply_videos(videos)),
        Err(e) => {
            log::warn!("video list load failed: {e}");
            diag.update(|d| d.record(ReadOp::Videos, e.to_string()));
        }
    }
}

/// Fetch the markers for `video_id`. The response is applied through the
/// library's stale-selection guard, so a slow response for an old
/// selection is dropped instead of overwriting the current list.
async fn load_markers(
    api: &ApiClient,
    library: RwSignal<LibraryState>,
    diag: RwSignal<DiagState>,
    video_id: String,
) {
    match api.fetch_markers(&video_id).await {
        Ok(markers) => library.update(|l| l.apply_markers(&video_id, markers)),
        Err(e) => {
            log::warn!("marker load failed for {video_id}: {e}");
            diag.update(|d| d.record(ReadOp::Markers, e.to_string()));
        }
    }
}

/// Persist a new video, then reload the collection and clear the form.
/// On failure the form keeps its values and the user sees an alert.
async fn create_video(
    api: &ApiClient,
    library: RwSignal<LibraryState>,
    diag: RwSignal<DiagState>,
    form: VideoFormFields,
    payload: NewVideo,
) {
    library.update(|l| l.saving = true);
    match api.create_video(&payload).await {
        Ok(()) => {
            form.clear();
            load_videos(api, library, diag).await;
        }
        Err(e) => alert(&format!("Failed to save video: {e}")),
    }
    library.update(|l| l.saving = false);
}

/// Persist a captured marker against `video_id`, then reload that video's
/// markers.
async fn create_marker(
    api: &ApiClient,
    library: RwSignal<LibraryState>,
    diag: RwSignal<DiagState>,
    video_id: String,
    draft: MarkerDraft,
) {
    library.update(|l| l.saving = true);
    let payload = NewMarker {
        video_id: video_id.clone(),
        time: draft.time,
        note: draft.note,
    };
    match api.create_marker(&payload).await {
        Ok(()) => load_markers(api, library, diag, video_id).await,
        Err(e) => alert(&format!("Failed to add marker: {e}")),
    }
    library.update(|l| l.saving = false);
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
