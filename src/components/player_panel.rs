//! Playback panel: the `<video>` surface, its mirrored transport state,
//! and marker capture.
//!
//! The element is subscribed declaratively (`on:timeupdate`, `on:play`,
//! `on:pause`), so the listeners live exactly as long as the node does —
//! the studio page recreates this panel whenever the selection changes,
//! which detaches the old element together with its subscriptions. The
//! mirrored [`PlayerState`] is a render cache only; anything that acts on
//! the element (capture, toggle, jump) reads or drives the element itself
//! through the node ref.

use leptos::prelude::*;

use crate::net::types::Marker;
use crate::state::player::{MarkerDraft, PlayerState};
use crate::util::format::format_seconds;

/// Media surface plus marker capture and the marker list for one video.
#[component]
pub fn PlayerPanel(
    src: String,
    markers: Signal<Vec<Marker>>,
    on_add_marker: Callback<MarkerDraft>,
) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let player = RwSignal::new(PlayerState::default());
    let draft_note = RwSignal::new(String::new());

    // Capture reads the element's position at click time instead of the
    // mirrored signal, which may lag right after a seek or play.
    let capture = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        on_add_marker.run(MarkerDraft {
            time: video.current_time(),
            note: draft_note.get(),
        });
        draft_note.set(String::new());
    };

    let toggle_playback = move |_| {
        let Some(video) = video_ref.get() else {
            return;
        };
        if video.paused() {
            let _ = video.play();
        } else {
            let _ = video.pause();
        }
    };

    let jump = move |time: f64| {
        let Some(video) = video_ref.get() else {
            return;
        };
        video.set_current_time(time);
        let _ = video.play();
    };

    let badge = move || {
        let state = player.get();
        format!(
            "{} {}",
            format_seconds(state.current_time),
            if state.is_playing { "▶" } else { "⏸" }
        )
    };

    view! {
        <div class="player-panel">
            <div class="player-panel__surface">
                <video
                    class="player-panel__video"
                    node_ref=video_ref
                    src=src
                    controls=true
                    on:timeupdate=move |_| {
                        if let Some(video) = video_ref.get() {
                            player.update(|p| p.set_position(video.current_time()));
                        }
                    }
                    on:play=move |_| player.update(PlayerState::mark_playing)
                    on:pause=move |_| player.update(PlayerState::mark_paused)
                ></video>
                <div class="player-panel__badge">{badge}</div>
            </div>

            <div class="player-panel__lower">
                <div class="player-panel__capture">
                    <div class="player-panel__capture-row">
                        <input
                            class="player-panel__note-input"
                            type="text"
                            placeholder="Add a note"
                            prop:value=move || draft_note.get()
                            on:input=move |ev| draft_note.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" on:click=capture>
                            {move || format!("Add marker @ {}", format_seconds(player.get().current_time))}
                        </button>
                    </div>
                    <button class="player-panel__toggle" on:click=toggle_playback>
                        {move || if player.get().is_playing { "Pause" } else { "Play" }}
                    </button>
                </div>

                <div class="player-panel__marker-pane">
                    <h3>"Markers"</h3>
                    {move || {
                        let items = markers.get();
                        if items.is_empty() {
                            return view! {
                                <p class="player-panel__empty">"No markers yet."</p>
                            }
                                .into_any();
                        }

                        view! {
                            <ul class="player-panel__markers">
                                {items
                                    .into_iter()
                                    .map(|m| {
                                        let time = m.time;
                                        let label = m.label().to_owned();
                                        let tag = m.tag.clone().filter(|t| !t.is_empty());
                                        view! {
                                            <li class="player-panel__marker">
                                                <div>
                                                    <p class="player-panel__marker-note">{label}</p>
                                                    <p class="player-panel__marker-time">
                                                        {format_seconds(time)}
                                                        {tag.map(|t| view! {
                                                            <span class="player-panel__marker-tag">
                                                                {format!(" • {t}")}
                                                            </span>
                                                        })}
                                                    </p>
                                                </div>
                                                <button
                                                    class="player-panel__jump"
                                                    on:click=move |_| jump(time)
                                                >
                                                    "Jump"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
