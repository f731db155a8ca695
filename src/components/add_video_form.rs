//! Add-video form: required title/url, optional team/player/tags.
//!
//! The field signals are owned by the studio page so it can clear them
//! after a confirmed save; a failed save keeps everything the user typed.
//! Validation happens at this boundary — a submission with a blank
//! required field never reaches the network layer.

use leptos::prelude::*;

use crate::net::types::NewVideo;

/// The form's field signals, created by the page that owns the form.
#[derive(Clone, Copy)]
pub struct VideoFormFields {
    pub title: RwSignal<String>,
    pub url: RwSignal<String>,
    pub team: RwSignal<String>,
    pub player: RwSignal<String>,
    pub tags: RwSignal<String>,
}

impl VideoFormFields {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            url: RwSignal::new(String::new()),
            team: RwSignal::new(String::new()),
            player: RwSignal::new(String::new()),
            tags: RwSignal::new(String::new()),
        }
    }

    /// Both required fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.title.get().trim().is_empty() && !self.url.get().trim().is_empty()
    }

    /// Build the creation payload from the current field values.
    pub fn to_new_video(&self) -> Option<NewVideo> {
        NewVideo::new(
            &self.title.get(),
            &self.url.get(),
            &self.team.get(),
            &self.player.get(),
            &self.tags.get(),
        )
    }

    pub fn clear(&self) {
        self.title.set(String::new());
        self.url.set(String::new());
        self.team.set(String::new());
        self.player.set(String::new());
        self.tags.set(String::new());
    }
}

impl Default for VideoFormFields {
    fn default() -> Self {
        Self::new()
    }
}

/// Add-video form. Submit is disabled while a save is in flight or a
/// required field is blank.
#[component]
pub fn AddVideoForm(
    fields: VideoFormFields,
    saving: Signal<bool>,
    on_submit: Callback<NewVideo>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(payload) = fields.to_new_video() else {
            return;
        };
        on_submit.run(payload);
    };

    view! {
        <form class="add-video-form" on:submit=submit>
            <h3>"Add Video"</h3>
            <input
                class="add-video-form__input"
                type="text"
                placeholder="Title"
                prop:value=move || fields.title.get()
                on:input=move |ev| fields.title.set(event_target_value(&ev))
            />
            <input
                class="add-video-form__input"
                type="text"
                placeholder="Direct video URL (mp4/webm)"
                prop:value=move || fields.url.get()
                on:input=move |ev| fields.url.set(event_target_value(&ev))
            />
            <div class="add-video-form__pair">
                <input
                    class="add-video-form__input"
                    type="text"
                    placeholder="Team"
                    prop:value=move || fields.team.get()
                    on:input=move |ev| fields.team.set(event_target_value(&ev))
                />
                <input
                    class="add-video-form__input"
                    type="text"
                    placeholder="Player"
                    prop:value=move || fields.player.get()
                    on:input=move |ev| fields.player.set(event_target_value(&ev))
                />
            </div>
            <input
                class="add-video-form__input"
                type="text"
                placeholder="Tags (comma separated)"
                prop:value=move || fields.tags.get()
                on:input=move |ev| fields.tags.set(event_target_value(&ev))
            />
            <button
                class="btn btn--primary add-video-form__submit"
                type="submit"
                disabled=move || saving.get() || !fields.is_complete()
            >
                {move || if saving.get() { "Saving..." } else { "Save Video" }}
            </button>
        </form>
    }
}
