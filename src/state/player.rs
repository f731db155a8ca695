#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

/// Live transport state mirrored from the `<video>` element.
///
/// The element is the source of truth; this is only a render cache of its
/// last reported event. `timeupdate` fires at whatever rate the browser
/// chooses, so the transitions are plain idempotent assignments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub current_time: f64,
    pub is_playing: bool,
}

impl PlayerState {
    pub fn set_position(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    pub fn mark_playing(&mut self) {
        self.is_playing = true;
    }

    pub fn mark_paused(&mut self) {
        self.is_playing = false;
    }
}

/// A note captured at the playback position current when the user hit the
/// capture button. Raised from the panel to the studio page, which binds
/// it to the selected video and persists it.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerDraft {
    pub time: f64,
    pub note: String,
}
