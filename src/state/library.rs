#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use crate::net::types::{Marker, Video};

/// Collection state owned by the studio page: the video library, the
/// current selection, that selection's markers, and the write-in-flight
/// flag.
///
/// Lists are replaced wholesale on every successful fetch; "reload after
/// mutation" is the only invalidation strategy.
#[derive(Clone, Debug, Default)]
pub struct LibraryState {
    pub videos: Vec<Video>,
    pub selected: Option<String>,
    pub markers: Vec<Marker>,
    pub saving: bool,
}

impl LibraryState {
    /// Replace the video collection with a freshly fetched list.
    ///
    /// When nothing is selected yet, the first video in server order
    /// becomes the selection. An existing selection is kept even if the
    /// new list no longer contains it; dependent views fall back to their
    /// placeholder state through [`selected_video`](Self::selected_video).
    pub fn apply_videos(&mut self, videos: Vec<Video>) {
        if self.selected.is_none() {
            self.selected = videos.first().map(|v| v.id.clone());
        }
        self.videos = videos;
    }

    /// Replace the marker list with the response for `for_video`.
    ///
    /// A response for a video that is no longer selected is dropped, so a
    /// slow load started under an earlier selection cannot overwrite the
    /// markers of a newer one.
    pub fn apply_markers(&mut self, for_video: &str, markers: Vec<Marker>) {
        if self.selected.as_deref() == Some(for_video) {
            self.markers = markers;
        }
    }

    pub fn select(&mut self, id: String) {
        self.selected = Some(id);
    }

    /// The currently selected video, or `None` when there is no selection
    /// or the selected id is absent from the loaded list.
    pub fn selected_video(&self) -> Option<&Video> {
        let id = self.selected.as_deref()?;
        self.videos.iter().find(|v| v.id == id)
    }
}
