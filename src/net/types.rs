#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A stored video clip as returned by `GET /api/videos`.
///
/// The API names the identifier `_id`; everything past `title` and `url`
/// is optional metadata a coach may or may not have filled in. Videos are
/// immutable from the client's point of view.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Video {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A time-stamped annotation as returned by `GET /api/analysis`.
///
/// Markers are displayed in retrieval order; the client never re-sorts
/// them by time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Marker {
    #[serde(default)]
    pub video_id: Option<String>,
    pub time: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl Marker {
    /// Display label for the marker list: the note, or a placeholder when
    /// the note is absent or empty.
    pub fn label(&self) -> &str {
        self.note
            .as_deref()
            .filter(|note| !note.is_empty())
            .unwrap_or("Marker")
    }
}

/// Request body for `POST /api/videos`.
///
/// Blank `team`/`player` are omitted from the JSON entirely rather than
/// sent as empty strings.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewVideo {
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    pub tags: Vec<String>,
}

impl NewVideo {
    /// Build a creation payload from raw form fields.
    ///
    /// Returns `None` when the required `title` or `url` is blank; the
    /// form disables submission in that case, this is the last line of
    /// defense before the network.
    pub fn new(title: &str, url: &str, team: &str, player: &str, tags: &str) -> Option<Self> {
        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_owned(),
            url: url.to_owned(),
            team: optional_field(team),
            player: optional_field(player),
            tags: parse_tags(tags),
        })
    }
}

/// Request body for `POST /api/analysis`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewMarker {
    pub video_id: String,
    pub time: f64,
    pub note: String,
}

/// Split a comma-separated tag field into individual tags, trimming each
/// and dropping empties, so `"a, b ,, c"` becomes `["a", "b", "c"]`.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Treat a blank form field as absent.
pub fn optional_field(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_owned())
    }
}
