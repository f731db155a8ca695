use super::*;

// =============================================================
// Tag parsing
// =============================================================

#[test]
fn parse_tags_trims_and_drops_empties() {
    assert_eq!(parse_tags("a, b ,, c"), vec!["a", "b", "c"]);
}

#[test]
fn parse_tags_of_blank_input_is_empty() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags("  ,  , ").is_empty());
}

#[test]
fn parse_tags_keeps_inner_spaces() {
    assert_eq!(parse_tags("first half, set piece"), vec!["first half", "set piece"]);
}

// =============================================================
// Optional fields
// =============================================================

#[test]
fn optional_field_blank_is_none() {
    assert_eq!(optional_field(""), None);
    assert_eq!(optional_field("   "), None);
}

#[test]
fn optional_field_keeps_value_verbatim() {
    assert_eq!(optional_field("U16 Red"), Some("U16 Red".to_owned()));
}

// =============================================================
// NewVideo
// =============================================================

#[test]
fn new_video_requires_title_and_url() {
    assert!(NewVideo::new("", "http://cdn/clip.mp4", "", "", "").is_none());
    assert!(NewVideo::new("  ", "http://cdn/clip.mp4", "", "", "").is_none());
    assert!(NewVideo::new("Derby", "", "", "", "").is_none());
    assert!(NewVideo::new("Derby", "http://cdn/clip.mp4", "", "", "").is_some());
}

#[test]
fn new_video_omits_blank_team_and_player_from_json() {
    let video = NewVideo::new("Derby", "http://cdn/clip.mp4", "", " ", "a,b").expect("payload");
    let json = serde_json::to_value(&video).expect("serialize");

    let object = json.as_object().expect("object");
    assert!(!object.contains_key("team"));
    assert!(!object.contains_key("player"));
    assert_eq!(json["title"], "Derby");
    assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
}

#[test]
fn new_video_sends_present_team_and_player() {
    let video =
        NewVideo::new("Derby", "http://cdn/clip.mp4", "U16 Red", "Sam", "").expect("payload");
    let json = serde_json::to_value(&video).expect("serialize");

    assert_eq!(json["team"], "U16 Red");
    assert_eq!(json["player"], "Sam");
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn video_decodes_underscore_id_and_defaults() {
    let video: Video = serde_json::from_value(serde_json::json!({
        "_id": "v-1",
        "title": "Derby",
        "url": "http://cdn/clip.mp4"
    }))
    .expect("decode");

    assert_eq!(video.id, "v-1");
    assert_eq!(video.team, None);
    assert_eq!(video.player, None);
    assert!(video.tags.is_empty());
}

#[test]
fn marker_decodes_minimal_record() {
    let marker: Marker = serde_json::from_value(serde_json::json!({ "time": 12.345 }))
        .expect("decode");

    assert_eq!(marker.time, 12.345);
    assert_eq!(marker.note, None);
    assert_eq!(marker.tag, None);
}

#[test]
fn marker_label_falls_back_for_missing_or_empty_note() {
    let mut marker: Marker =
        serde_json::from_value(serde_json::json!({ "time": 1.0 })).expect("decode");
    assert_eq!(marker.label(), "Marker");

    marker.note = Some(String::new());
    assert_eq!(marker.label(), "Marker");

    marker.note = Some("nice pass".to_owned());
    assert_eq!(marker.label(), "nice pass");
}

#[test]
fn new_marker_serializes_full_body() {
    let marker = NewMarker {
        video_id: "v-1".to_owned(),
        time: 12.345,
        note: "nice pass".to_owned(),
    };
    let json = serde_json::to_value(&marker).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({ "video_id": "v-1", "time": 12.345, "note": "nice pass" })
    );
}
