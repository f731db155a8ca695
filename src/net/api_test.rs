use super::*;

#[test]
fn trailing_slash_in_base_url_is_trimmed() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.videos_url(), "http://localhost:8000/api/videos");
}

#[test]
fn videos_url_appends_collection_path() {
    let client = ApiClient::new("https://api.example.com");
    assert_eq!(client.videos_url(), "https://api.example.com/api/videos");
}

#[test]
fn markers_url_carries_the_video_id_query() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(
        client.markers_url("v-1"),
        "http://localhost:8000/api/analysis?video_id=v-1"
    );
}

#[test]
fn api_error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Http { status: 500 }.to_string(),
        "request failed with status 500"
    );
    assert_eq!(
        ApiError::Network("offline".to_owned()).to_string(),
        "network error: offline"
    );
}
