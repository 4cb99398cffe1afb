use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::IngestError;
use crate::models::{null_as_empty, RawVideo, Thumbnail};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Largest page the playlistItems endpoint accepts.
const PAGE_SIZE: &str = "50";

/// Minimal YouTube Data API v3 client: uploads playlist lookup and playlist paging.
pub struct YouTubeClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, IngestError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(IngestError::MissingApiKey);
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("channel-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(YouTubeClient {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at another API root (a proxy or a local stub).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve the playlist holding every upload of `channel_id`.
    pub async fn uploads_playlist(&self, channel_id: &str) -> Result<String, IngestError> {
        let response: ChannelListResponse = self
            .get_json("channels", &[("part", "contentDetails"), ("id", channel_id)])
            .await?;

        uploads_from_response(response)
            .ok_or_else(|| IngestError::ChannelNotFound(channel_id.to_string()))
    }

    /// Fetch every item of a playlist, following `nextPageToken` until the last page.
    ///
    /// `on_page` is called after each page with the number of videos collected so far.
    pub async fn playlist_videos(
        &self,
        playlist_id: &str,
        mut on_page: impl FnMut(usize),
    ) -> Result<Vec<RawVideo>, IngestError> {
        let mut videos = Vec::new();
        let mut page_token = String::new();
        let mut pages = 0usize;

        loop {
            let page: PlaylistItemListResponse = self
                .get_json(
                    "playlistItems",
                    &[
                        ("part", "snippet"),
                        ("maxResults", PAGE_SIZE),
                        ("playlistId", playlist_id),
                        ("pageToken", page_token.as_str()),
                    ],
                )
                .await?;

            pages += 1;
            videos.extend(page.items.into_iter().map(PlaylistItem::into_video));
            on_page(videos.len());
            debug!(page = pages, total = videos.len(), "fetched playlist page");

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = token,
                _ => break,
            }
        }

        Ok(videos)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T, IngestError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(%status, error = %e, "failed to read error body");
                    String::new()
                }
            };
            return Err(IngestError::Api { status, body });
        }

        Ok(response.json().await?)
    }
}

// ---------------------------------------------------------------------------
// Response shapes (only the fields we read)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelItem {
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
struct RelatedPlaylists {
    uploads: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    #[serde(default)]
    items: Vec<PlaylistItem>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    published_at: String,
    #[serde(default)]
    thumbnails: BTreeMap<String, Thumbnail>,
    resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    video_id: String,
}

impl PlaylistItem {
    fn into_video(self) -> RawVideo {
        let snippet = self.snippet;
        RawVideo {
            id: snippet.resource_id.video_id,
            title: snippet.title,
            description: snippet.description,
            published_at: snippet.published_at,
            thumbnails: snippet.thumbnails,
        }
    }
}

fn uploads_from_response(response: ChannelListResponse) -> Option<String> {
    response
        .items
        .into_iter()
        .next()
        .map(|item| item.content_details.related_playlists.uploads)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn item(id: &str, title: &str) -> serde_json::Value {
        serde_json::json!({
            "snippet": {
                "publishedAt": "2024-05-02T14:00:07Z",
                "title": title,
                "description": null,
                "resourceId": { "kind": "youtube#video", "videoId": id }
            }
        })
    }

    /// Canned API responses keyed on the request line.
    fn route(request_line: &str) -> (&'static str, String) {
        let body = if request_line.contains("/channels?") {
            if request_line.contains("id=UCmissing") {
                serde_json::json!({ "items": [] })
            } else {
                serde_json::json!({
                    "items": [{ "contentDetails": { "relatedPlaylists": { "uploads": "UUstub" } } }]
                })
            }
        } else if request_line.contains("playlistId=forbidden") {
            let body = serde_json::json!({
                "error": { "code": 403, "errors": [{ "reason": "quotaExceeded" }] }
            });
            return ("403 Forbidden", body.to_string());
        } else if request_line.contains("playlistId=single") {
            serde_json::json!({ "items": [item("s1", "Único")] })
        } else if request_line.contains("pageToken=PAGE2") {
            serde_json::json!({ "nextPageToken": "", "items": [item("v3", "Tercero")] })
        } else {
            serde_json::json!({
                "nextPageToken": "PAGE2",
                "items": [item("v1", "Primero"), item("v2", "Segundo")]
            })
        };
        ("200 OK", body.to_string())
    }

    /// Serve `route` on a local port; returns the base URL and the request lines seen.
    async fn spawn_api() -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let request = String::from_utf8_lossy(&buf);
                let line = request.lines().next().unwrap_or_default().to_string();
                let (status, body) = route(&line);
                seen.lock().unwrap().push(line);

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (format!("http://{addr}"), requests)
    }

    #[tokio::test]
    async fn test_pages_followed_until_empty_token() {
        let (base_url, requests) = spawn_api().await;
        let client = YouTubeClient::new("key").unwrap().with_base_url(base_url);

        let mut progress = Vec::new();
        let videos = client
            .playlist_videos("UUstub", |fetched| progress.push(fetched))
            .await
            .unwrap();

        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
        assert_eq!(progress, vec![2, 3]);
        assert_eq!(videos[2].title, "Tercero");
        assert_eq!(videos[2].description, "");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].contains("playlistId=UUstub"));
        assert!(requests[0].contains("key=key"));
        assert!(!requests[0].contains("PAGE2"));
        assert!(requests[1].contains("pageToken=PAGE2"));
    }

    #[tokio::test]
    async fn test_missing_token_ends_paging() {
        let (base_url, requests) = spawn_api().await;
        let client = YouTubeClient::new("key").unwrap().with_base_url(base_url);

        let videos = client.playlist_videos("single", |_| {}).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id, "s1");
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_error_status_surfaces_body() {
        let (base_url, _) = spawn_api().await;
        let client = YouTubeClient::new("key").unwrap().with_base_url(base_url);

        match client.playlist_videos("forbidden", |_| {}).await {
            Err(IngestError::Api { status, body }) => {
                assert_eq!(status, reqwest::StatusCode::FORBIDDEN);
                assert!(body.contains("quotaExceeded"));
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_uploads_playlist_lookup() {
        let (base_url, _) = spawn_api().await;
        let client = YouTubeClient::new("key").unwrap().with_base_url(base_url);

        assert_eq!(client.uploads_playlist("UCstub").await.unwrap(), "UUstub");
        assert!(matches!(
            client.uploads_playlist("UCmissing").await,
            Err(IngestError::ChannelNotFound(id)) if id == "UCmissing"
        ));
    }

    #[test]
    fn test_null_snippet_text_reads_as_empty() {
        let json = r#"{
            "items": [{
                "snippet": {
                    "title": null,
                    "description": null,
                    "publishedAt": null,
                    "resourceId": { "videoId": "n" }
                }
            }]
        }"#;
        let page: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        let video = page.items.into_iter().next().unwrap().into_video();
        assert_eq!(video.id, "n");
        assert_eq!(video.title, "");
        assert_eq!(video.description, "");
        assert_eq!(video.published_at, "");
    }

    #[test]
    fn test_parse_channel_response() {
        let json = r#"{
            "kind": "youtube#channelListResponse",
            "items": [{
                "id": "UCjbEAhCd_8bEEbPbs4kJPEA",
                "contentDetails": {
                    "relatedPlaylists": { "likes": "", "uploads": "UUjbEAhCd_8bEEbPbs4kJPEA" }
                }
            }]
        }"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            uploads_from_response(response),
            Some("UUjbEAhCd_8bEEbPbs4kJPEA".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_channel() {
        let json = r#"{ "kind": "youtube#channelListResponse", "pageInfo": { "totalResults": 0 } }"#;
        let response: ChannelListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(uploads_from_response(response), None);
    }

    #[test]
    fn test_parse_playlist_page() {
        let json = r#"{
            "nextPageToken": "CDIQAA",
            "items": [
                {
                    "snippet": {
                        "publishedAt": "2024-05-02T14:00:07Z",
                        "title": "Qué es el Gamma Exposure (GEX)",
                        "description": "Dealers y cobertura",
                        "thumbnails": {
                            "default": { "url": "https://i.ytimg.com/vi/abc/default.jpg", "width": 120, "height": 90 },
                            "medium": { "url": "https://i.ytimg.com/vi/abc/mqdefault.jpg", "width": 320, "height": 180 }
                        },
                        "resourceId": { "kind": "youtube#video", "videoId": "abc" }
                    }
                },
                {
                    "snippet": {
                        "publishedAt": "2024-05-01T10:00:00Z",
                        "title": "Deleted video",
                        "description": "This video is unavailable.",
                        "resourceId": { "kind": "youtube#video", "videoId": "gone" }
                    }
                }
            ]
        }"#;
        let page: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CDIQAA"));

        let videos: Vec<RawVideo> = page.items.into_iter().map(PlaylistItem::into_video).collect();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].id, "abc");
        assert_eq!(videos[0].published_at, "2024-05-02T14:00:07Z");
        assert_eq!(videos[0].thumbnails["medium"].width, Some(320));
        assert!(videos[1].thumbnails.is_empty());
    }

    #[test]
    fn test_last_page_has_no_token() {
        let page: PlaylistItemListResponse = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert!(page.next_page_token.is_none());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            YouTubeClient::new("  "),
            Err(IngestError::MissingApiKey)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = YouTubeClient::new("key")
            .unwrap()
            .with_base_url("http://localhost:8080/v3/");
        assert_eq!(client.base_url, "http://localhost:8080/v3");
    }
}
