//! Integration tests for `YoutubeClient` using wiremock HTTP mocks.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ytcs_core::{CommentSource, SourceError};
use ytcs_youtube::{YoutubeClient, YoutubeError};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
        .with_retry_policy(0, 0)
}

fn thread(author: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "youtube#commentThread",
        "snippet": {
            "videoId": "vid",
            "topLevelComment": {
                "snippet": {
                    "authorDisplayName": author,
                    "textDisplay": text,
                    "textOriginal": text
                }
            },
            "totalReplyCount": 0
        }
    })
}

#[tokio::test]
async fn fetch_comments_returns_authors_and_text_in_order() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "kind": "youtube#commentThreadListResponse",
        "items": [
            thread("alice", "This video is amazing, I loved it!"),
            thread("bob", "This was terrible and a waste of time."),
            thread("carol", "It exists.")
        ]
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("part", "snippet"))
        .and(query_param("videoId", "vid"))
        .and(query_param("maxResults", "3"))
        .and(query_param("textFormat", "plainText"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client.fetch_comments("vid", 3).await.expect("comments");

    let authors: Vec<&str> = comments.iter().map(|c| c.author.as_str()).collect();
    assert_eq!(authors, ["alice", "bob", "carol"]);
    assert_eq!(comments[2].text, "It exists.");
}

#[tokio::test]
async fn follows_page_tokens_up_to_max_results() {
    let server = MockServer::start().await;

    let first_page: Vec<_> = (0..100).map(|i| thread("a", &format!("first {i}"))).collect();
    let second_page: Vec<_> = (0..100).map(|i| thread("b", &format!("second {i}"))).collect();

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "PAGE2"))
        .and(query_param("maxResults", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": second_page,
            "nextPageToken": "PAGE3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("maxResults", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": first_page,
            "nextPageToken": "PAGE2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client
        .fetch_top_level_comments("vid", 150)
        .await
        .expect("comments");

    assert_eq!(comments.len(), 150);
    assert_eq!(comments[0].text, "first 0");
    assert_eq!(comments[99].text, "first 99");
    assert_eq!(comments[100].text, "second 0");
}

#[tokio::test]
async fn empty_thread_list_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client.fetch_comments("quiet", 20).await.expect("comments");
    assert!(comments.is_empty());
}

#[tokio::test]
async fn zero_max_results_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client.fetch_comments("vid", 0).await.expect("comments");
    assert!(comments.is_empty());
}

#[tokio::test]
async fn comments_disabled_maps_to_rejected_source_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "The video identified by the videoId parameter has disabled comments.",
                "errors": [{ "reason": "commentsDisabled", "domain": "youtube.commentThread" }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_comments("vid", 5).await.unwrap_err();
    match err {
        SourceError::Rejected(msg) => assert!(msg.contains("commentsDisabled"), "{msg}"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_are_retried_inside_the_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "items": [thread("dave", "ok")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = YoutubeClient::with_base_url("test-key", 30, &server.uri())
        .expect("client")
        .with_retry_policy(2, 0);
    let comments = client.fetch_top_level_comments("vid", 1).await.expect("comments");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author, "dave");
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{ "snippet": { "topLevelComment": {} } }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch_top_level_comments("vid", 5).await.unwrap_err();
    assert!(matches!(err, YoutubeError::Deserialize { .. }), "{err:?}");
}

#[tokio::test]
async fn transport_errors_do_not_leak_the_api_key() {
    let client = YoutubeClient::with_base_url("SECRET-KEY-123", 5, "http://127.0.0.1:1/")
        .expect("client")
        .with_retry_policy(0, 0);

    let err = client.fetch_comments("abc", 5).await.unwrap_err();
    assert!(matches!(err, SourceError::Unreachable(_)), "{err:?}");
    assert!(!err.to_string().contains("SECRET-KEY-123"), "{err}");
    assert!(!format!("{err:?}").contains("SECRET-KEY-123"), "{err:?}");
}
