use chesscom::{ChessCom, ChessError, Config, HttpTransport, Transport};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: String) -> Config {
    Config {
        api_base_url: base_url,
        http_timeout_seconds: 5,
        user_agent: "chesscom-tests/1.0 (dev@example.com)".to_string(),
        log_file_path: None,
    }
}

/// Runs blocking client code off the async runtime driving the mock server.
async fn blocking<R, F>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

#[tokio::test]
async fn test_fetch_country_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/country/AU"))
        .and(header("user-agent", "chesscom-tests/1.0 (dev@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@id": "https://api.chess.com/pub/country/AU",
            "name": "Australia",
            "code": "AU"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let country = blocking(move || {
        let client = ChessCom::new(&config)?;
        client.countries().details("au")
    })
    .await
    .unwrap();

    assert_eq!(country.code, "AU");
    assert_eq!(country.id, "https://api.chess.com/pub/country/AU");
}

#[tokio::test]
async fn test_not_found_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/player/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 0,
            "message": "User \"nobody\" not found."
        })))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || ChessCom::new(&config)?.players().profile("nobody")).await;

    assert!(matches!(result, Err(ChessError::ApiNotFound { .. })));
}

#[tokio::test]
async fn test_rate_limit_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/leaderboards"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || ChessCom::new(&config)?.leaderboards().all()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ChessError::ApiRateLimit { .. }));
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_server_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/puzzle"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || ChessCom::new(&config)?.puzzles().daily()).await;

    assert!(matches!(
        result,
        Err(ChessError::ApiServerError { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/streamers"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || ChessCom::new(&config)?.streamers().all()).await;

    assert!(matches!(
        result,
        Err(ChessError::ApiClientError { status: 410, .. })
    ));
}

#[tokio::test]
async fn test_html_body_is_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/player/erik"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || ChessCom::new(&config)?.players().profile("erik")).await;

    assert!(matches!(result, Err(ChessError::ApiMalformedJson { .. })));
}

#[tokio::test]
async fn test_get_text_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/player/erik/games/2020/05/pgn"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[Event \"Live Chess\"]\n\n1. e4 *\n"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/pub/player/erik/games/2020/05/pgn", mock_server.uri());
    let text = blocking(move || {
        HttpTransport::new(5, "chesscom-tests/1.0")?.get_text(&url)
    })
    .await
    .unwrap();

    assert!(text.starts_with("[Event"));
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the discard port locally
    let config = test_config("http://127.0.0.1:9/pub".to_string());
    let result = blocking(move || ChessCom::new(&config)?.leaderboards().all()).await;

    let err = result.unwrap_err();
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_not_modified_status_is_unexpected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/club/chess-com-developer-community"))
        .respond_with(ResponseTemplate::new(304))
        .mount(&mock_server)
        .await;

    let config = test_config(format!("{}/pub", mock_server.uri()));
    let result = blocking(move || {
        ChessCom::new(&config)?
            .clubs()
            .details("chess-com-developer-community")
    })
    .await;

    let err = result.unwrap_err();
    assert!(matches!(err, ChessError::ApiUnexpectedStatus { status: 304, .. }));
    assert!(err.is_transport_error());
}
