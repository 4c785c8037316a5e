// SPDX-License-Identifier: MPL-2.0
//! Remote fetch against a throw-away local HTTP server.

mod common;

use common::gif_with_frames;
use gif_extractor::error::{Error, NetworkError};
use gif_extractor::source::remote::{fetch_gif, FetchSettings};
use gif_extractor::source::SourceOrigin;
use reqwest::Url;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serves one canned response and reports the request line it received.
async fn serve_once(
    status: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
    delay: Duration,
) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = format!("http://{}", listener.local_addr().expect("local addr"));
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            match socket.read(&mut buffer).await {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buffer[..n]),
            }
        }
        let request_line = String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        let _ = request_tx.send(request_line);

        tokio::time::sleep(delay).await;

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&body).await;
        let _ = socket.shutdown().await;
    });

    (address, request_rx)
}

fn direct() -> FetchSettings {
    FetchSettings::direct(Duration::from_secs(5))
}

#[tokio::test]
async fn gif_response_becomes_a_source() {
    let gif = gif_with_frames(2);
    let (address, _) = serve_once("200 OK", "image/gif", gif.clone(), Duration::ZERO).await;
    let url = format!("{address}/images/dance.gif");

    let source = fetch_gif(&direct(), &url).await.expect("fetch failed");

    assert_eq!(source.name(), "dance.gif");
    assert_eq!(source.bytes(), gif.as_slice());
    assert_eq!(source.origin(), &SourceOrigin::Remote(url));
}

#[tokio::test]
async fn not_found_reports_the_status() {
    let (address, _) = serve_once("404 Not Found", "text/plain", b"nope".to_vec(), Duration::ZERO).await;

    let err = fetch_gif(&direct(), &format!("{address}/missing.gif"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::Network(NetworkError::Status {
            code: 404,
            reason: "Not Found".into(),
        })
    );
    assert!(err.to_string().starts_with("Failed to fetch GIF: 404"));
}

#[tokio::test]
async fn html_response_is_not_a_gif() {
    let (address, _) = serve_once(
        "200 OK",
        "text/html; charset=utf-8",
        b"<html></html>".to_vec(),
        Duration::ZERO,
    )
    .await;

    let err = fetch_gif(&direct(), &format!("{address}/page"))
        .await
        .unwrap_err();

    assert_eq!(err, Error::Network(NetworkError::NotGif));
    assert_eq!(err.to_string(), "The URL does not point to a valid GIF file.");
}

#[tokio::test]
async fn slow_server_times_out() {
    let (address, _) = serve_once(
        "200 OK",
        "image/gif",
        gif_with_frames(1),
        Duration::from_secs(5),
    )
    .await;
    let settings = FetchSettings::direct(Duration::from_secs(1));

    let err = fetch_gif(&settings, &format!("{address}/slow.gif"))
        .await
        .unwrap_err();

    assert_eq!(err, Error::Network(NetworkError::Timeout { secs: 1 }));
}

#[tokio::test]
async fn relay_receives_target_as_query() {
    let (address, request_line) =
        serve_once("200 OK", "image/gif", gif_with_frames(1), Duration::ZERO).await;
    let settings = FetchSettings {
        relay: Some(Url::parse(&format!("{address}/relay")).expect("relay url")),
        timeout: Duration::from_secs(5),
    };

    let source = fetch_gif(&settings, "https://example.com/cat.gif")
        .await
        .expect("fetch through relay failed");

    assert_eq!(source.name(), "cat.gif");
    let request_line = request_line.await.expect("request line");
    assert!(
        request_line.starts_with("GET /relay?url=https%3A%2F%2Fexample.com%2Fcat.gif "),
        "unexpected request line: {request_line}"
    );
}

#[tokio::test]
async fn malformed_url_is_rejected_before_any_request() {
    let err = fetch_gif(&direct(), "not a url").await.unwrap_err();
    assert_eq!(err, Error::Network(NetworkError::InvalidUrl));
}
