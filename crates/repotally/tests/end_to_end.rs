//! End-to-end tests over a real reqwest transport.
//!
//! A canned HTTP/1.1 server on a loopback socket replays GitHub-shaped
//! responses, including `Link` pagination headers. Every response carries
//! `Connection: close`, so each request arrives on its own connection.

use std::collections::{HashMap, VecDeque};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;
use std::time::Duration;

use serde_json::json;

use repotally::github::GitHubClient;
use repotally::{format_report, list_repo_commit_summaries};

struct CannedResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

fn json_response(body: &serde_json::Value, link: Option<String>) -> CannedResponse {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(link) = link {
        headers.push(("Link".to_string(), link));
    }
    CannedResponse {
        status: 200,
        headers,
        body: serde_json::to_vec(body).expect("canned body serializes"),
    }
}

fn link_next(next_url: &str) -> String {
    format!("<{next_url}>; rel=\"next\", <https://api.github.com/some>; rel=\"last\"")
}

fn shas(prefix: &str, n: usize) -> serde_json::Value {
    json!(
        (0..n)
            .map(|i| json!({"sha": format!("{prefix}{i}")}))
            .collect::<Vec<_>>()
    )
}

/// Serve exactly `connections` requests, routed by request path.
fn serve(
    listener: TcpListener,
    mut routes: HashMap<String, VecDeque<CannedResponse>>,
    connections: usize,
) -> JoinHandle<Vec<String>> {
    std::thread::spawn(move || {
        let mut served_paths = Vec::new();
        for _ in 0..connections {
            let (mut stream, _) = listener.accept().expect("accept");
            stream
                .set_read_timeout(Some(Duration::from_secs(5)))
                .expect("set_read_timeout");

            let mut buf = Vec::new();
            let mut tmp = [0u8; 4096];
            loop {
                match stream.read(&mut tmp) {
                    Ok(0) => break,
                    Ok(n) => {
                        buf.extend_from_slice(&tmp[..n]);
                        if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                    Err(e) => panic!("read request: {e}"),
                }
            }

            let head = String::from_utf8_lossy(&buf);
            let path = head
                .split_whitespace()
                .nth(1)
                .unwrap_or_else(|| panic!("malformed request line: {head:?}"))
                .to_string();

            let resp = routes
                .get_mut(&path)
                .and_then(|q| q.pop_front())
                .unwrap_or_else(|| panic!("no canned response for {path}"));

            let mut out = format!(
                "HTTP/1.1 {} canned\r\nContent-Length: {}\r\nConnection: close\r\n",
                resp.status,
                resp.body.len()
            );
            for (k, v) in &resp.headers {
                out.push_str(&format!("{k}: {v}\r\n"));
            }
            out.push_str("\r\n");
            stream.write_all(out.as_bytes()).expect("write headers");
            stream.write_all(&resp.body).expect("write body");
            stream.flush().ok();

            served_paths.push(path);
        }
        served_paths
    })
}

fn route(routes: &mut HashMap<String, VecDeque<CannedResponse>>, path: &str, resp: CannedResponse) {
    routes.entry(path.to_string()).or_default().push_back(resp);
}

#[tokio::test]
async fn counts_commits_across_paginated_responses() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let base = format!("http://{addr}");

    let mut routes = HashMap::new();
    route(
        &mut routes,
        "/users/john/repos?type=owner&sort=full_name&per_page=100",
        json_response(
            &json!([
                {"name": "Triangle567", "full_name": "john/Triangle567"},
                {"name": "Square567", "full_name": "john/Square567"},
            ]),
            None,
        ),
    );
    route(
        &mut routes,
        "/repos/john/Triangle567/commits?per_page=100",
        json_response(&shas("a", 100), Some(link_next(&format!("{base}/next1")))),
    );
    route(&mut routes, "/next1", json_response(&shas("b", 1), None));
    route(
        &mut routes,
        "/repos/john/Square567/commits?per_page=100",
        json_response(&shas("c", 27), None),
    );

    let server = serve(listener, routes, 4);

    let client = GitHubClient::new(None, Duration::from_secs(5), 100)
        .expect("client builds")
        .with_base_url(&base);
    let summaries = list_repo_commit_summaries(&client, "john")
        .await
        .expect("summaries");

    assert_eq!(
        format_report(&summaries),
        "Repo: Triangle567 Number of commits: 101\nRepo: Square567 Number of commits: 27"
    );

    let served = server.join().expect("server thread");
    assert_eq!(
        served,
        vec![
            "/users/john/repos?type=owner&sort=full_name&per_page=100".to_string(),
            "/repos/john/Triangle567/commits?per_page=100".to_string(),
            "/next1".to_string(),
            "/repos/john/Square567/commits?per_page=100".to_string(),
        ]
    );
}

#[tokio::test]
async fn not_found_surfaces_without_any_commit_fetch() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let base = format!("http://{addr}");

    let mut routes = HashMap::new();
    route(
        &mut routes,
        "/users/nope/repos?type=owner&sort=full_name&per_page=100",
        CannedResponse {
            status: 404,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: b"{\"message\":\"Not Found\"}".to_vec(),
        },
    );

    let server = serve(listener, routes, 1);

    let client = GitHubClient::new(None, Duration::from_secs(5), 100)
        .expect("client builds")
        .with_base_url(&base);
    let err = list_repo_commit_summaries(&client, "nope")
        .await
        .expect_err("404 should fail");

    assert!(err.to_string().contains("404"));

    let served = server.join().expect("server thread");
    assert_eq!(served.len(), 1);
}
