// SPDX-License-Identifier: Apache-2.0

mod ui_support;

use ui_support::{get, spawn_ui};

#[tokio::test]
async fn existing_assets_are_served_with_inferred_content_types() {
    let addr = spawn_ui().await;

    let css = get(addr, "/css/main.css").await;
    assert!(css.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(css.contains("content-type: text/css"));
    assert!(css.contains(".navbar-burger"));

    let js = get(addr, "/js/hamburger.js").await;
    assert!(js.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(js.contains("is-active"));

    let img = get(addr, "/img/kable.svg").await;
    assert!(img.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(img.contains("content-type: image/svg+xml"));
}

#[tokio::test]
async fn missing_assets_under_each_prefix_answer_not_found() {
    let addr = spawn_ui().await;
    for path in ["/css/missing.css", "/img/missing.png", "/js/missing.js"] {
        let response = get(addr, path).await;
        assert!(
            response.starts_with("HTTP/1.1 404 Not Found\r\n"),
            "{path} did not answer 404: {}",
            response.lines().next().unwrap_or("")
        );
    }
}
