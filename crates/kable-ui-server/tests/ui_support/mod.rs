use kable_ui_server::{build_router, load_templates, AppState, StaticFixtures, UiConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub fn ui_config() -> UiConfig {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    UiConfig {
        template_root: manifest.join("templates"),
        asset_root: manifest.join("assets"),
        ..UiConfig::default()
    }
}

pub async fn spawn_ui() -> SocketAddr {
    let ui = ui_config();
    let templates = load_templates(&ui.template_root).expect("load templates");
    let app = build_router(AppState::new(templates, Arc::new(StaticFixtures), ui));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve app");
    });
    addr
}

pub async fn get(addr: SocketAddr, path: &str) -> String {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let request = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    response
}
