//! The menu toggle runs in the browser, so its behavior is pinned here as a
//! contract over the shipped script and the navbar markup it binds to.

use std::path::PathBuf;

fn server_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn navigation_script_toggles_the_active_class_on_burger_and_menu() {
    let script = std::fs::read_to_string(server_root().join("assets/js/hamburger.js"))
        .expect("read navigation script");

    assert!(script.contains(".navbar-burger"), "burger selector missing");
    assert!(script.contains("dataset.target"), "menu lookup missing");
    assert!(
        script.contains("classList.toggle('is-active')"),
        "open/close toggle missing"
    );
    assert!(
        script.contains("classList.remove('is-active')"),
        "close-on-selection missing"
    );
    assert!(
        script.contains("a.navbar-item"),
        "menu item selector missing"
    );
    assert!(!script.contains("fetch("), "script must not make network calls");
    assert!(
        !script.contains("localStorage"),
        "menu state must not persist across page loads"
    );
}

#[test]
fn navbar_markup_wires_the_burger_to_its_menu_container() {
    let base = std::fs::read_to_string(server_root().join("templates/base.html"))
        .expect("read base template");

    assert!(base.contains(r#"class="navbar-burger""#));
    assert!(base.contains(r#"data-target="mainNavbar""#));
    assert!(base.contains(r#"id="mainNavbar""#));
    assert!(base.contains(r#"<script src="/js/hamburger.js">"#));
}
