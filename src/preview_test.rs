use super::*;
use std::fs;

async fn start(dir: &Path) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let dir = dir.to_path_buf();
    tokio::spawn(async move { serve_on(listener, &dir).await });
    format!("http://{addr}")
}

fn exported_site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "home").expect("index");
    fs::create_dir_all(dir.path().join("about")).expect("about dir");
    fs::write(dir.path().join("about/index.html"), "about").expect("about");
    fs::write(dir.path().join(NOT_FOUND_FILE), "missing").expect("404");
    dir
}

#[tokio::test]
async fn directory_paths_resolve_to_index_html() {
    let site = exported_site();
    let base = start(site.path()).await;

    let home = reqwest::get(format!("{base}/")).await.expect("get /");
    assert_eq!(home.status().as_u16(), 200);
    assert_eq!(home.text().await.expect("body"), "home");

    let about = reqwest::get(format!("{base}/about/")).await.expect("get /about/");
    assert_eq!(about.status().as_u16(), 200);
    assert_eq!(about.text().await.expect("body"), "about");
}

#[tokio::test]
async fn missing_paths_serve_not_found_page() {
    let site = exported_site();
    let base = start(site.path()).await;

    let response = reqwest::get(format!("{base}/nope/")).await.expect("get");
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(response.text().await.expect("body"), "missing");
}
