use super::*;

// =============================================================================
// plan
// =============================================================================

#[test]
fn every_route_exports_to_its_index_file() {
    let files: Vec<_> = plan().into_iter().map(|page| page.file).collect();
    assert_eq!(
        files,
        vec![
            PathBuf::from("index.html"),
            PathBuf::from("about/index.html"),
            PathBuf::from("services/index.html"),
            PathBuf::from("track/index.html"),
            PathBuf::from("faq/index.html"),
            PathBuf::from("contact/index.html"),
            PathBuf::from("404.html"),
        ]
    );
}

#[test]
fn only_the_not_found_page_may_fail() {
    let pages = plan();
    let (last, routes) = pages.split_last().expect("non-empty plan");
    assert!(routes.iter().all(|page| page.must_succeed));
    assert!(!last.must_succeed);
    assert_eq!(last.request_path, NOT_FOUND_PROBE);
}

#[test]
fn request_paths_match_router_segments() {
    let paths: Vec<_> = plan().into_iter().map(|page| page.request_path).collect();
    assert_eq!(paths[0], "/");
    assert_eq!(paths[1], "/about");
    assert!(paths.iter().all(|path| path.starts_with('/')));
}

// =============================================================================
// filesystem helpers
// =============================================================================

#[test]
fn write_page_creates_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let written = write_page(dir.path(), Path::new("faq/index.html"), "<p>faq</p>").expect("write");
    assert_eq!(written, dir.path().join("faq/index.html"));
    assert_eq!(fs::read_to_string(written).expect("read back"), "<p>faq</p>");
}

#[test]
fn write_page_overwrites_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_page(dir.path(), Path::new("index.html"), "old").expect("first write");
    write_page(dir.path(), Path::new("index.html"), "new").expect("second write");
    assert_eq!(fs::read_to_string(dir.path().join("index.html")).expect("read back"), "new");
}

#[test]
fn copy_dir_is_recursive_and_counts_files() {
    let src = tempfile::tempdir().expect("src");
    let dst = tempfile::tempdir().expect("dst");
    fs::write(src.path().join("style.css"), "body{}").expect("seed css");
    fs::create_dir_all(src.path().join("images/icons")).expect("seed dirs");
    fs::write(src.path().join("images/icons/truck.svg"), "<svg/>").expect("seed svg");

    let copied = copy_dir(src.path(), dst.path()).expect("copy");
    assert_eq!(copied, 2);
    assert_eq!(fs::read_to_string(dst.path().join("images/icons/truck.svg")).expect("read"), "<svg/>");
}

#[test]
fn copy_dir_missing_source_reports_path() {
    let dst = tempfile::tempdir().expect("dst");
    let err = copy_dir(Path::new("definitely/not/here"), dst.path()).expect_err("should fail");
    assert!(err.to_string().contains("definitely/not/here"), "{err}");
}

// =============================================================================
// build
// =============================================================================

#[tokio::test]
async fn build_writes_every_page_and_assets() {
    let out = tempfile::tempdir().expect("out");
    let assets = tempfile::tempdir().expect("assets");
    fs::write(assets.path().join("style.css"), "body{}").expect("seed css");
    let config = ExportConfig {
        out_dir: out.path().to_path_buf(),
        assets_dir: assets.path().to_path_buf(),
        pkg_dir: out.path().join("missing-pkg"),
        ..ExportConfig::default()
    };

    let summary = build(&config).await.expect("build");
    assert_eq!(summary.pages, plan().len());
    assert_eq!(summary.assets, 1);
    assert_eq!(summary.pkg_files, 0);
    for page in plan() {
        assert!(out.path().join(&page.file).is_file(), "{}", page.file.display());
    }
    let about = fs::read_to_string(out.path().join("about/index.html")).expect("about");
    assert!(about.contains("About Us | UAE Delivery Express"));
    let not_found = fs::read_to_string(out.path().join("404.html")).expect("404");
    assert!(not_found.contains("Page not found."));
}
