use super::*;

async fn renderer() -> Renderer {
    let options = load_options(Path::new("Cargo.toml")).expect("leptos metadata");
    Renderer::start(options).await.expect("start renderer")
}

#[test]
fn options_come_from_manifest_metadata() {
    let options = load_options(Path::new("Cargo.toml")).expect("leptos metadata");
    assert_eq!(&*options.output_name, "courier-site");
    assert_eq!(&*options.site_pkg_dir, "pkg");
}

#[test]
fn missing_manifest_is_a_config_error() {
    let err = load_options(Path::new("does-not-exist/Cargo.toml")).expect_err("should fail");
    assert!(matches!(err, ExportError::Config(_)), "{err}");
}

#[tokio::test]
async fn home_page_renders_with_title_and_hero() {
    let renderer = renderer().await;
    let page = renderer.render("/").await.expect("render home");
    assert_eq!(page.status, 200);
    assert!(page.html.contains("<title>UAE Delivery Express - Fast &amp; Reliable Delivery Services</title>")
        || page.html.contains("<title>UAE Delivery Express - Fast & Reliable Delivery Services</title>"));
    assert!(page.html.contains("hero-title"));
    assert!(page.html.contains("courier-site"), "hydration scripts reference the wasm package");
}

#[tokio::test]
async fn pages_carry_search_and_social_meta() {
    let renderer = renderer().await;
    for path in ["/", "/faq"] {
        let page = renderer.render(path).await.expect("render page");
        assert!(page.html.contains("name=\"robots\""), "{path}");
        assert!(page.html.contains("content=\"index, follow\""), "{path}");
        assert!(page.html.contains("property=\"og:locale\""), "{path}");
        assert!(page.html.contains("content=\"en_AE\""), "{path}");
        assert!(page.html.contains("property=\"og:type\""), "{path}");
    }
}

#[tokio::test]
async fn contact_page_renders_form_fields() {
    let renderer = renderer().await;
    let page = renderer.render("/contact").await.expect("render contact");
    assert_eq!(page.status, 200);
    for id in ["name", "email", "phone", "service", "message"] {
        assert!(page.html.contains(&format!("id=\"{id}\"")), "{id}");
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found_view() {
    let renderer = renderer().await;
    let page = renderer.render("/no-such-page").await.expect("render fallback");
    assert!(page.html.contains("Page not found."));
}
