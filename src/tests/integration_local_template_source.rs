use crate::io::TemplateSource;
use crate::io::local::LocalTemplateSource;
use crate::services::render::TemplateRenderer;
use crate::tests::fixtures::write_views;
use serde_json::json;
use std::fs;
use std::io;

#[tokio::test]
async fn test_lists_only_template_partials() {
    let dir = tempfile::tempdir().unwrap();
    let partials = dir.path().join("partials");
    fs::create_dir_all(partials.join("nested")).unwrap();
    fs::write(partials.join("nav.hbs"), "<nav></nav>").unwrap();
    fs::write(partials.join("footer.hbs"), "<footer></footer>").unwrap();
    fs::write(partials.join("README.md"), "docs").unwrap();
    fs::write(partials.join(".hidden.hbs"), "swap").unwrap();
    fs::write(partials.join("nested/deep.hbs"), "deep").unwrap();

    let found = LocalTemplateSource.list_partials(&partials).await.unwrap();

    assert_eq!(found, vec![partials.join("footer.hbs"), partials.join("nav.hbs")]);
}

#[tokio::test]
async fn test_missing_partials_dir_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let err = LocalTemplateSource
        .list_partials(&dir.path().join("partials"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[tokio::test]
async fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();

    let err = LocalTemplateSource
        .read_to_string(&dir.path().join("nope.hbs"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

// the live-editing workflow: change a file on disk, see it on the next render
#[tokio::test]
async fn test_development_renderer_sees_disk_edits() {
    let dir = tempfile::tempdir().unwrap();
    write_views(dir.path());
    let renderer = TemplateRenderer::new(Box::new(LocalTemplateSource), dir.path(), false);
    let data = json!({ "title": "About", "appName": "Demo" });

    let before = renderer.render("about", &data).await.unwrap();
    fs::write(dir.path().join("pages/about.hbs"), "<h2>Rewritten</h2>").unwrap();
    let after = renderer.render("about", &data).await.unwrap();

    assert!(before.contains("<h1>About</h1>"));
    assert!(before.contains("<header>Demo</header>"));
    assert!(after.contains("<h2>Rewritten</h2>"));
}

#[tokio::test]
async fn test_production_renderer_keeps_first_compile() {
    let dir = tempfile::tempdir().unwrap();
    write_views(dir.path());
    let renderer = TemplateRenderer::new(Box::new(LocalTemplateSource), dir.path(), true);
    let data = json!({ "title": "About" });

    let before = renderer.render("about", &data).await.unwrap();
    fs::write(dir.path().join("pages/about.hbs"), "<h2>Rewritten</h2>").unwrap();
    let after = renderer.render("about", &data).await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_renderer_without_partials_dir_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("layouts")).unwrap();
    fs::create_dir_all(dir.path().join("pages")).unwrap();
    fs::write(dir.path().join("layouts/main.hbs"), "[{{{body}}}]").unwrap();
    fs::write(dir.path().join("pages/plain.hbs"), "plain {{title}}").unwrap();

    let renderer = TemplateRenderer::new(Box::new(LocalTemplateSource), dir.path(), false);

    assert_eq!(renderer.load_partials().await, 0);
    let html = renderer
        .render("plain", &json!({ "title": "page" }))
        .await
        .unwrap();
    assert_eq!(html, "[plain page]");
}
