mod common;

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{LOCATION, SET_COOKIE};
use sqlx::PgPool;

use common::{FailingNotifier, RecordingNotifier, insert_project, project};

// ── Health ──────────────────────────────────────────────────────

#[sqlx::test]
async fn health_returns_ok(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ── JSON API ────────────────────────────────────────────────────

#[sqlx::test]
async fn api_lists_projects_in_display_order(pool: PgPool) {
    let app = common::spawn_app(pool.clone()).await;
    let mut second = project("Second Project", "second-project", 2, false);
    second.tech_stack = vec!["Python".to_string(), "Django".to_string()];
    insert_project(&pool, &second).await;
    let mut first = project("First Project", "first-project", 1, true);
    first.tech_stack = vec!["Java".to_string(), "Spring Boot".to_string()];
    first.github_url = Some("https://github.com/test/first".to_string());
    insert_project(&pool, &first).await;

    let (body, status) = app.get_json("/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["slug"], "first-project");
    assert_eq!(list[0]["displayOrder"], 1);
    assert_eq!(list[0]["featured"], true);
    assert_eq!(list[0]["githubUrl"], "https://github.com/test/first");
    assert_eq!(list[0]["techStack"][0], "Java");
    assert_eq!(list[0]["techStack"][1], "Spring Boot");
    assert_eq!(list[1]["slug"], "second-project");
    assert!(list[1]["liveUrl"].is_null());
}

#[sqlx::test]
async fn api_returns_empty_array_without_projects(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let (body, status) = app.get_json("/api/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[sqlx::test]
async fn api_gets_project_by_slug(pool: PgPool) {
    let app = common::spawn_app(pool.clone()).await;
    let mut input = project("Spring Portfolio", "spring-portfolio", 1, true);
    input.tech_stack = vec!["Java".to_string(), "Spring Boot".to_string()];
    let saved = insert_project(&pool, &input).await;

    let (body, status) = app.get_json("/api/projects/spring-portfolio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], saved.id);
    assert_eq!(body["title"], "Spring Portfolio");
    assert_eq!(body["techStack"], serde_json::json!(["Java", "Spring Boot"]));
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[sqlx::test]
async fn api_unknown_slug_is_404(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let (body, status) = app.get_json("/api/projects/nonexistent-slug").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

// ── Pages ───────────────────────────────────────────────────────

#[sqlx::test]
async fn home_page_shows_only_featured_projects(pool: PgPool) {
    let app = common::spawn_app(pool.clone()).await;
    insert_project(&pool, &project("Shown On Home", "shown", 1, true)).await;
    insert_project(&pool, &project("Listing Only", "hidden", 2, false)).await;

    let (html, status) = app.get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Shown On Home"));
    assert!(!html.contains("Listing Only"));

    let (html, status) = app.get_page("/projects").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Shown On Home"));
    assert!(html.contains("Listing Only"));
}

#[sqlx::test]
async fn static_pages_render(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    for path in ["/about", "/how-i-built-this", "/contact"] {
        let (html, status) = app.get_page(path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(html.contains("<html"), "{path}");
    }
}

#[sqlx::test]
async fn project_detail_escapes_content(pool: PgPool) {
    let app = common::spawn_app(pool.clone()).await;
    let mut input = project("Detail <Page>", "detail", 1, false);
    input.full_description = Some("Uses <script>alert(1)</script> nowhere".to_string());
    input.tech_stack = vec!["Rust".to_string()];
    insert_project(&pool, &input).await;

    let (html, status) = app.get_page("/projects/detail").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Detail &lt;Page&gt;") || html.contains("Detail &#60;Page&#62;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("Rust"));
}

#[sqlx::test]
async fn unknown_project_page_redirects_to_listing(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let resp = app
        .client
        .get(app.url("/projects/nonexistent-slug"))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_redirection());
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/projects");
}

// ── Contact form ────────────────────────────────────────────────

#[sqlx::test]
async fn valid_contact_submission_is_saved_and_redirects(pool: PgPool) {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = common::spawn_app_with_notifier(pool, notifier.clone()).await;

    let resp = app
        .post_contact(&[
            ("name", "John Doe"),
            ("email", "john@example.com"),
            ("message", "This is a test message with enough characters"),
        ])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/contact");
    let cookie = resp
        .headers()
        .get(SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("flash=success"));

    assert_eq!(app.message_count().await, 1);
    assert_eq!(notifier.received.lock().unwrap().len(), 1);

    // The flash banner is shown once after the redirect.
    let resp = app
        .client
        .get(app.url("/contact"))
        .header("cookie", "flash=success")
        .send()
        .await
        .unwrap();
    assert!(resp.headers().get(SET_COOKIE).is_some());
    let html = resp.text().await.unwrap();
    assert!(html.contains("Thank you for your message!"));
}

#[sqlx::test]
async fn short_message_rerenders_form_without_saving(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let resp = app
        .post_contact(&[
            ("name", "John Doe"),
            ("email", "john@example.com"),
            ("message", "Short"),
        ])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Message must be at least 10 characters"));
    assert!(html.contains("john@example.com"));

    assert_eq!(app.message_count().await, 0);
}

#[sqlx::test]
async fn missing_fields_rerender_with_required_errors(pool: PgPool) {
    let app = common::spawn_app(pool).await;

    let resp = app.post_contact(&[("name", ""), ("email", "invalid-email")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Name is required"));
    assert!(html.contains("Invalid email format"));
    assert!(html.contains("Message is required"));

    assert_eq!(app.message_count().await, 0);
}

#[sqlx::test]
async fn contact_submission_survives_notifier_failure(pool: PgPool) {
    let app = common::spawn_app_with_notifier(pool, Arc::new(FailingNotifier)).await;

    let resp = app
        .post_contact(&[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("message", "The notifier is down but this must be kept."),
        ])
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("flash=success"));

    assert_eq!(app.message_count().await, 1);
}
