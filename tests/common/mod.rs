#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use sqlx::PgPool;

use portfolio::config::{Config, NotifyConfig};
use portfolio::error::NotifyError;
use portfolio::models::{ContactMessage, Project, ProjectInput};
use portfolio::notify::Notifier;
use portfolio::store::{PgStore, ProjectStore};

/// A running test server backed by the per-test database from `#[sqlx::test]`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_page(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    pub async fn post_contact(&self, data: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url("/contact"))
            .form(data)
            .send()
            .await
            .expect("contact form request failed")
    }

    pub async fn message_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        db_max_connections: 5,
        max_body_size: 65_536,
        seed_file: None,
        notify: NotifyConfig::disabled(),
    }
}

pub async fn spawn_app(pool: PgPool) -> TestApp {
    let (app, _state) = portfolio::build_app(pool.clone(), test_config());
    serve(app, pool).await
}

pub async fn spawn_app_with_notifier(pool: PgPool, notifier: Arc<dyn Notifier>) -> TestApp {
    let (app, _state) =
        portfolio::build_app_with_notifier(pool.clone(), test_config(), notifier);
    serve(app, pool).await
}

async fn serve(app: axum::Router, pool: PgPool) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, pool, client }
}

pub fn project(title: &str, slug: &str, display_order: i32, featured: bool) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        slug: slug.to_string(),
        short_description: Some(format!("{title} in one line")),
        featured,
        display_order,
        ..Default::default()
    }
}

pub async fn insert_project(pool: &PgPool, input: &ProjectInput) -> Project {
    ProjectStore::save(&PgStore::new(pool.clone()), input)
        .await
        .expect("insert project failed")
}

/// Notifier that always fails.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _message: &ContactMessage) -> Result<(), NotifyError> {
        Err(NotifyError::Transport("SMTP server unreachable".to_string()))
    }
}

/// Notifier that records every message it was asked to deliver.
#[derive(Default)]
pub struct RecordingNotifier {
    pub received: Mutex<Vec<ContactMessage>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), NotifyError> {
        self.received.lock().unwrap().push(message.clone());
        Ok(())
    }
}
