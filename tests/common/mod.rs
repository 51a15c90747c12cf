#![allow(dead_code)]

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use todoboard::config::Config;
use todoboard::db;

/// A running test server backed by its own in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a path, return (status, body).
    pub async fn get(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// POST a urlencoded form, return (status, body).
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
    ) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// POST with no body, return (status, body).
    pub async fn post_empty(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .post(self.url(path))
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// DELETE a path, return (status, body).
    pub async fn delete(&self, path: &str) -> (reqwest::StatusCode, String) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        (status, resp.text().await.unwrap_or_default())
    }

    /// Insert a project directly, return its id.
    pub async fn create_project(&self, name: &str) -> i64 {
        db::projects::create(&self.pool, name)
            .await
            .expect("create project failed")
            .expect("project name was blank")
    }

    /// Insert a todo directly, return its id.
    pub async fn create_todo(&self, title: &str, due: &str, project_id: i64) -> i64 {
        db::todos::create(&self.pool, title, due, project_id)
            .await
            .expect("create todo failed")
            .expect("todo title was blank")
    }
}

/// Fresh in-memory database with the schema applied.
///
/// A single long-lived connection keeps the in-memory database alive for the
/// whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("invalid sqlite url")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    db::schema::migrate(&pool)
        .await
        .expect("Failed to run migrations on test database");

    pool
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_connections: 1,
        max_body_size: 65_536,
        seed_sample_data: false,
        log_level: "warn".to_string(),
    }
}

/// Spawn the app on a random port.
pub async fn spawn_app() -> TestApp {
    let pool = test_pool().await;
    let app = todoboard::build_app(pool.clone(), test_config());

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
