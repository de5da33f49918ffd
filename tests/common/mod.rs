#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::mpsc;

use shorturl::application::services::{LinkService, StatsService};
use shorturl::domain::entities::NewVisit;
use shorturl::domain::repositories::StatsStore;
use shorturl::domain::visit_event::VisitEvent;
use shorturl::infrastructure::persistence::{SqliteLinkStore, SqliteStatsStore};
use shorturl::state::AppState;
use shorturl::utils::code_generator::HashConfig;
use shorturl::utils::url_codec;

pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<VisitEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let link_store = Arc::new(SqliteLinkStore::new(pool.clone()));
    let stats_store = Arc::new(SqliteStatsStore::new(pool));

    let link_service = Arc::new(LinkService::new(link_store.clone(), HashConfig::default()));
    let stats_service = Arc::new(StatsService::new(link_store, stats_store));

    let state = AppState {
        link_service,
        stats_service,
        visit_tx: tx,
        base_url: "http://localhost:3000".to_string(),
    };

    (state, rx)
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, raw_url: &str) {
    sqlx::query("INSERT INTO links (code, encoded_url, created_at) VALUES (?1, ?2, ?3)")
        .bind(code)
        .bind(url_codec::encode(raw_url))
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn record_test_visit(pool: &SqlitePool, code: &str, referer: &str, visited_at: &str) {
    let store = SqliteStatsStore::new(pool.clone());
    store
        .record_visit(NewVisit {
            code: code.to_string(),
            referer: referer.to_string(),
            client_ip: "203.0.113.9".to_string(),
            visited_at: visited_at.to_string(),
        })
        .await
        .unwrap();
}
