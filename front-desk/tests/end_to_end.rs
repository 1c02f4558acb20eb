//! End-to-end flows through the public API

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use front_desk::tables::query::create_order_selector_for;
use async_trait::async_trait;
use front_desk::tables::{
    DirectoryResult, HttpTableDirectory, JsonFileTableDirectory, StaticTableDirectory,
    StoreError, TableDirectory, TablesStateModel, TablesStore,
};
use shared::error::ErrorCode;
use shared::models::Table;
use shared::tables::{OrderViewModel, TableAction};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Notify;

/// Directory that answers only once its gate is opened
struct GatedDirectory {
    gate: Arc<Notify>,
    tables: Vec<Table>,
}

#[async_trait]
impl TableDirectory for GatedDirectory {
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>> {
        self.gate.notified().await;
        Ok(self.tables.clone())
    }
}

fn view(table_name: &str, choices: &[&str]) -> OrderViewModel {
    OrderViewModel {
        table_name: table_name.to_string(),
        choices: choices.iter().map(|c| c.to_string()).collect(),
    }
}

/// Serve one fixed HTTP response per connection
async fn serve_fixed(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_reserve_and_order_flow() {
    let gate = Arc::new(Notify::new());
    let directory = GatedDirectory {
        gate: gate.clone(),
        tables: vec![Table::new("T1"), Table::new("T2")],
    };
    let store = TablesStore::new(Arc::new(directory)).unwrap();

    // Nothing loaded yet
    assert_eq!(store.snapshot(), TablesStateModel::default());
    assert_eq!(store.select_order_view("T1").current(), view("T1", &[]));

    gate.notify_one();
    assert_eq!(store.wait_initial_load().await.unwrap(), 2);

    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::add_choice("T1", "soup"));
    store.dispatch(TableAction::add_choice("T1", "salad"));

    let state = store.snapshot();
    assert_eq!(
        create_order_selector_for("T1").select(&state),
        view("T1", &["soup", "salad"])
    );
    assert_eq!(create_order_selector_for("T2").select(&state), view("T2", &[]));
}

#[tokio::test]
async fn test_cancel_then_reserve_starts_fresh() {
    let directory = StaticTableDirectory::new(vec![Table::new("T1")]);
    let store = TablesStore::new(Arc::new(directory)).unwrap();
    store.wait_initial_load().await.unwrap();

    store.dispatch(TableAction::reserve("T1"));
    store.dispatch(TableAction::add_choice("T1", "soup"));
    store.dispatch(TableAction::cancel("T1"));
    store.dispatch(TableAction::reserve("T1"));

    assert_eq!(store.select_order_view("T1").current(), view("T1", &[]));
}

#[tokio::test]
async fn test_json_file_directory_reload_picks_up_edits() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"[{"name":"T1"}]"#).unwrap();
    file.flush().unwrap();
    let store = TablesStore::new(Arc::new(JsonFileTableDirectory::new(file.path()))).unwrap();
    assert_eq!(store.wait_initial_load().await.unwrap(), 1);
    store.dispatch(TableAction::reserve("T1"));

    std::fs::write(
        file.path(),
        r#"[{"name":"T1","capacity":4},{"name":"T2","zone":"patio"}]"#,
    )
    .unwrap();
    assert_eq!(store.load_tables().await.unwrap(), 2);

    let state = store.snapshot();
    assert_eq!(state.tables()[0].capacity, Some(4));
    assert_eq!(state.tables()[1].zone.as_deref(), Some("patio"));
    assert!(state.order("T1").is_some());
}

#[tokio::test]
async fn test_http_directory_accepts_envelope() {
    let base_url = serve_fixed(
        "200 OK",
        r#"{"code":0,"message":"OK","data":[{"name":"T1"},{"name":"T2"}]}"#,
    )
    .await;
    let directory =
        HttpTableDirectory::new(&base_url, "api/tables", Duration::from_secs(5)).unwrap();
    let store = TablesStore::new(Arc::new(directory)).unwrap();

    assert_eq!(store.wait_initial_load().await.unwrap(), 2);
    assert!(store.dispatch(TableAction::reserve("T2")).is_applied());
}

#[tokio::test]
async fn test_http_directory_failure_keeps_empty_state() {
    let base_url = serve_fixed("503 Service Unavailable", r#"{"message":"maintenance"}"#).await;
    let directory =
        HttpTableDirectory::new(&base_url, "api/tables", Duration::from_secs(5)).unwrap();
    let store = TablesStore::new(Arc::new(directory)).unwrap();

    let err = store.wait_initial_load().await.unwrap_err();

    assert!(matches!(
        err,
        StoreError::InitialLoadFailed {
            code: ErrorCode::DirectoryUnavailable,
            ..
        }
    ));
    let app_error: shared::error::AppError = err.into();
    assert_eq!(app_error.code, ErrorCode::DirectoryUnavailable);
    assert_eq!(store.snapshot(), TablesStateModel::default());
}
