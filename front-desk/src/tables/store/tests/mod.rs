use super::*;
use crate::tables::error::{DirectoryError, DirectoryResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::error::ErrorCode;
use shared::models::Table;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Notify;

mod test_core;

// ========================================================================
// Scripted directory double
// ========================================================================

/// One scripted answer for `load_tables`
enum Scripted {
    Tables(Vec<Table>),
    Gated(Arc<Notify>, Vec<Table>),
    Fail(u16),
}

/// Directory that answers from a script, in call order
///
/// An exhausted script answers with an empty directory.
struct ScriptedDirectory {
    script: Mutex<VecDeque<Scripted>>,
    calls: AtomicUsize,
}

impl ScriptedDirectory {
    fn new(script: Vec<Scripted>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TableDirectory for ScriptedDirectory {
    async fn load_tables(&self) -> DirectoryResult<Vec<Table>> {
        let next = self.script.lock().pop_front();
        self.calls.fetch_add(1, Ordering::SeqCst);
        match next {
            None => Ok(Vec::new()),
            Some(Scripted::Tables(tables)) => Ok(tables),
            Some(Scripted::Gated(gate, tables)) => {
                gate.notified().await;
                Ok(tables)
            }
            Some(Scripted::Fail(status)) => Err(DirectoryError::Status {
                status,
                body: "directory down".to_string(),
            }),
        }
    }
}

// ========================================================================
// Helpers
// ========================================================================

fn tables(names: &[&str]) -> Vec<Table> {
    names.iter().map(|name| Table::new(*name)).collect()
}

/// Store whose initial load has resolved with the given tables
async fn loaded_store(names: &[&str]) -> (TablesStore, Arc<ScriptedDirectory>) {
    let directory = ScriptedDirectory::new(vec![Scripted::Tables(tables(names))]);
    let store = TablesStore::new(directory.clone()).unwrap();
    let count = store.wait_initial_load().await.unwrap();
    assert_eq!(count, names.len());
    (store, directory)
}

/// Yield until the directory has been called `n` times
async fn until_calls(directory: &ScriptedDirectory, n: usize) {
    while directory.calls() < n {
        tokio::task::yield_now().await;
    }
}

/// Receive the next event, failing the test if none arrives
async fn next_event(rx: &mut broadcast::Receiver<StoreEvent>) -> StoreEvent {
    tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("timed out waiting for store event")
        .expect("event channel closed")
}
