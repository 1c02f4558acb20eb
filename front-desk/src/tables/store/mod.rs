//! TablesStore - single source of truth for the table directory and orders
//!
//! This module handles:
//! - Action dispatch (serialized, atomic replacement of the state model)
//! - Directory loads (asynchronous, never blocking other actions)
//! - State and event subscriptions
//! - Memoized selections over the state
//!
//! # Dispatch Flow
//!
//! ```text
//! dispatch(action)
//!     ├─ LoadTables ─→ spawn load_tables()
//!     │                   ├─ 1. TableDirectory::load_tables().await
//!     │                   ├─ 2. TablesLoadedReducer (replace directory)
//!     │                   └─ 3. Broadcast TablesLoaded / LoadFailed
//!     └─ other ──────→ ReducerAction::for_action
//!                         ├─ 1. reduce(current) under the watch write lock
//!                         ├─ 2. Publish next model (only when applied)
//!                         └─ 3. Broadcast ActionApplied / ActionRejected
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::tables::{OrderViewModel, TableAction, TableActionKind};
use tokio::runtime::Handle;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::directory::TableDirectory;
use super::error::{StoreError, StoreResult};
use super::query::create_order_selector_for;
use super::reducers::{ReducerAction, TablesLoadedReducer};
use super::state::TablesStateModel;
use super::traits::{ActionReducer, Rejection};

#[cfg(test)]
mod tests;

/// Event broadcast channel capacity
pub const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// Diagnostic stream emitted by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    ActionApplied {
        kind: TableActionKind,
        #[serde(skip_serializing_if = "Option::is_none")]
        table_name: Option<String>,
    },
    ActionRejected {
        kind: TableActionKind,
        rejection: Rejection,
    },
    LoadStarted,
    TablesLoaded {
        count: usize,
    },
    LoadFailed {
        message: String,
    },
}

/// Result of a dispatch
#[derive(Debug)]
pub enum ActionOutcome {
    /// State replaced and published
    Applied,
    /// No-op; state untouched
    Rejected(Rejection),
    /// Directory load running in the background
    Pending(LoadHandle),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ActionOutcome::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

/// Handle to an in-flight directory load
#[derive(Debug)]
pub struct LoadHandle {
    handle: JoinHandle<StoreResult<usize>>,
}

impl LoadHandle {
    /// Wait for the load; yields the number of tables loaded
    pub async fn wait(self) -> StoreResult<usize> {
        self.handle
            .await
            .map_err(|e| StoreError::Internal(format!("Load task failed: {}", e)))?
    }
}

/// Outcome of the load dispatched at construction
#[derive(Debug, Clone, PartialEq, Eq)]
enum InitialLoad {
    Pending,
    Loaded(usize),
    Failed { code: ErrorCode, message: String },
}

struct StoreInner {
    directory: Arc<dyn TableDirectory>,
    state_tx: watch::Sender<TablesStateModel>,
    event_tx: broadcast::Sender<StoreEvent>,
    pending_loads: AtomicUsize,
    initial_load: watch::Sender<InitialLoad>,
    runtime: Handle,
}

/// Decrements the pending-load counter even if the load future is dropped
struct PendingLoad<'a>(&'a AtomicUsize);

impl<'a> PendingLoad<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Table store handle (cheap to clone, all clones share one state)
#[derive(Clone)]
pub struct TablesStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for TablesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TablesStore")
            .field("directory", &"<TableDirectory>")
            .field("state_tx", &"<watch::Sender>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("pending_loads", &self.pending_loads())
            .finish()
    }
}

impl TablesStore {
    /// Create a store and dispatch the initial `LoadTables`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(directory: Arc<dyn TableDirectory>) -> StoreResult<Self> {
        Self::with_capacity(directory, EVENT_CHANNEL_CAPACITY)
    }

    /// Create a store with a custom event channel capacity
    pub fn with_capacity(
        directory: Arc<dyn TableDirectory>,
        event_capacity: usize,
    ) -> StoreResult<Self> {
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;
        let (state_tx, _) = watch::channel(TablesStateModel::default());
        let (event_tx, _) = broadcast::channel(event_capacity.max(1));
        let (initial_load, _) = watch::channel(InitialLoad::Pending);

        let store = Self {
            inner: Arc::new(StoreInner {
                directory,
                state_tx,
                event_tx,
                pending_loads: AtomicUsize::new(0),
                initial_load,
                runtime,
            }),
        };

        info!("TablesStore created, dispatching initial table load");
        let loader = store.clone();
        store.inner.runtime.spawn(async move {
            let outcome = match loader.load_tables().await {
                Ok(count) => InitialLoad::Loaded(count),
                Err(e) => {
                    let err = AppError::from(e);
                    InitialLoad::Failed {
                        code: err.code,
                        message: err.message,
                    }
                }
            };
            loader.inner.initial_load.send_replace(outcome);
        });
        Ok(store)
    }

    /// Wait for the load dispatched at construction
    ///
    /// Every caller, concurrent or later, gets the same outcome. A failed
    /// initial load keeps reporting its failure.
    pub async fn wait_initial_load(&self) -> StoreResult<usize> {
        let mut rx = self.inner.initial_load.subscribe();
        let outcome = {
            let resolved = rx
                .wait_for(|outcome| *outcome != InitialLoad::Pending)
                .await
                .map_err(|_| StoreError::Closed)?;
            resolved.clone()
        };

        match outcome {
            InitialLoad::Loaded(count) => Ok(count),
            InitialLoad::Failed { code, message } => {
                Err(StoreError::InitialLoadFailed { code, message })
            }
            InitialLoad::Pending => Err(StoreError::Closed),
        }
    }

    /// Apply one action
    pub fn dispatch(&self, action: TableAction) -> ActionOutcome {
        let kind = action.kind();
        debug!(action = ?action, "Dispatching action");

        let Some(reducer) = ReducerAction::for_action(&action) else {
            return ActionOutcome::Pending(self.spawn_load());
        };

        let table_name = action.table_name().map(str::to_owned);
        match self.commit(&reducer) {
            Ok(()) => {
                info!(action = %kind, table_name = ?table_name, "Action applied");
                self.emit(StoreEvent::ActionApplied { kind, table_name });
                ActionOutcome::Applied
            }
            Err(rejection) => {
                warn!(action = %kind, reason = %rejection, "Action rejected");
                self.emit(StoreEvent::ActionRejected {
                    kind,
                    rejection: rejection.clone(),
                });
                ActionOutcome::Rejected(rejection)
            }
        }
    }

    /// Fetch the directory and replace the table list
    ///
    /// A failed fetch leaves the whole state untouched. The load is counted
    /// by `pending_loads()` until its outcome is published.
    pub async fn load_tables(&self) -> StoreResult<usize> {
        let _pending = PendingLoad::start(&self.inner.pending_loads);
        self.emit(StoreEvent::LoadStarted);

        let tables = match self.inner.directory.load_tables().await {
            Ok(tables) => tables,
            Err(e) => {
                warn!(error = %e, "Table directory load failed");
                self.emit(StoreEvent::LoadFailed {
                    message: e.to_string(),
                });
                return Err(e.into());
            }
        };

        let count = tables.len();
        let reducer = ReducerAction::TablesLoaded(TablesLoadedReducer { tables });
        if let Err(rejection) = self.commit(&reducer) {
            warn!(reason = %rejection, "Table directory rejected");
            self.emit(StoreEvent::LoadFailed {
                message: rejection.to_string(),
            });
            return Err(StoreError::DirectoryRejected(rejection.to_string()));
        }

        info!(count, "Table directory loaded");
        self.emit(StoreEvent::TablesLoaded { count });
        Ok(count)
    }

    /// Current state (cheap: shares the underlying maps)
    pub fn snapshot(&self) -> TablesStateModel {
        self.inner.state_tx.borrow().clone()
    }

    /// Subscribe to every state replacement
    pub fn subscribe_state(&self) -> watch::Receiver<TablesStateModel> {
        self.inner.state_tx.subscribe()
    }

    /// Subscribe to store events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.event_tx.subscribe()
    }

    /// Number of directory loads currently in flight
    pub fn pending_loads(&self) -> usize {
        self.inner.pending_loads.load(Ordering::SeqCst)
    }

    /// Live, memoized view derived from the state
    pub fn select<T, F>(&self, selector: F) -> Selection<T>
    where
        F: Fn(&TablesStateModel) -> T + Send + Sync + 'static,
        T: Clone + PartialEq,
    {
        let rx = self.inner.state_tx.subscribe();
        let last = selector(&rx.borrow());
        Selection {
            rx,
            selector: Box::new(selector),
            last,
        }
    }

    /// Live order view for one table
    pub fn select_order_view(&self, table_name: &str) -> Selection<OrderViewModel> {
        let selector = create_order_selector_for(table_name);
        self.select(move |state| selector.select(state))
    }

    /// Run a reducer against the current model and publish on success
    ///
    /// The watch write lock serializes writers, so each reducer sees the
    /// model produced by the previous one.
    fn commit(&self, reducer: &ReducerAction) -> Result<(), Rejection> {
        let mut outcome = Ok(());
        self.inner
            .state_tx
            .send_if_modified(|state| match reducer.reduce(state) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(rejection) => {
                    outcome = Err(rejection);
                    false
                }
            });
        outcome
    }

    fn spawn_load(&self) -> LoadHandle {
        let store = self.clone();
        LoadHandle {
            handle: self
                .inner
                .runtime
                .spawn(async move { store.load_tables().await }),
        }
    }

    fn emit(&self, event: StoreEvent) {
        // No subscribers is fine
        let _ = self.inner.event_tx.send(event);
    }
}

/// Memoized projection of the store state
pub struct Selection<T> {
    rx: watch::Receiver<TablesStateModel>,
    selector: Box<dyn Fn(&TablesStateModel) -> T + Send + Sync>,
    last: T,
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Recompute against the latest state
    pub fn current(&self) -> T {
        (self.selector)(&self.rx.borrow())
    }

    /// Value observed by the last `changed()` (or at creation)
    pub fn last(&self) -> &T {
        &self.last
    }

    /// Wait until the selected value differs from the last one observed
    pub async fn changed(&mut self) -> StoreResult<T> {
        loop {
            self.rx.changed().await.map_err(|_| StoreError::Closed)?;
            let next = (self.selector)(&self.rx.borrow_and_update());
            if next != self.last {
                self.last = next.clone();
                return Ok(next);
            }
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection").field("last", &self.last).finish()
    }
}
