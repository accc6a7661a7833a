//! Connection cache for the document store.
//!
//! Re-expression of the memoized connect-promise pattern as an injected
//! service object: at most one in-flight connection attempt is shared by
//! concurrent callers, a failed attempt is cleared so the next caller
//! retries from scratch, and an established handle can be invalidated
//! after a downstream failure.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use sqlx::sqlite::SqlitePool;
use tokio::sync::Mutex;
use tracing::{info, warn};

type ConnectFuture = Shared<BoxFuture<'static, Result<SqlitePool, Arc<sqlx::Error>>>>;

struct CacheState {
    conn: Option<SqlitePool>,
    pending: Option<ConnectFuture>,
    // Guards against a late waiter of a failed attempt clearing a newer
    // pending attempt.
    epoch: u64,
}

pub struct ConnectionCache {
    url: String,
    state: Mutex<CacheState>,
}

impl ConnectionCache {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            state: Mutex::new(CacheState {
                conn: None,
                pending: None,
                epoch: 0,
            }),
        }
    }

    /// Return the cached pool, or join the in-flight attempt, or start a
    /// fresh one. A failed attempt is never cached.
    pub async fn acquire(&self) -> anyhow::Result<SqlitePool> {
        let (attempt, epoch) = {
            let mut state = self.state.lock().await;
            if let Some(conn) = &state.conn {
                return Ok(conn.clone());
            }
            match &state.pending {
                Some(pending) => (pending.clone(), state.epoch),
                None => {
                    state.epoch += 1;
                    info!("Connecting to catalog store at {}", self.url);
                    let url = self.url.clone();
                    let attempt = async move {
                        SqlitePool::connect(&url).await.map_err(Arc::new)
                    }
                    .boxed()
                    .shared();
                    state.pending = Some(attempt.clone());
                    (attempt, state.epoch)
                }
            }
        };

        let result = attempt.await;

        let mut state = self.state.lock().await;
        if state.epoch == epoch {
            state.pending = None;
        }
        match result {
            Ok(pool) => {
                state.conn = Some(pool.clone());
                Ok(pool)
            }
            Err(err) => {
                warn!("Catalog store connection failed: {}", err);
                Err(anyhow::anyhow!("catalog store connection failed: {}", err))
            }
        }
    }

    /// Drop an established handle so the next `acquire` reconnects. Called
    /// after a downstream failure on the handle.
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        if state.conn.take().is_some() {
            warn!("Invalidated cached catalog store connection");
        }
    }
}
