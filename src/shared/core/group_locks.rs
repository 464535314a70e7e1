use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

/// One async mutex per weekly group. Slots are created on first use and
/// dropped again once nobody holds or waits for them.
#[derive(Default)]
pub struct GroupLocks {
    slots: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl GroupLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `work` while holding the lock of `group_id`.
    pub async fn run<F>(&self, group_id: i64, work: F) -> F::Output
    where
        F: Future,
    {
        let slot = self.slots.lock().await.entry(group_id).or_default().clone();
        let output = {
            let _guard = slot.lock().await;
            work.await
        };

        let mut slots = self.slots.lock().await;
        // One reference in the map, one held here: nobody else is waiting.
        if Arc::strong_count(&slot) <= 2 {
            slots.remove(&group_id);
        }
        output
    }

    pub async fn is_idle(&self) -> bool {
        self.slots.lock().await.is_empty()
    }
}
