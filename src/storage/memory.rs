use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use super::{Employee, EmployeeStore, RecordId, StoreError};

/// In-process store with the same contract as the MongoDB backend.
///
/// Selected with `--memory`; the tests use it with injected failures.
pub struct MemoryStore {
    records: Mutex<Vec<(RecordId, Employee)>>,
    next_id: AtomicU64,
    fail_inserts: AtomicBool,
    fail_queries: AtomicBool,
    disconnects: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            fail_inserts: AtomicBool::new(false),
            fail_queries: AtomicBool::new(false),
            disconnects: AtomicU64::new(0),
        }
    }

    /// Make subsequent inserts fail as if the server rejected the write.
    pub fn set_fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent listings fail as if the cursor broke.
    pub fn set_fail_queries(&self, fail: bool) {
        self.fail_queries.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn disconnect_count(&self) -> u64 {
        self.disconnects.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(RecordId, Employee)>> {
        // A poisoned lock only means a test panicked mid-push; the data is still usable.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn insert(&self, employee: &Employee) -> Result<RecordId, StoreError> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(StoreError::Insert("write rejected".to_string()));
        }
        let id = RecordId(format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.lock().push((id.clone(), employee.clone()));
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(StoreError::Query("cursor failed".to_string()));
        }
        Ok(self.lock().iter().map(|(_, e)| e.clone()).collect())
    }

    async fn disconnect(&self) {
        self.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}
