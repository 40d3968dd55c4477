pub mod error;
pub mod memory;
pub mod mongo;
pub mod record;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use record::{Employee, RecordId};

use async_trait::async_trait;

/// Persistence boundary for employee records.
///
/// Implementations perform no semantic validation; callers check `age`
/// before building an [`Employee`].
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, employee: &Employee) -> Result<RecordId, StoreError>;

    /// Every stored record in the backend's natural order. Empty is not an error.
    async fn list_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Release the session. Call once, at shutdown.
    async fn disconnect(&self);
}
