use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::future::IntoFuture;
use std::time::Duration;
use tracing::debug;

use super::{Employee, EmployeeStore, RecordId, StoreError};
use crate::config::StoreConfig;

/// MongoDB-backed store holding one long-lived client session.
pub struct MongoStore {
    client: Client,
    employees: Collection<Employee>,
    timeout: Duration,
}

impl MongoStore {
    /// Open a session and ping the server so an unreachable address fails here
    /// rather than on the first command.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let uri = config.uri.as_str();
        let mut options = bounded("connect", config.timeout, ClientOptions::parse(uri))
            .await
            .map_err(|e| StoreError::connection(uri, e))?
            .map_err(|e| StoreError::connection(uri, e))?;
        options.connect_timeout = Some(config.timeout);
        options.server_selection_timeout = Some(config.timeout);

        let client = Client::with_options(options).map_err(|e| StoreError::connection(uri, e))?;
        let database = client.database(&config.database);
        bounded("connect", config.timeout, database.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|e| StoreError::connection(uri, e))?
            .map_err(|e| StoreError::connection(uri, e))?;

        debug!(
            uri = %config.uri,
            database = %config.database,
            collection = %config.collection,
            "connected"
        );
        Ok(Self {
            employees: database.collection(&config.collection),
            client,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl EmployeeStore for MongoStore {
    async fn insert(&self, employee: &Employee) -> Result<RecordId, StoreError> {
        let result = bounded("insert", self.timeout, self.employees.insert_one(employee))
            .await?
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(record_id(result.inserted_id))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, StoreError> {
        let fetch = async {
            let cursor = self.employees.find(doc! {}).await?;
            cursor.try_collect::<Vec<Employee>>().await
        };
        bounded("list", self.timeout, fetch)
            .await?
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn disconnect(&self) {
        self.client.clone().shutdown().await;
        debug!("disconnected");
    }
}

/// Run one database round trip under the fixed per-operation deadline.
async fn bounded<F, T>(operation: &'static str, timeout: Duration, fut: F) -> Result<T, StoreError>
where
    F: IntoFuture<Output = T>,
{
    tokio::time::timeout(timeout, fut)
        .await
        .map_err(|_| StoreError::Timeout { operation, timeout })
}

fn record_id(id: Bson) -> RecordId {
    match id {
        Bson::ObjectId(oid) => RecordId(oid.to_hex()),
        Bson::String(s) => RecordId(s),
        other => RecordId(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_record_id_from_object_id() {
        let oid = ObjectId::new();
        assert_eq!(record_id(Bson::ObjectId(oid)).0, oid.to_hex());
        assert_eq!(record_id(Bson::String("abc".into())).0, "abc");
        assert_eq!(record_id(Bson::Int32(7)).0, "7");
    }

    #[tokio::test]
    async fn test_bounded_times_out() {
        let result = bounded("list", Duration::from_millis(10), std::future::pending::<()>()).await;
        assert!(matches!(
            result,
            Err(StoreError::Timeout { operation: "list", .. })
        ));
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_is_a_connection_error() {
        // Either the driver's server selection or our deadline fires first;
        // both must surface as a connection failure.
        let config = StoreConfig {
            uri: "mongodb://127.0.0.1:1".to_string(),
            timeout: Duration::from_millis(200),
            ..StoreConfig::default()
        };
        assert!(matches!(
            MongoStore::connect(&config).await,
            Err(StoreError::Connection { .. })
        ));
    }

    #[test]
    fn test_connect_timeout_maps_to_connection() {
        let timeout = StoreError::Timeout {
            operation: "connect",
            timeout: Duration::from_millis(5),
        };
        let error = StoreError::connection("mongodb://db:27017", timeout);
        assert!(matches!(&error, StoreError::Connection { uri, .. } if uri == "mongodb://db:27017"));
        assert_eq!(
            error.to_string(),
            "can't connect to mongodb://db:27017: connect timed out after 5ms"
        );
    }

    // Needs a MongoDB server on the default address.
    #[tokio::test]
    #[ignore]
    async fn test_mongo_insert_then_list() {
        let config = StoreConfig {
            database: "employee-dms-test".to_string(),
            ..StoreConfig::default()
        };
        let store = MongoStore::connect(&config).await.unwrap();
        let employee = Employee::new("Alice", 30, "F");
        let id = store.insert(&employee).await.unwrap();
        assert!(!id.0.is_empty());
        assert!(store.list_all().await.unwrap().contains(&employee));
        store.employees.drop().await.unwrap();
        store.disconnect().await;
    }
}
