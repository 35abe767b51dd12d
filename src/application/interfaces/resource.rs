use crate::error::AppError;
use crate::model::requests::{CreateUserRequest, CreateVoucherRequest, Validate};
use crate::model::responses::{DeleteResult, ListResult};
use crate::presentation::{PermanentUser, Voucher};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Describes a resource kind served by the backend
///
/// A kind fixes the endpoint segment, the natural key field and the record
/// and request types; [`ResourceClient`](crate::application::services::ResourceClient)
/// does the rest.
pub trait ResourceKind: Send + Sync + 'static {
    /// Typed record returned by the backend
    type Record: DeserializeOwned + Serialize + Clone + Send + Sync + 'static;
    /// Request accepted by `create`
    type CreateRequest: Validate + Serialize + Send + Sync;

    /// Human readable name used in logs and errors
    const KIND: &'static str;
    /// Endpoint segment under the base URL
    const ENDPOINT: &'static str;
    /// Backend field holding the natural key
    const NATURAL_KEY_FIELD: &'static str;

    /// Returns the natural key of a record
    fn natural_key(record: &Self::Record) -> Option<&str>;

    /// Returns the internal id of a record
    fn record_id(record: &Self::Record) -> Option<u64>;

    /// Returns `<endpoint>/<action>.json`
    fn path(action: &str) -> String {
        format!("{}/{action}.json", Self::ENDPOINT)
    }
}

/// Vouchers, keyed by their code
pub struct VoucherKind;

impl ResourceKind for VoucherKind {
    type Record = Voucher;
    type CreateRequest = CreateVoucherRequest;

    const KIND: &'static str = "voucher";
    const ENDPOINT: &'static str = "vouchers";
    const NATURAL_KEY_FIELD: &'static str = "name";

    fn natural_key(record: &Voucher) -> Option<&str> {
        record.name.as_deref()
    }

    fn record_id(record: &Voucher) -> Option<u64> {
        record.id
    }
}

/// Permanent users, keyed by their username
pub struct UserKind;

impl ResourceKind for UserKind {
    type Record = PermanentUser;
    type CreateRequest = CreateUserRequest;

    const KIND: &'static str = "permanent user";
    const ENDPOINT: &'static str = "permanent-users";
    const NATURAL_KEY_FIELD: &'static str = "username";

    fn natural_key(record: &PermanentUser) -> Option<&str> {
        record.username.as_deref()
    }

    fn record_id(record: &PermanentUser) -> Option<u64> {
        record.id
    }
}

/// Interface for a resource-scoped sub-client
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Resource kind served by this sub-client
    type Kind: ResourceKind;

    /// Creates a record
    ///
    /// The request is validated before anything is sent.
    ///
    /// # Returns
    /// * The created record as reported by the backend
    async fn create(
        &self,
        request: &<Self::Kind as ResourceKind>::CreateRequest,
    ) -> Result<<Self::Kind as ResourceKind>::Record, AppError>;

    /// Lists at most `limit` records, starting at `offset`
    ///
    /// # Returns
    /// * A page of records and the server-side total
    async fn list(
        &self,
        limit: u32,
        offset: Option<u32>,
    ) -> Result<ListResult<<Self::Kind as ResourceKind>::Record>, AppError>;

    /// Gets a record by its natural key (voucher code, username)
    ///
    /// # Returns
    /// * The matching record, or `AppError::NotFound`
    async fn get_details(
        &self,
        natural_key: &str,
    ) -> Result<<Self::Kind as ResourceKind>::Record, AppError>;

    /// Deletes a record by its internal id
    ///
    /// A record the backend does not know yields `success: false`.
    async fn delete(&self, id: u64) -> Result<DeleteResult, AppError>;
}
