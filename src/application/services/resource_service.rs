/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::application::interfaces::resource::{
    ResourceKind, ResourceService, UserKind, VoucherKind,
};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{CreateVoucherRequest, Validate};
use crate::model::responses::{ApiEnvelope, DeleteResult, ListResult};
use crate::presentation::Voucher;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Sub-client for vouchers
pub type VoucherClient = ResourceClient<VoucherKind>;
/// Sub-client for permanent users
pub type UserClient = ResourceClient<UserKind>;

/// Generic sub-client issuing CRUD calls for one resource kind
pub struct ResourceClient<K: ResourceKind> {
    http_client: Arc<HttpClient>,
    _kind: PhantomData<K>,
}

impl<K: ResourceKind> ResourceClient<K> {
    /// Creates a sub-client sharing the given HTTP client and its session
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self {
            http_client,
            _kind: PhantomData,
        }
    }

    async fn add(&self, request: &K::CreateRequest) -> Result<ApiEnvelope, AppError> {
        request.validate()?;
        let body = serde_json::to_value(request)?;
        info!("Creating {}", K::KIND);
        self.http_client
            .post(&K::path("add"), body)
            .await?
            .into_success()
    }

    fn index_query(limit: u32, offset: u32) -> Vec<(String, String)> {
        vec![
            ("page".to_string(), (offset / limit + 1).to_string()),
            ("start".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ]
    }

    fn parse_items(envelope: &mut ApiEnvelope) -> Result<Vec<K::Record>, AppError> {
        let items = envelope.items.take().ok_or_else(|| {
            AppError::Protocol(format!("{} index response has no 'items'", K::KIND))
        })?;
        items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(AppError::from))
            .collect()
    }
}

#[async_trait]
impl<K: ResourceKind> ResourceService for ResourceClient<K> {
    type Kind = K;

    async fn create(&self, request: &K::CreateRequest) -> Result<K::Record, AppError> {
        let envelope = self.add(request).await?;
        let record = envelope
            .data_records::<K::Record>()?
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::Protocol(format!("{} create response carries no record", K::KIND))
            })?;
        info!(
            "Created {} {} (id: {:?})",
            K::KIND,
            K::natural_key(&record).unwrap_or("<unnamed>"),
            K::record_id(&record)
        );
        Ok(record)
    }

    async fn list(
        &self,
        limit: u32,
        offset: Option<u32>,
    ) -> Result<ListResult<K::Record>, AppError> {
        if limit == 0 {
            return Err(AppError::Validation(
                "limit must be a positive integer".to_string(),
            ));
        }
        let offset = offset.unwrap_or(0);

        debug!("Listing {}s (limit {}, offset {})", K::KIND, limit, offset);
        let mut envelope = self
            .http_client
            .get(&K::path("index"), Self::index_query(limit, offset))
            .await?
            .into_success()?;

        let mut items = Self::parse_items(&mut envelope)?;
        let total_count = envelope.total_count.unwrap_or(items.len() as u64);

        if items.len() > limit as usize {
            warn!(
                "Backend returned {} {}s for a limit of {}, truncating",
                items.len(),
                K::KIND,
                limit
            );
            items.truncate(limit as usize);
        }

        debug!("{} {}s obtained of {}", items.len(), K::KIND, total_count);
        Ok(ListResult { total_count, items })
    }

    async fn get_details(&self, natural_key: &str) -> Result<K::Record, AppError> {
        let key = natural_key.trim();
        if key.is_empty() {
            return Err(AppError::Validation(format!(
                "{} {} must not be empty",
                K::KIND,
                K::NATURAL_KEY_FIELD
            )));
        }

        let filter = json!([{
            "operator": "==",
            "value": key,
            "property": K::NATURAL_KEY_FIELD,
        }]);
        let mut query = Self::index_query(DEFAULT_PAGE_SIZE, 0);
        query.push(("filter".to_string(), filter.to_string()));

        debug!("Getting {} details: {}", K::KIND, key);
        let mut envelope = self
            .http_client
            .get(&K::path("index"), query)
            .await?
            .into_success()?;

        Self::parse_items(&mut envelope)?
            .into_iter()
            .find(|record| K::natural_key(record) == Some(key))
            .ok_or_else(|| AppError::NotFound(format!("{} '{}'", K::KIND, key)))
    }

    async fn delete(&self, id: u64) -> Result<DeleteResult, AppError> {
        if id == 0 {
            return Err(AppError::Validation(format!("{} id is required", K::KIND)));
        }

        info!("Deleting {} {}", K::KIND, id);
        let body: Value = json!({ "id": id });
        let result = match self.http_client.post(&K::path("delete"), body).await {
            Ok(envelope) => DeleteResult::from(envelope),
            Err(AppError::NotFound(message)) => DeleteResult::failed(message),
            Err(e) => return Err(e),
        };

        if result.success {
            info!("✓ Deleted {} {}", K::KIND, id);
        } else {
            warn!(
                "Backend did not delete {} {}: {}",
                K::KIND,
                id,
                result.message.as_deref().unwrap_or("no message")
            );
        }
        Ok(result)
    }
}

impl ResourceClient<VoucherKind> {
    /// Creates a batch of vouchers and returns all of them
    ///
    /// `create` returns only the first voucher of a batch.
    pub async fn create_batch(
        &self,
        request: &CreateVoucherRequest,
    ) -> Result<Vec<Voucher>, AppError> {
        let envelope = self.add(request).await?;
        let vouchers = envelope.data_records::<Voucher>()?;
        if vouchers.is_empty() {
            return Err(AppError::Protocol(
                "voucher create response carries no record".to_string(),
            ));
        }
        info!("Created {} vouchers", vouchers.len());
        Ok(vouchers)
    }
}
