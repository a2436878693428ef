use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::query::CarQuery;
use crate::types::CarRecord;

/// Key-value storage for validated records. Implementations normalize keys.
pub trait CarStore: Send + Sync {
    fn lookup(&self, key: &str) -> Option<CarRecord>;
    fn insert(&self, key: &str, record: CarRecord);
}

/// Produces the raw text reply of a language model for a car query.
#[async_trait]
pub trait CarInfoGenerator: Send + Sync {
    async fn generate(&self, query: &CarQuery) -> Result<String>;
}

#[async_trait]
impl<T: CarInfoGenerator + ?Sized> CarInfoGenerator for Arc<T> {
    async fn generate(&self, query: &CarQuery) -> Result<String> {
        (**self).generate(query).await
    }
}
