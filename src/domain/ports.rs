use crate::domain::model::FetchOutcome;
use async_trait::async_trait;

/// 發出單一 GET 請求並回報結果，不重試
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get(&self, url: &str) -> FetchOutcome;
}
