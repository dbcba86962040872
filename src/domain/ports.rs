use crate::utils::error::Result;
use async_trait::async_trait;

/// External metadata provider. Returns the poster URL for a title, or `None`
/// when the provider has nothing for it. Transport-level failures are the
/// implementation's business; callers treat any error the same as `None`.
#[async_trait]
pub trait PosterLookup: Send + Sync {
    async fn lookup(&self, title: &str, year: Option<u16>) -> Result<Option<String>>;
}

#[async_trait]
impl<T: PosterLookup + ?Sized> PosterLookup for std::sync::Arc<T> {
    async fn lookup(&self, title: &str, year: Option<u16>) -> Result<Option<String>> {
        (**self).lookup(title, year).await
    }
}

/// Opaque key-value blob store backing persistence. `load` distinguishes an
/// absent key from a read failure.
pub trait Store: Send + Sync {
    fn load(&self, key: &str) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn save(
        &self,
        key: &str,
        blob: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn data_path(&self) -> &str;
}
