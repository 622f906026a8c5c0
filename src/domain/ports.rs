use crate::domain::language::Language;
use crate::domain::model::{AnalyzeRequest, AnalyzeResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination of rendered reports.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn page_url(&self) -> &str;
    fn output_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn print_view(&self) -> bool;
}

/// The remote `/analyze` backend.
///
/// `Ok` means a JSON body came back (successful or not); `Err` is a
/// transport or decoding failure.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest, language: Language)
        -> Result<AnalyzeResponse>;
}
