use crate::domain::model::MenuModel;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &str;
    fn format(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn collapsed(&self) -> bool;
    fn price_prefix(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn pretty(&self) -> bool;
}

/// Supplies the raw menu text. Failures never reach the parser.
#[async_trait]
pub trait SourceLoader: Send + Sync {
    async fn load(&self) -> Result<String>;

    /// Human readable name of the source, used in logs and error messages.
    fn describe(&self) -> String;
}

pub trait Presenter {
    fn render(&self, model: &MenuModel, out: &mut dyn Write) -> Result<()>;
}
