use crate::utils::error::Result;

/// Flat view of the directory holding the pages. Names are bare filenames.
pub trait Storage: Send + Sync {
    fn exists(&self, name: &str) -> impl std::future::Future<Output = bool> + Send;
    fn list_files(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn read_to_string(&self, name: &str)
        -> impl std::future::Future<Output = Result<String>> + Send;
    fn write_file(
        &self,
        name: &str,
        data: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn working_dir(&self) -> &str;
    fn dry_run(&self) -> bool;
    fn continue_on_error(&self) -> bool;
}
