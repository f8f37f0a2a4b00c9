
use std::boxed::Box;
use std::sync::Arc;

use async_trait::async_trait;

use storefront::datastore::{
    AbsDocFilterKeyOp, AbstDocStore, AppDocDeleteInfo, AppDocFetchKeys, AppDocFetchedData,
    AppDocUpdateData,
};
use storefront::error::{AppError, AppErrorCode};
use storefront::{AppDataStoreContext, AppInMemoryDbCfg};

pub(crate) fn in_mem_ds_ctx_setup<T: AbstDocStore + 'static>(
    max_items: u32,
) -> Arc<AppDataStoreContext> {
    let d = AppInMemoryDbCfg {
        alias: format!("utest"),
        max_items,
    };
    let obj = T::new(&d);
    let obj: Box<dyn AbstDocStore> = Box::new(obj);
    let inmem_ds = Arc::new(obj);
    Arc::new(AppDataStoreContext {
        in_mem: Some(inmem_ds),
    })
}

pub(crate) struct MockInMemDeadDataStore {}

#[async_trait]
impl AbstDocStore for MockInMemDeadDataStore {
    fn new(_cfg: &AppInMemoryDbCfg) -> Self
    where
        Self: Sized,
    {
        Self {}
    }
    async fn create_collection(&self, _label: &str) -> Result<(), AppError> {
        Ok(())
    }
    async fn save(&self, _data: AppDocUpdateData) -> Result<usize, AppError> {
        Err(AppError {
            code: AppErrorCode::DataTableNotExist,
            detail: Some(format!("utest")),
        })
    }
    async fn delete(&self, _info: AppDocDeleteInfo) -> Result<usize, AppError> {
        Err(AppError {
            code: AppErrorCode::NotImplemented,
            detail: Some(format!("utest")),
        })
    }
    async fn fetch(&self, _keys: AppDocFetchKeys) -> Result<AppDocFetchedData, AppError> {
        Err(AppError {
            code: AppErrorCode::AcquireLockFailure,
            detail: Some(format!("utest")),
        })
    }
    async fn filter_keys(
        &self,
        _label: String,
        _op: &dyn AbsDocFilterKeyOp,
    ) -> Result<Vec<String>, AppError> {
        Err(AppError {
            code: AppErrorCode::NotImplemented,
            detail: Some(format!("utest")),
        })
    }
}
