use std::boxed::Box;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, AppErrorCode};
use crate::model::{OrderModel, ProductModel};
use crate::AppDataStoreContext;

mod in_mem;
// make in-memory repo visible only for testing purpose
pub use in_mem::order::OrderInMemRepo;
pub use in_mem::product::ProductInMemRepo;

// the repository instance may be used across an await,
// the future created by app callers has to be able to pass to different threads
// , it is the reason to add `Send` and `Sync` as super-traits
#[async_trait]
pub trait AbstProductRepo: Sync + Send {
    // assigns the store identifier, persists, then returns the
    // identified product
    async fn create(&self, item: ProductModel) -> DefaultResult<ProductModel, AppError>;

    // store's natural order, no guaranteed sort
    async fn fetch_all(&self) -> DefaultResult<Vec<ProductModel>, AppError>;

    // bulk point lookup, identifiers without a matching record are
    // silently omitted from the result
    async fn fetch(&self, ids: Vec<String>) -> DefaultResult<Vec<ProductModel>, AppError>;

    async fn save(&self, item: ProductModel) -> DefaultResult<(), AppError>;

    async fn delete(&self, id: &str) -> DefaultResult<(), AppError>;
}

#[async_trait]
pub trait AbsOrderRepo: Sync + Send {
    async fn create(&self, item: OrderModel) -> DefaultResult<OrderModel, AppError>;

    async fn fetch_all(&self) -> DefaultResult<Vec<OrderModel>, AppError>;

    async fn fetch(&self, ids: Vec<String>) -> DefaultResult<Vec<OrderModel>, AppError>;

    async fn save(&self, item: OrderModel) -> DefaultResult<(), AppError>;

    async fn delete(&self, id: &str) -> DefaultResult<(), AppError>;

    // number of orders whose reference points to the given product
    async fn count_by_product(&self, product_id: &str) -> DefaultResult<usize, AppError>;
}

pub async fn app_repo_product(
    ds: Arc<AppDataStoreContext>,
) -> DefaultResult<Box<dyn AbstProductRepo>, AppError> {
    if let Some(m) = ds.in_mem.as_ref() {
        let obj = ProductInMemRepo::new(m.clone()).await?;
        Ok(Box::new(obj))
    } else {
        Err(AppError {
            code: AppErrorCode::MissingDataStore,
            detail: Some("unknown-type".to_string()),
        })
    }
}

pub async fn app_repo_order(
    ds: Arc<AppDataStoreContext>,
) -> DefaultResult<Box<dyn AbsOrderRepo>, AppError> {
    if let Some(m) = ds.in_mem.as_ref() {
        let obj = OrderInMemRepo::new(m.clone()).await?;
        Ok(Box::new(obj))
    } else {
        Err(AppError {
            code: AppErrorCode::MissingDataStore,
            detail: Some("unknown-type".to_string()),
        })
    }
}
