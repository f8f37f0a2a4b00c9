use std::boxed::Box;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use crate::api::web::dto::{
    ProductClientErrorDto, ProductCreateReqDto, ProductEditReqDto, ProductReplyDto,
};
use crate::error::{AppError, AppErrorCode};
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::ProductModel;
use crate::repository::{AbsOrderRepo, AbstProductRepo};

use super::{doc_id_wellformed, DocIdValidity};

#[derive(Debug)]
pub enum ProductUcError {
    ReqContent(ProductClientErrorDto),
    Server(AppError),
}

// every product operation taking an identifier runs the same two checks
// before acting, format validity then existence
pub(crate) async fn check_product_id(
    repo: &dyn AbstProductRepo,
    id: &str,
) -> DefaultResult<DocIdValidity, AppError> {
    if !doc_id_wellformed(id) {
        return Ok(DocIdValidity::Malformed);
    }
    let found = repo.fetch(vec![id.to_string()]).await?;
    if found.is_empty() {
        Ok(DocIdValidity::NotExist)
    } else {
        Ok(DocIdValidity::Acceptable)
    }
}

pub(crate) fn deny_invalid_product_id(validity: DocIdValidity) -> DefaultResult<(), AppError> {
    match validity {
        DocIdValidity::Malformed => Err(AppError {
            code: AppErrorCode::InvalidIdFormat,
            detail: Some("invalid product id format".to_string()),
        }),
        DocIdValidity::NotExist => Err(AppError {
            code: AppErrorCode::ProductNotExist,
            detail: Some("product id not found".to_string()),
        }),
        DocIdValidity::Acceptable => Ok(()),
    }
}

pub struct CreateProductUseCase {
    pub repo: Box<dyn AbstProductRepo>,
}

impl CreateProductUseCase {
    pub async fn execute(
        self,
        data: ProductCreateReqDto,
    ) -> DefaultResult<ProductReplyDto, ProductUcError> {
        let item = ProductModel::try_from(data).map_err(ProductUcError::ReqContent)?;
        let saved = self
            .repo
            .create(item)
            .await
            .map_err(ProductUcError::Server)?;
        Ok((&saved).into())
    }
}

pub struct RetrieveProductsUseCase {
    pub repo: Box<dyn AbstProductRepo>,
}

impl RetrieveProductsUseCase {
    pub async fn execute(self) -> DefaultResult<Vec<ProductReplyDto>, AppError> {
        let ms = self.repo.fetch_all().await?;
        Ok(ms.iter().map(ProductReplyDto::from).collect())
    }
}

pub struct RetrieveProductUseCase {
    pub repo: Box<dyn AbstProductRepo>,
}

impl RetrieveProductUseCase {
    pub async fn execute(self, id: String) -> DefaultResult<ProductReplyDto, AppError> {
        let validity = check_product_id(self.repo.as_ref(), id.as_str()).await?;
        deny_invalid_product_id(validity)?;
        let found = self.repo.fetch(vec![id]).await?;
        // existence was verified above, a record disappearing in between is
        // reported the same way as the validation would
        let m = found.into_iter().next().ok_or(AppError {
            code: AppErrorCode::ProductNotExist,
            detail: Some("product id not found".to_string()),
        })?;
        Ok((&m).into())
    }
}

pub struct EditProductUseCase {
    pub repo: Box<dyn AbstProductRepo>,
}

impl EditProductUseCase {
    pub async fn execute(
        self,
        id: String,
        data: ProductEditReqDto,
    ) -> DefaultResult<ProductReplyDto, ProductUcError> {
        let validity = check_product_id(self.repo.as_ref(), id.as_str())
            .await
            .map_err(ProductUcError::Server)?;
        deny_invalid_product_id(validity).map_err(ProductUcError::Server)?;
        let found = self
            .repo
            .fetch(vec![id])
            .await
            .map_err(ProductUcError::Server)?;
        let mut m = found.into_iter().next().ok_or(ProductUcError::Server(AppError {
            code: AppErrorCode::ProductNotExist,
            detail: Some("product id not found".to_string()),
        }))?;
        m.apply_update(data).map_err(ProductUcError::ReqContent)?;
        let updated = ProductReplyDto::from(&m);
        self.repo.save(m).await.map_err(ProductUcError::Server)?;
        Ok(updated)
    }
} // end of impl EditProductUseCase

pub struct RemoveProductUseCase {
    pub repo: Box<dyn AbstProductRepo>,
    pub o_repo: Box<dyn AbsOrderRepo>,
    pub log: Arc<AppLogContext>,
}

impl RemoveProductUseCase {
    pub async fn execute(self, id: String) -> DefaultResult<(), AppError> {
        let Self { repo, o_repo, log } = self;
        let validity = check_product_id(repo.as_ref(), id.as_str()).await?;
        deny_invalid_product_id(validity)?;
        let num_refs = o_repo.count_by_product(id.as_str()).await?;
        if num_refs > 0 {
            app_log_event!(
                log,
                AppLogLevel::WARNING,
                "delete rejected, product:{}, num-referencing-orders:{}",
                id.as_str(),
                num_refs
            );
            return Err(AppError {
                code: AppErrorCode::ProductReferencedByOrder,
                detail: Some("cannot delete product, referenced by existing orders".to_string()),
            });
        }
        repo.delete(id.as_str()).await
    }
} // end of impl RemoveProductUseCase
