use std::boxed::Box;
use std::collections::{HashMap, HashSet};
use std::result::Result as DefaultResult;
use std::sync::Arc;

use crate::api::web::dto::{
    OrderClientErrorDto, OrderCreateReqDto, OrderDetailReplyDto, OrderEditReqDto, OrderReplyDto,
};
use crate::error::{AppError, AppErrorCode};
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::model::{OrderModel, ProductModel};
use crate::repository::{AbsOrderRepo, AbstProductRepo};

use super::manage_product::{check_product_id, deny_invalid_product_id};
use super::{doc_id_wellformed, DocIdValidity};

#[derive(Debug)]
pub enum OrderUcError {
    ReqContent(OrderClientErrorDto),
    Server(AppError),
}

pub(crate) async fn check_order_id(
    repo: &dyn AbsOrderRepo,
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

pub(crate) fn deny_invalid_order_id(validity: DocIdValidity) -> DefaultResult<(), AppError> {
    match validity {
        DocIdValidity::Malformed => Err(AppError {
            code: AppErrorCode::InvalidIdFormat,
            detail: Some("invalid order id format".to_string()),
        }),
        DocIdValidity::NotExist => Err(AppError {
            code: AppErrorCode::OrderNotExist,
            detail: Some("order id not found".to_string()),
        }),
        DocIdValidity::Acceptable => Ok(()),
    }
}

pub struct CreateOrderUseCase {
    pub repo: Box<dyn AbsOrderRepo>,
    // read-only handle to the product catalog, solely for the existence
    // check preceding the insert
    pub product_repo: Box<dyn AbstProductRepo>,
}

impl CreateOrderUseCase {
    pub async fn execute(
        self,
        data: OrderCreateReqDto,
    ) -> DefaultResult<OrderReplyDto, OrderUcError> {
        let item = OrderModel::try_from(data).map_err(OrderUcError::ReqContent)?;
        let validity = check_product_id(self.product_repo.as_ref(), item.product_id.as_str())
            .await
            .map_err(OrderUcError::Server)?;
        deny_invalid_product_id(validity).map_err(OrderUcError::Server)?;
        // nothing is written when the check above fails. Note no lock spans
        // the check and the insert below, a product removed in between is an
        // accepted race, the store stays available to other callers
        let saved = self.repo.create(item).await.map_err(OrderUcError::Server)?;
        Ok((&saved).into())
    }
} // end of impl CreateOrderUseCase

pub struct RetrieveOrdersUseCase {
    pub repo: Box<dyn AbsOrderRepo>,
    pub product_repo: Box<dyn AbstProductRepo>,
    pub log: Arc<AppLogContext>,
}

impl RetrieveOrdersUseCase {
    pub async fn execute(self) -> DefaultResult<Vec<OrderDetailReplyDto>, AppError> {
        let Self {
            repo,
            product_repo,
            log,
        } = self;
        let orders = repo.fetch_all().await?;
        let pids = orders
            .iter()
            .map(|o| o.product_id.clone())
            .collect::<HashSet<String>>();
        let products = product_repo.fetch(pids.into_iter().collect()).await?;
        let pmap = products
            .into_iter()
            .filter_map(|p| p.id_.clone().map(|id| (id, p)))
            .collect::<HashMap<String, ProductModel>>();
        orders
            .iter()
            .map(|o| {
                if let Some(p) = pmap.get(o.product_id.as_str()) {
                    Ok(o.to_detail_reply(p))
                } else {
                    let oid = o.id_.as_deref().unwrap_or("none");
                    app_log_event!(
                        log,
                        AppLogLevel::ERROR,
                        "dangling product reference, order:{}, product:{}",
                        oid,
                        o.product_id.as_str()
                    );
                    Err(AppError {
                        code: AppErrorCode::DataCorruption,
                        detail: Some(format!("dangling product reference:{}", o.product_id)),
                    })
                }
            })
            .collect::<DefaultResult<Vec<OrderDetailReplyDto>, AppError>>()
    }
} // end of impl RetrieveOrdersUseCase

pub struct RetrieveOrderUseCase {
    pub repo: Box<dyn AbsOrderRepo>,
    pub product_repo: Box<dyn AbstProductRepo>,
}

impl RetrieveOrderUseCase {
    // absence is not an error at this layer, the boundary renders `null`
    pub async fn execute(self, id: String) -> DefaultResult<Option<OrderDetailReplyDto>, AppError> {
        if !doc_id_wellformed(id.as_str()) {
            return Err(AppError {
                code: AppErrorCode::InvalidIdFormat,
                detail: Some("invalid order id format".to_string()),
            });
        }
        let found = self.repo.fetch(vec![id]).await?;
        let order = match found.into_iter().next() {
            Some(o) => o,
            None => return Ok(None),
        };
        let products = self
            .product_repo
            .fetch(vec![order.product_id.clone()])
            .await?;
        let product = products.into_iter().next().ok_or(AppError {
            code: AppErrorCode::DataCorruption,
            detail: Some(format!("dangling product reference:{}", order.product_id)),
        })?;
        Ok(Some(order.to_detail_reply(&product)))
    }
} // end of impl RetrieveOrderUseCase

pub struct EditOrderUseCase {
    pub repo: Box<dyn AbsOrderRepo>,
}

impl EditOrderUseCase {
    pub async fn execute(
        self,
        id: String,
        data: OrderEditReqDto,
    ) -> DefaultResult<OrderReplyDto, OrderUcError> {
        let validity = check_order_id(self.repo.as_ref(), id.as_str())
            .await
            .map_err(OrderUcError::Server)?;
        deny_invalid_order_id(validity).map_err(OrderUcError::Server)?;
        let found = self
            .repo
            .fetch(vec![id])
            .await
            .map_err(OrderUcError::Server)?;
        let mut m = found.into_iter().next().ok_or(OrderUcError::Server(AppError {
            code: AppErrorCode::OrderNotExist,
            detail: Some("order id not found".to_string()),
        }))?;
        m.apply_update(data).map_err(OrderUcError::ReqContent)?;
        let updated = OrderReplyDto::from(&m);
        self.repo.save(m).await.map_err(OrderUcError::Server)?;
        Ok(updated)
    }
}

pub struct RemoveOrderUseCase {
    pub repo: Box<dyn AbsOrderRepo>,
}

impl RemoveOrderUseCase {
    pub async fn execute(self, id: String) -> DefaultResult<(), AppError> {
        let validity = check_order_id(self.repo.as_ref(), id.as_str()).await?;
        deny_invalid_order_id(validity)?;
        self.repo.delete(id.as_str()).await
    }
}
