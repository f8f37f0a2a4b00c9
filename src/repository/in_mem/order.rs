use std::boxed::Box;
use std::collections::HashMap;
use std::convert::Into;
use std::result::Result as DefaultResult;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;

use super::super::AbsOrderRepo;
use super::DocFilterAcceptAllOp;
use crate::constant::app_meta;
use crate::datastore::{AbsDocFilterKeyOp, AbstDocStore, AppDocFetchedDocument};
use crate::error::{AppError, AppErrorCode};
use crate::generate_doc_id;
use crate::model::OrderModel;

const COLLECTION_LABEL: &'static str = "orders";

enum InMemColIdx {
    ProductId,
    Quantity,
    CreateTime,
    TotNumColumns,
}

impl Into<usize> for InMemColIdx {
    fn into(self) -> usize {
        match self {
            Self::ProductId => 0,
            Self::Quantity => 1,
            Self::CreateTime => 2,
            Self::TotNumColumns => 3,
        }
    }
}

// matches documents whose product reference equals the given identifier
struct ProductRefFilterOp {
    product_id: String,
}

impl AbsDocFilterKeyOp for ProductRefFilterOp {
    fn filter(&self, _key: &String, doc: &Vec<String>) -> bool {
        let idx: usize = InMemColIdx::ProductId.into();
        doc.get(idx)
            .map(|v| v.as_str() == self.product_id.as_str())
            .unwrap_or(false)
    }
}

pub struct OrderInMemRepo {
    datastore: Arc<Box<dyn AbstDocStore>>,
}

impl OrderInMemRepo {
    pub async fn new(m: Arc<Box<dyn AbstDocStore>>) -> DefaultResult<Self, AppError> {
        m.create_collection(COLLECTION_LABEL).await?;
        Ok(Self { datastore: m })
    }

    fn model_to_doc(item: &OrderModel) -> DefaultResult<(String, Vec<String>), AppError> {
        let pkey = item.id_.clone().ok_or(AppError {
            code: AppErrorCode::EmptyInputData,
            detail: Some("save OrderModel without id".to_string()),
        })?;
        let mut doc = (0..InMemColIdx::TotNumColumns.into())
            .map(|_n| String::new())
            .collect::<Vec<String>>();
        let _ = [
            (InMemColIdx::ProductId, item.product_id.clone()),
            (InMemColIdx::Quantity, item.quantity.to_string()),
            (InMemColIdx::CreateTime, item.create_time.to_rfc3339()),
        ]
        .into_iter()
        .map(|(idx, val)| {
            let idx: usize = idx.into();
            doc[idx] = val;
        })
        .collect::<Vec<()>>();
        Ok((pkey, doc))
    }

    fn doc_to_model(key: &str, doc: &AppDocFetchedDocument) -> DefaultResult<OrderModel, AppError> {
        let product_id = Self::doc_column(doc, InMemColIdx::ProductId)?.to_string();
        let quantity = {
            let raw = Self::doc_column(doc, InMemColIdx::Quantity)?;
            raw.parse::<u32>().map_err(|e| AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("order-quantity, actual:{}, error:{}", raw, e)),
            })?
        };
        let create_time = {
            let raw = Self::doc_column(doc, InMemColIdx::CreateTime)?;
            DateTime::parse_from_rfc3339(raw).map_err(|e| AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("order-ctime, actual:{}, error:{}", raw, e)),
            })?
        };
        Ok(OrderModel {
            id_: Some(key.to_string()),
            product_id,
            quantity,
            create_time,
        })
    }

    fn doc_column(doc: &AppDocFetchedDocument, idx: InMemColIdx) -> DefaultResult<&str, AppError> {
        let idx: usize = idx.into();
        doc.get(idx).map(String::as_str).ok_or(AppError {
            code: AppErrorCode::DataCorruption,
            detail: Some(format!("{}, missing-column:{}", COLLECTION_LABEL, idx)),
        })
    }

    async fn save_doc(&self, item: &OrderModel) -> DefaultResult<(), AppError> {
        let (pkey, doc) = Self::model_to_doc(item)?;
        let data = {
            let mut h = HashMap::new();
            let collection_data = HashMap::from([(pkey, doc)]);
            h.insert(COLLECTION_LABEL.to_string(), collection_data);
            h
        };
        let _num_saved = self.datastore.save(data).await?;
        Ok(())
    }
} // end of impl OrderInMemRepo

#[async_trait]
impl AbsOrderRepo for OrderInMemRepo {
    async fn create(&self, mut item: OrderModel) -> DefaultResult<OrderModel, AppError> {
        item.id_ = Some(generate_doc_id(app_meta::MACHINE_CODE));
        self.save_doc(&item).await?;
        Ok(item)
    }

    async fn fetch_all(&self) -> DefaultResult<Vec<OrderModel>, AppError> {
        let op = DocFilterAcceptAllOp;
        let keys = self
            .datastore
            .filter_keys(COLLECTION_LABEL.to_string(), &op)
            .await?;
        self.fetch(keys).await
    }

    async fn fetch(&self, ids: Vec<String>) -> DefaultResult<Vec<OrderModel>, AppError> {
        let info = HashMap::from([(COLLECTION_LABEL.to_string(), ids)]);
        let result_raw = self.datastore.fetch(info).await?;
        let fetched = if let Some(d) = result_raw.get(COLLECTION_LABEL) {
            d.iter()
                .map(|(key, doc)| Self::doc_to_model(key, doc))
                .collect::<DefaultResult<Vec<OrderModel>, AppError>>()?
        } else {
            Vec::new()
        };
        Ok(fetched)
    }

    async fn save(&self, item: OrderModel) -> DefaultResult<(), AppError> {
        self.save_doc(&item).await
    }

    async fn delete(&self, id: &str) -> DefaultResult<(), AppError> {
        let info = HashMap::from([(COLLECTION_LABEL.to_string(), vec![id.to_string()])]);
        let _num_discarded = self.datastore.delete(info).await?;
        Ok(())
    }

    async fn count_by_product(&self, product_id: &str) -> DefaultResult<usize, AppError> {
        let op = ProductRefFilterOp {
            product_id: product_id.to_string(),
        };
        let keys = self
            .datastore
            .filter_keys(COLLECTION_LABEL.to_string(), &op)
            .await?;
        Ok(keys.len())
    }
} // end of impl AbsOrderRepo
