use std::boxed::Box;
use std::collections::HashMap;
use std::convert::Into;
use std::result::Result as DefaultResult;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use rust_decimal::Decimal;

use super::super::AbstProductRepo;
use super::DocFilterAcceptAllOp;
use crate::constant::app_meta;
use crate::datastore::{AbstDocStore, AppDocFetchedDocument};
use crate::error::{AppError, AppErrorCode};
use crate::generate_doc_id;
use crate::model::ProductModel;

const COLLECTION_LABEL: &'static str = "products";

enum InMemColIdx {
    Name,
    Description,
    Price,
    CreateTime,
    TotNumColumns,
}

impl Into<usize> for InMemColIdx {
    fn into(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Description => 1,
            Self::Price => 2,
            Self::CreateTime => 3,
            Self::TotNumColumns => 4,
        }
    }
}

pub struct ProductInMemRepo {
    datastore: Arc<Box<dyn AbstDocStore>>,
}

impl ProductInMemRepo {
    pub async fn new(m: Arc<Box<dyn AbstDocStore>>) -> DefaultResult<Self, AppError> {
        m.create_collection(COLLECTION_LABEL).await?;
        Ok(Self { datastore: m })
    }

    fn model_to_doc(item: &ProductModel) -> DefaultResult<(String, Vec<String>), AppError> {
        let pkey = item.id_.clone().ok_or(AppError {
            code: AppErrorCode::EmptyInputData,
            detail: Some("save ProductModel without id".to_string()),
        })?;
        // allocate all columns in advance, so the order of the assignments
        // below can be arbitrary
        let mut doc = (0..InMemColIdx::TotNumColumns.into())
            .map(|_n| String::new())
            .collect::<Vec<String>>();
        let _ = [
            (InMemColIdx::Name, item.name.clone()),
            (
                InMemColIdx::Description,
                item.description.clone().unwrap_or_default(),
            ),
            (InMemColIdx::Price, item.price.to_string()),
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

    fn doc_to_model(key: &str, doc: &AppDocFetchedDocument) -> DefaultResult<ProductModel, AppError> {
        let name = Self::doc_column(doc, InMemColIdx::Name)?.to_string();
        let description = {
            let d = Self::doc_column(doc, InMemColIdx::Description)?;
            if d.is_empty() {
                None
            } else {
                Some(d.to_string())
            }
        };
        let price = {
            let raw = Self::doc_column(doc, InMemColIdx::Price)?;
            Decimal::from_str(raw).map_err(|e| AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("product-price, actual:{}, error:{}", raw, e)),
            })?
        };
        let create_time = {
            let raw = Self::doc_column(doc, InMemColIdx::CreateTime)?;
            DateTime::parse_from_rfc3339(raw).map_err(|e| AppError {
                code: AppErrorCode::DataCorruption,
                detail: Some(format!("product-ctime, actual:{}, error:{}", raw, e)),
            })?
        };
        Ok(ProductModel {
            id_: Some(key.to_string()),
            name,
            description,
            price,
            create_time,
        })
    } // end of fn doc_to_model

    fn doc_column(doc: &AppDocFetchedDocument, idx: InMemColIdx) -> DefaultResult<&str, AppError> {
        let idx: usize = idx.into();
        doc.get(idx).map(String::as_str).ok_or(AppError {
            code: AppErrorCode::DataCorruption,
            detail: Some(format!("{}, missing-column:{}", COLLECTION_LABEL, idx)),
        })
    }

    async fn save_doc(&self, item: &ProductModel) -> DefaultResult<(), AppError> {
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
} // end of impl ProductInMemRepo

#[async_trait]
impl AbstProductRepo for ProductInMemRepo {
    async fn create(&self, mut item: ProductModel) -> DefaultResult<ProductModel, AppError> {
        item.id_ = Some(generate_doc_id(app_meta::MACHINE_CODE));
        self.save_doc(&item).await?;
        Ok(item)
    }

    async fn fetch_all(&self) -> DefaultResult<Vec<ProductModel>, AppError> {
        let op = DocFilterAcceptAllOp;
        let keys = self
            .datastore
            .filter_keys(COLLECTION_LABEL.to_string(), &op)
            .await?;
        self.fetch(keys).await
    }

    async fn fetch(&self, ids: Vec<String>) -> DefaultResult<Vec<ProductModel>, AppError> {
        let info = HashMap::from([(COLLECTION_LABEL.to_string(), ids)]);
        let result_raw = self.datastore.fetch(info).await?;
        let fetched = if let Some(d) = result_raw.get(COLLECTION_LABEL) {
            d.iter()
                .map(|(key, doc)| Self::doc_to_model(key, doc))
                .collect::<DefaultResult<Vec<ProductModel>, AppError>>()?
        } else {
            Vec::new()
        };
        Ok(fetched)
    }

    async fn save(&self, item: ProductModel) -> DefaultResult<(), AppError> {
        self.save_doc(&item).await
    }

    async fn delete(&self, id: &str) -> DefaultResult<(), AppError> {
        let info = HashMap::from([(COLLECTION_LABEL.to_string(), vec![id.to_string()])]);
        let _num_discarded = self.datastore.delete(info).await?;
        Ok(())
    }
} // end of impl AbstProductRepo
