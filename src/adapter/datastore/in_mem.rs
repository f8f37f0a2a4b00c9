use std::cell::RefCell;
use std::collections::HashMap;
use std::result::Result as DefaultResult;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::config::AppInMemoryDbCfg;
use crate::error::{AppError, AppErrorCode};

// simple implementation of an in-memory document storage

// application callers are responsible to maintain the structure of each
// document in each collection. Each field of a document is stringified
// regardless of its original type (integer, decimal, timestamp)
type InnerDocument = Vec<String>;
type InnerCollection = HashMap<String, InnerDocument>;
type AllCollection = HashMap<String, InnerCollection>;
pub type AppDocUpdateData = AllCollection;
pub type AppDocDeleteInfo = HashMap<String, Vec<String>>; // list of IDs per collection
pub type AppDocFetchKeys = HashMap<String, Vec<String>>; // list of IDs per collection
pub type AppDocFetchedData = AllCollection;
pub type AppDocFetchedCollection = InnerCollection;
pub type AppDocFetchedDocument = InnerDocument;

pub trait AbsDocFilterKeyOp: Send + Sync {
    fn filter(&self, key: &String, doc: &Vec<String>) -> bool;
}

// the datastore instance is shared by all request handling tasks,
// `Send` and `Sync` are required as super-traits
#[async_trait]
pub trait AbstDocStore: Send + Sync {
    fn new(cfg: &AppInMemoryDbCfg) -> Self
    where
        Self: Sized;

    async fn create_collection(&self, label: &str) -> DefaultResult<(), AppError>;

    async fn save(&self, data: AppDocUpdateData) -> DefaultResult<usize, AppError>;

    async fn delete(&self, info: AppDocDeleteInfo) -> DefaultResult<usize, AppError>;

    async fn fetch(&self, keys: AppDocFetchKeys) -> DefaultResult<AppDocFetchedData, AppError>;

    async fn filter_keys(
        &self,
        label: String,
        op: &dyn AbsDocFilterKeyOp,
    ) -> DefaultResult<Vec<String>, AppError>;
}

pub struct AppInMemDocStore {
    max_items_per_collection: u32,
    collection_map: Mutex<RefCell<AllCollection>>,
}

impl AppInMemDocStore {
    fn try_get_collections(&self) -> DefaultResult<MutexGuard<RefCell<AllCollection>>, AppError> {
        match self.collection_map.lock() {
            Ok(guard) => Ok(guard),
            Err(e) => Err(AppError {
                detail: Some(e.to_string()),
                code: AppErrorCode::AcquireLockFailure,
            }),
        }
    }

    fn _check_capacity(&self, _map: &AllCollection) -> DefaultResult<(), AppError> {
        let mut invalid = _map
            .iter()
            .filter(|(_, collection)| self.max_items_per_collection as usize <= collection.len());
        if let Some((label, _)) = invalid.next() {
            let msg = format!("{}, {}, {}", module_path!(), line!(), label);
            Err(AppError {
                detail: Some(msg),
                code: AppErrorCode::ExceedingMaxLimit,
            })
        } else {
            Ok(())
        }
    }

    fn _check_collection_existence(
        _map: &AllCollection,
        labels: Vec<&String>,
    ) -> DefaultResult<(), AppError> {
        let mut invalid = labels
            .iter()
            .filter(|label| !_map.contains_key(label.as_str()));
        if let Some(d) = invalid.next() {
            Err(AppError {
                detail: Some(d.to_string()),
                code: AppErrorCode::DataTableNotExist,
            })
        } else {
            Ok(())
        }
    }
} // end of impl AppInMemDocStore

#[async_trait]
impl AbstDocStore for AppInMemDocStore {
    fn new(cfg: &AppInMemoryDbCfg) -> Self {
        let c_map = HashMap::new();
        let c_map = Mutex::new(RefCell::new(c_map));
        Self {
            collection_map: c_map,
            max_items_per_collection: cfg.max_items,
        }
    }

    async fn create_collection(&self, label: &str) -> DefaultResult<(), AppError> {
        let guard = self.try_get_collections()?;
        let mut _map = guard.borrow_mut();
        if !_map.contains_key(label) {
            let newcollection = HashMap::new();
            _map.insert(label.to_string(), newcollection);
        }
        Ok(())
    }

    async fn save(&self, data: AppDocUpdateData) -> DefaultResult<usize, AppError> {
        let guard = self.try_get_collections()?;
        let mut _map = guard.borrow_mut();
        let unchecked_labels = data.keys().collect::<Vec<&String>>();
        Self::_check_collection_existence(&_map, unchecked_labels)?;
        self._check_capacity(&_map)?;
        let tot_cnt = data
            .iter()
            .map(|(label, d_grp)| {
                let collection = _map.get_mut(label.as_str()).unwrap();
                d_grp
                    .iter()
                    .map(|(id, doc)| {
                        collection.insert(id.clone(), doc.clone());
                    })
                    .count()
            })
            .sum();
        self._check_capacity(&_map)?;
        Ok(tot_cnt)
    } // end of fn save

    async fn delete(&self, info: AppDocDeleteInfo) -> DefaultResult<usize, AppError> {
        let guard = self.try_get_collections()?;
        let mut _map = guard.borrow_mut();
        let unchecked_labels = info.keys().collect::<Vec<&String>>();
        Self::_check_collection_existence(&_map, unchecked_labels)?;
        let tot_cnt = info
            .iter()
            .map(|(label, ids)| {
                let collection = _map.get_mut(label.as_str()).unwrap();
                ids.iter()
                    .map(|id| {
                        collection.remove(id);
                    })
                    .count()
            })
            .sum();
        Ok(tot_cnt)
    }

    async fn fetch(&self, keys: AppDocFetchKeys) -> DefaultResult<AppDocFetchedData, AppError> {
        let guard = self.try_get_collections()?;
        let _map = guard.borrow();
        let unchecked_labels = keys.keys().collect::<Vec<&String>>();
        Self::_check_collection_existence(&_map, unchecked_labels)?;
        let rs_a = keys
            .iter()
            .map(|(label, ids)| {
                let collection = _map.get(label.as_str()).unwrap();
                let rs_c = ids
                    .iter()
                    .filter_map(|id| {
                        collection.get(id).map(|doc| (id.clone(), doc.clone()))
                    })
                    .collect::<Vec<(String, InnerDocument)>>();
                let rs_c = HashMap::from_iter(rs_c);
                (label.clone(), rs_c)
            })
            .collect::<Vec<(String, InnerCollection)>>();
        let rs_a = HashMap::from_iter(rs_a);
        Ok(rs_a)
    }

    async fn filter_keys(
        &self,
        label: String,
        op: &dyn AbsDocFilterKeyOp,
    ) -> DefaultResult<Vec<String>, AppError> {
        let guard = self.try_get_collections()?;
        let _map = guard.borrow();
        Self::_check_collection_existence(&_map, vec![&label])?;
        let collection = _map.get(label.as_str()).unwrap();
        let out = collection
            .iter()
            .filter(|(k, doc)| op.filter(k, doc))
            .map(|(k, _doc)| k.clone())
            .collect::<Vec<String>>();
        Ok(out)
    }
} // end of impl AppInMemDocStore
