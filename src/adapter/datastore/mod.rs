mod in_mem;

use std::boxed::Box;
use std::sync::Arc;

use crate::config::AppDataStoreCfg;
use crate::error::{AppError, AppErrorCode};
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};

pub use in_mem::{
    AbsDocFilterKeyOp, AbstDocStore, AppDocDeleteInfo, AppDocFetchKeys, AppDocFetchedCollection,
    AppDocFetchedData, AppDocFetchedDocument, AppDocUpdateData, AppInMemDocStore,
};

pub(crate) fn build_context(
    logctx: Arc<AppLogContext>,
    cfg: &Vec<AppDataStoreCfg>,
) -> Option<Box<dyn AbstDocStore>> {
    let mut inmem = None;
    for c in cfg {
        match c {
            AppDataStoreCfg::InMemory(d) => {
                let item: Box<dyn AbstDocStore> = Box::new(AppInMemDocStore::new(d));
                inmem = Some(item);
            }
            AppDataStoreCfg::DocDbServer(d) => {
                // TODO, connect the document database server through its URI,
                // currently only the in-memory backend is wired
                let e = AppError {
                    code: AppErrorCode::NotImplemented,
                    detail: Some(format!("doc-db-server, alias:{}", d.alias)),
                };
                app_log_event!(logctx, AppLogLevel::ERROR, "{:?}", e);
            }
        }
    }
    inmem
}
