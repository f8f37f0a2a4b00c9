use std::sync::Arc;

use axum::debug_handler;
use axum::extract::{Json as ExtractJson, Path as ExtractPath, State as ExtractState};
use axum::http::{
    header as HttpHeader, HeaderMap as HttpHeaderMap, HeaderValue as HttpHeaderValue,
    StatusCode as HttpStatusCode,
};
use axum::response::IntoResponse;
use serde_json;

use crate::api::web::dto::{ProductCreateReqDto, ProductEditReqDto};
use crate::constant as AppConst;
use crate::error::{AppError, AppErrorCode};
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::repository::{app_repo_order, app_repo_product};
use crate::usecase::{
    CreateProductUseCase, EditProductUseCase, ProductUcError, RemoveProductUseCase,
    RetrieveProductUseCase, RetrieveProductsUseCase,
};
use crate::AppSharedState;

const SERIAL_FAIL_BODY: &str = r#"{"reason":"serialization-failure"}"#;
const INTERNAL_FAIL_BODY: &str = r#"{"reason":"internal-error"}"#;

fn error_presenter(log: Arc<AppLogContext>, e: AppError) -> (HttpStatusCode, String) {
    let status = match &e.code {
        AppErrorCode::InvalidIdFormat | AppErrorCode::InvalidInput => HttpStatusCode::BAD_REQUEST,
        AppErrorCode::ProductNotExist | AppErrorCode::OrderNotExist => HttpStatusCode::NOT_FOUND,
        AppErrorCode::ProductReferencedByOrder => HttpStatusCode::CONFLICT,
        _others => HttpStatusCode::INTERNAL_SERVER_ERROR,
    };
    if status == HttpStatusCode::INTERNAL_SERVER_ERROR {
        // do NOT dump store-level detail to the http response
        app_log_event!(log, AppLogLevel::ERROR, "{}", e);
        (status, INTERNAL_FAIL_BODY.to_string())
    } else {
        app_log_event!(log, AppLogLevel::WARNING, "{}", e);
        let reason = e.detail.unwrap_or("none".to_string());
        (status, serde_json::json!({ "reason": reason }).to_string())
    }
}

fn repo_init_failure(log: Arc<AppLogContext>, e: AppError) -> (HttpStatusCode, String) {
    app_log_event!(
        log,
        AppLogLevel::ERROR,
        "repository init failure, reason: {}",
        e
    );
    (
        HttpStatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_FAIL_BODY.to_string(),
    )
}

fn resp_header_map() -> HttpHeaderMap {
    let resp_ctype_val = HttpHeaderValue::from_str(AppConst::HTTP_CONTENT_TYPE_JSON).unwrap();
    let mut hdr_map = HttpHeaderMap::new();
    hdr_map.insert(HttpHeader::CONTENT_TYPE, resp_ctype_val);
    hdr_map
}

// always to specify state type explicitly to the debug macro
#[debug_handler(state = AppSharedState)]
pub(super) async fn create_handler(
    ExtractState(appstate): ExtractState<AppSharedState>,
    ExtractJson(req_body): ExtractJson<ProductCreateReqDto>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_product(ds).await {
        Ok(repo) => {
            let uc = CreateProductUseCase { repo };
            match uc.execute(req_body).await {
                Ok(created) => match serde_json::to_string(&created) {
                    Ok(s) => (HttpStatusCode::CREATED, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(ProductUcError::ReqContent(ce)) => match serde_json::to_string(&ce) {
                    Ok(s) => (HttpStatusCode::BAD_REQUEST, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(ProductUcError::Server(e)) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => repo_init_failure(log_ctx, e),
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn create_handler

#[debug_handler(state = AppSharedState)]
pub(super) async fn read_all_handler(
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_product(ds).await {
        Ok(repo) => {
            let uc = RetrieveProductsUseCase { repo };
            match uc.execute().await {
                Ok(items) => match serde_json::to_string(&items) {
                    Ok(s) => (HttpStatusCode::OK, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(e) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => repo_init_failure(log_ctx, e),
    };
    (status, resp_header_map(), serial_resp_body)
}

#[debug_handler(state = AppSharedState)]
pub(super) async fn read_one_handler(
    ExtractPath(prod_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_product(ds).await {
        Ok(repo) => {
            let uc = RetrieveProductUseCase { repo };
            match uc.execute(prod_id).await {
                Ok(item) => match serde_json::to_string(&item) {
                    Ok(s) => (HttpStatusCode::OK, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(e) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => repo_init_failure(log_ctx, e),
    };
    (status, resp_header_map(), serial_resp_body)
}

#[debug_handler(state = AppSharedState)]
pub(super) async fn edit_handler(
    ExtractPath(prod_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
    ExtractJson(req_body): ExtractJson<ProductEditReqDto>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_product(ds).await {
        Ok(repo) => {
            let uc = EditProductUseCase { repo };
            match uc.execute(prod_id, req_body).await {
                Ok(updated) => match serde_json::to_string(&updated) {
                    Ok(s) => (HttpStatusCode::OK, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(ProductUcError::ReqContent(ce)) => match serde_json::to_string(&ce) {
                    Ok(s) => (HttpStatusCode::BAD_REQUEST, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(ProductUcError::Server(e)) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => repo_init_failure(log_ctx, e),
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn edit_handler

#[debug_handler(state = AppSharedState)]
pub(super) async fn remove_handler(
    ExtractPath(prod_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let results = (
        app_repo_product(ds.clone()).await,
        app_repo_order(ds).await,
    );
    let (status, serial_resp_body) = if let (Ok(repo), Ok(o_repo)) = results {
        let uc = RemoveProductUseCase {
            repo,
            o_repo,
            log: log_ctx.clone(),
        };
        match uc.execute(prod_id).await {
            Ok(()) => (
                HttpStatusCode::OK,
                r#"{"message":"delete product successful"}"#.to_string(),
            ),
            Err(e) => error_presenter(log_ctx, e),
        }
    } else {
        let mut errmsgs = Vec::new();
        if let Err(e) = results.0 {
            errmsgs.push(e.to_string());
        }
        if let Err(e) = results.1 {
            errmsgs.push(e.to_string());
        }
        app_log_event!(
            log_ctx,
            AppLogLevel::ERROR,
            "repository init failure, reason: {:?}",
            errmsgs
        );
        (
            HttpStatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_FAIL_BODY.to_string(),
        )
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn remove_handler
