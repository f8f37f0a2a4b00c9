use std::sync::Arc;

use axum::debug_handler;
use axum::extract::{Json as ExtractJson, Path as ExtractPath, State as ExtractState};
use axum::http::{
    header as HttpHeader, HeaderMap as HttpHeaderMap, HeaderValue as HttpHeaderValue,
    StatusCode as HttpStatusCode,
};
use axum::response::IntoResponse;
use serde_json;

use crate::api::web::dto::{OrderCreateReqDto, OrderEditReqDto};
use crate::constant as AppConst;
use crate::error::{AppError, AppErrorCode};
use crate::logging::{app_log_event, AppLogContext, AppLogLevel};
use crate::repository::{app_repo_order, app_repo_product};
use crate::usecase::{
    CreateOrderUseCase, EditOrderUseCase, OrderUcError, RemoveOrderUseCase, RetrieveOrderUseCase,
    RetrieveOrdersUseCase,
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
        app_log_event!(log, AppLogLevel::ERROR, "{}", e);
        (status, INTERNAL_FAIL_BODY.to_string())
    } else {
        app_log_event!(log, AppLogLevel::WARNING, "{}", e);
        let reason = e.detail.unwrap_or("none".to_string());
        (status, serde_json::json!({ "reason": reason }).to_string())
    }
}

fn resp_header_map() -> HttpHeaderMap {
    let resp_ctype_val = HttpHeaderValue::from_str(AppConst::HTTP_CONTENT_TYPE_JSON).unwrap();
    let mut hdr_map = HttpHeaderMap::new();
    hdr_map.insert(HttpHeader::CONTENT_TYPE, resp_ctype_val);
    hdr_map
}

fn repos_init_failure(
    log: Arc<AppLogContext>,
    results: (
        Result<Box<dyn crate::repository::AbsOrderRepo>, AppError>,
        Result<Box<dyn crate::repository::AbstProductRepo>, AppError>,
    ),
) -> (HttpStatusCode, String) {
    let mut errmsgs = Vec::new();
    if let Err(e) = results.0 {
        errmsgs.push(e.to_string());
    }
    if let Err(e) = results.1 {
        errmsgs.push(e.to_string());
    }
    app_log_event!(
        log,
        AppLogLevel::ERROR,
        "repository init failure, reason: {:?}",
        errmsgs
    );
    (
        HttpStatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_FAIL_BODY.to_string(),
    )
}

#[debug_handler(state = AppSharedState)]
pub(super) async fn create_handler(
    ExtractState(appstate): ExtractState<AppSharedState>,
    ExtractJson(req_body): ExtractJson<OrderCreateReqDto>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let results = (
        app_repo_order(ds.clone()).await,
        app_repo_product(ds).await,
    );
    let (status, serial_resp_body) = if let (Ok(repo), Ok(product_repo)) = results {
        let uc = CreateOrderUseCase { repo, product_repo };
        match uc.execute(req_body).await {
            Ok(created) => match serde_json::to_string(&created) {
                Ok(s) => (HttpStatusCode::CREATED, s),
                Err(_) => (
                    HttpStatusCode::INTERNAL_SERVER_ERROR,
                    SERIAL_FAIL_BODY.to_string(),
                ),
            },
            Err(OrderUcError::ReqContent(ce)) => match serde_json::to_string(&ce) {
                Ok(s) => (HttpStatusCode::BAD_REQUEST, s),
                Err(_) => (
                    HttpStatusCode::INTERNAL_SERVER_ERROR,
                    SERIAL_FAIL_BODY.to_string(),
                ),
            },
            Err(OrderUcError::Server(e)) => error_presenter(log_ctx, e),
        }
    } else {
        repos_init_failure(log_ctx, results)
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn create_handler

#[debug_handler(state = AppSharedState)]
pub(super) async fn read_all_handler(
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let results = (
        app_repo_order(ds.clone()).await,
        app_repo_product(ds).await,
    );
    let (status, serial_resp_body) = if let (Ok(repo), Ok(product_repo)) = results {
        let uc = RetrieveOrdersUseCase {
            repo,
            product_repo,
            log: log_ctx.clone(),
        };
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
    } else {
        repos_init_failure(log_ctx, results)
    };
    (status, resp_header_map(), serial_resp_body)
}

#[debug_handler(state = AppSharedState)]
pub(super) async fn read_one_handler(
    ExtractPath(order_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let results = (
        app_repo_order(ds.clone()).await,
        app_repo_product(ds).await,
    );
    let (status, serial_resp_body) = if let (Ok(repo), Ok(product_repo)) = results {
        let uc = RetrieveOrderUseCase { repo, product_repo };
        match uc.execute(order_id).await {
            // an absent order is not an error at this layer, the reply body
            // is the JSON literal `null`
            Ok(found) => match serde_json::to_string(&found) {
                Ok(s) => (HttpStatusCode::OK, s),
                Err(_) => (
                    HttpStatusCode::INTERNAL_SERVER_ERROR,
                    SERIAL_FAIL_BODY.to_string(),
                ),
            },
            Err(e) => error_presenter(log_ctx, e),
        }
    } else {
        repos_init_failure(log_ctx, results)
    };
    (status, resp_header_map(), serial_resp_body)
}

#[debug_handler(state = AppSharedState)]
pub(super) async fn edit_handler(
    ExtractPath(order_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
    ExtractJson(req_body): ExtractJson<OrderEditReqDto>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_order(ds).await {
        Ok(repo) => {
            let uc = EditOrderUseCase { repo };
            match uc.execute(order_id, req_body).await {
                Ok(updated) => match serde_json::to_string(&updated) {
                    Ok(s) => (HttpStatusCode::OK, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(OrderUcError::ReqContent(ce)) => match serde_json::to_string(&ce) {
                    Ok(s) => (HttpStatusCode::BAD_REQUEST, s),
                    Err(_) => (
                        HttpStatusCode::INTERNAL_SERVER_ERROR,
                        SERIAL_FAIL_BODY.to_string(),
                    ),
                },
                Err(OrderUcError::Server(e)) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => {
            app_log_event!(
                log_ctx,
                AppLogLevel::ERROR,
                "repository init failure, reason: {}",
                e
            );
            (
                HttpStatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_FAIL_BODY.to_string(),
            )
        }
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn edit_handler

#[debug_handler(state = AppSharedState)]
pub(super) async fn remove_handler(
    ExtractPath(order_id): ExtractPath<String>,
    ExtractState(appstate): ExtractState<AppSharedState>,
) -> impl IntoResponse {
    let log_ctx = appstate.log_context().clone();
    let ds = appstate.datastore();
    let (status, serial_resp_body) = match app_repo_order(ds).await {
        Ok(repo) => {
            let uc = RemoveOrderUseCase { repo };
            match uc.execute(order_id).await {
                Ok(()) => (
                    HttpStatusCode::OK,
                    r#"{"message":"delete order successful"}"#.to_string(),
                ),
                Err(e) => error_presenter(log_ctx, e),
            }
        }
        Err(e) => {
            app_log_event!(
                log_ctx,
                AppLogLevel::ERROR,
                "repository init failure, reason: {}",
                e
            );
            (
                HttpStatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_FAIL_BODY.to_string(),
            )
        }
    };
    (status, resp_header_map(), serial_resp_body)
} // end of fn remove_handler
