use std::collections::HashMap;

use axum::routing::{get, post, MethodRouter};
use http_body::Body as HttpBody;

use crate::constant::api::web as WebConst;
use crate::{AppSharedState, WebApiHdlrLabel};

pub mod dto;
mod order;
mod product;

// type parameter `B` for http body of the method router has to match the same
// type parameter in `axum::Router`
pub type ApiRouteType<HB> = MethodRouter<AppSharedState, HB>;
pub type ApiRouteTableType<HB> = HashMap<WebApiHdlrLabel, ApiRouteType<HB>>;

pub fn route_table<HB>() -> ApiRouteTableType<HB>
where
    HB: HttpBody + Send + 'static,
    <HB as HttpBody>::Data: Send,
    <HB as HttpBody>::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let mut out: ApiRouteTableType<HB> = HashMap::new();
    out.insert(WebConst::CREATE_PRODUCT, post(product::create_handler));
    out.insert(WebConst::LIST_PRODUCTS, get(product::read_all_handler));
    out.insert(
        WebConst::ACCESS_PRODUCT,
        get(product::read_one_handler)
            .patch(product::edit_handler)
            .delete(product::remove_handler),
    );
    out.insert(WebConst::CREATE_NEW_ORDER, post(order::create_handler));
    out.insert(WebConst::LIST_ORDERS, get(order::read_all_handler));
    out.insert(
        WebConst::ACCESS_ORDER,
        get(order::read_one_handler)
            .patch(order::edit_handler)
            .delete(order::remove_handler),
    );
    out
}
