use storefront::api::web::dto::{OrderCreateReqDto, OrderEditReqDto, OrderFieldErrorReason};
use storefront::model::OrderModel;

const UT_PRODUCT_ID: &'static str = "0189fa7b3ce8a9f1b02c44d1e05f7a92";

#[test]
fn convert_from_dto_ok() {
    let data = OrderCreateReqDto {
        product_id: UT_PRODUCT_ID.to_string(),
        quantity: 4,
    };
    let result = OrderModel::try_from(data);
    assert!(result.is_ok());
    let m = result.unwrap();
    assert!(m.id_.is_none());
    assert_eq!(m.product_id.as_str(), UT_PRODUCT_ID);
    assert_eq!(m.quantity, 4);
}

#[test]
fn convert_from_dto_zero_quantity() {
    let data = OrderCreateReqDto {
        product_id: UT_PRODUCT_ID.to_string(),
        quantity: 0,
    };
    let result = OrderModel::try_from(data);
    assert!(result.is_err());
    let ce = result.err().unwrap();
    assert_eq!(ce.quantity, Some(OrderFieldErrorReason::ZeroQuantity));
}

#[test]
fn partial_update_ok() {
    let mut m = super::ut_default_order(UT_PRODUCT_ID, 4);
    let result = m.apply_update(OrderEditReqDto { quantity: Some(9) });
    assert!(result.is_ok());
    assert_eq!(m.quantity, 9);
    // absent quantity keeps the stored value
    let result = m.apply_update(OrderEditReqDto { quantity: None });
    assert!(result.is_ok());
    assert_eq!(m.quantity, 9);
}

#[test]
fn partial_update_rejected() {
    let mut m = super::ut_default_order(UT_PRODUCT_ID, 4);
    let result = m.apply_update(OrderEditReqDto { quantity: Some(0) });
    assert!(result.is_err());
    let ce = result.err().unwrap();
    assert_eq!(ce.quantity, Some(OrderFieldErrorReason::ZeroQuantity));
    assert_eq!(m.quantity, 4);
}

#[test]
fn reference_expansion_ok() {
    let product = {
        let mut p = super::ut_default_product("washi tape", "1.95");
        p.id_ = Some(UT_PRODUCT_ID.to_string());
        p
    };
    let order = {
        let mut o = super::ut_default_order(UT_PRODUCT_ID, 2);
        o.id_ = Some("0189fa7b3ce8a9f1b02c44d1e05f7b15".to_string());
        o
    };
    let detail = order.to_detail_reply(&product);
    assert_eq!(detail.id.as_str(), "0189fa7b3ce8a9f1b02c44d1e05f7b15");
    assert_eq!(detail.quantity, 2);
    assert_eq!(detail.product.id.as_str(), UT_PRODUCT_ID);
    assert_eq!(detail.product.name.as_str(), "washi tape");
}
