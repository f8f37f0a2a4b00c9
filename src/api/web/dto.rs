use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct ProductCreateReqDto {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
}

// absent fields keep the stored value untouched
#[derive(Deserialize, Serialize)]
pub struct ProductEditReqDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Serialize, Debug)]
pub struct ProductReplyDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub enum ProductFieldErrorReason {
    Empty,
    Negative,
}

#[derive(Serialize, Debug)]
pub struct ProductClientErrorDto {
    pub name: Option<ProductFieldErrorReason>,
    pub price: Option<ProductFieldErrorReason>,
    pub err_type: String,
}

#[derive(Deserialize, Serialize)]
pub struct OrderCreateReqDto {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Deserialize, Serialize)]
pub struct OrderEditReqDto {
    pub quantity: Option<u32>,
}

#[derive(Serialize, Debug)]
pub struct OrderReplyDto {
    pub id: String,
    pub product_id: String,
    pub quantity: u32,
    pub created_at: String,
}

// order retrieval expands the product reference to the full record
#[derive(Serialize, Debug)]
pub struct OrderDetailReplyDto {
    pub id: String,
    pub product: ProductReplyDto,
    pub quantity: u32,
    pub created_at: String,
}

#[derive(Deserialize, Serialize, Debug, PartialEq)]
pub enum OrderFieldErrorReason {
    ZeroQuantity,
}

#[derive(Serialize, Debug)]
pub struct OrderClientErrorDto {
    pub quantity: Option<OrderFieldErrorReason>,
    pub err_type: String,
}
