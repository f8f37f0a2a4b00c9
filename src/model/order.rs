use std::cmp::PartialEq;
use std::result::Result as DefaultResult;

use chrono::{DateTime, FixedOffset, Local as LocalTime};

use crate::api::web::dto::{
    OrderClientErrorDto, OrderCreateReqDto, OrderDetailReplyDto, OrderEditReqDto,
    OrderFieldErrorReason, OrderReplyDto,
};
use crate::error::AppErrorCode;
use crate::model::ProductModel;

#[derive(Debug)]
pub struct OrderModel {
    pub id_: Option<String>,
    // non-owning reference to exactly one product
    pub product_id: String,
    pub quantity: u32,
    pub create_time: DateTime<FixedOffset>,
}

impl PartialEq for OrderModel {
    fn eq(&self, other: &Self) -> bool {
        (self.id_ == other.id_)
            && (self.product_id == other.product_id)
            && (self.quantity == other.quantity)
            && (self.create_time == other.create_time)
    }
}

impl TryFrom<OrderCreateReqDto> for OrderModel {
    type Error = OrderClientErrorDto;

    fn try_from(value: OrderCreateReqDto) -> DefaultResult<Self, Self::Error> {
        Self::validate_quantity(value.quantity)?;
        Ok(Self {
            id_: None,
            product_id: value.product_id,
            quantity: value.quantity,
            create_time: LocalTime::now().fixed_offset(),
        })
    }
}

impl OrderModel {
    fn validate_quantity(quantity: u32) -> DefaultResult<(), OrderClientErrorDto> {
        if quantity == 0 {
            Err(OrderClientErrorDto {
                quantity: Some(OrderFieldErrorReason::ZeroQuantity),
                err_type: format!("{:?}", AppErrorCode::InvalidInput),
            })
        } else {
            Ok(())
        }
    }

    pub fn apply_update(&mut self, data: OrderEditReqDto) -> DefaultResult<(), OrderClientErrorDto> {
        if let Some(q) = data.quantity {
            Self::validate_quantity(q)?;
            self.quantity = q;
        }
        Ok(())
    }

    pub fn to_detail_reply(&self, product: &ProductModel) -> OrderDetailReplyDto {
        OrderDetailReplyDto {
            id: self.id_.clone().unwrap_or_default(),
            product: product.into(),
            quantity: self.quantity,
            created_at: self.create_time.to_rfc3339(),
        }
    }
} // end of impl OrderModel

impl From<&OrderModel> for OrderReplyDto {
    fn from(value: &OrderModel) -> Self {
        Self {
            id: value.id_.clone().unwrap_or_default(),
            product_id: value.product_id.clone(),
            quantity: value.quantity,
            created_at: value.create_time.to_rfc3339(),
        }
    }
}
