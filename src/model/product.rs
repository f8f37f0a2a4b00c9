use std::cmp::PartialEq;
use std::result::Result as DefaultResult;

use chrono::{DateTime, FixedOffset, Local as LocalTime};
use rust_decimal::Decimal;

use crate::api::web::dto::{
    ProductClientErrorDto, ProductCreateReqDto, ProductEditReqDto, ProductFieldErrorReason,
    ProductReplyDto,
};
use crate::error::AppErrorCode;

#[derive(Debug)]
pub struct ProductModel {
    // assigned by the data store on first save
    pub id_: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub create_time: DateTime<FixedOffset>,
}

impl PartialEq for ProductModel {
    fn eq(&self, other: &Self) -> bool {
        (self.id_ == other.id_)
            && (self.name == other.name)
            && (self.description == other.description)
            && (self.price == other.price)
            && (self.create_time == other.create_time)
    }
}

impl TryFrom<ProductCreateReqDto> for ProductModel {
    type Error = ProductClientErrorDto;

    fn try_from(value: ProductCreateReqDto) -> DefaultResult<Self, Self::Error> {
        Self::validate(value.name.as_str(), &value.price)?;
        Ok(Self {
            id_: None,
            name: value.name,
            description: value.description,
            price: value.price,
            create_time: LocalTime::now().fixed_offset(),
        })
    }
}

impl ProductModel {
    fn validate(name: &str, price: &Decimal) -> DefaultResult<(), ProductClientErrorDto> {
        let name_err = if name.trim().is_empty() {
            Some(ProductFieldErrorReason::Empty)
        } else {
            None
        };
        let price_err = if price.is_sign_negative() {
            Some(ProductFieldErrorReason::Negative)
        } else {
            None
        };
        if name_err.is_some() || price_err.is_some() {
            Err(ProductClientErrorDto {
                name: name_err,
                price: price_err,
                err_type: format!("{:?}", AppErrorCode::InvalidInput),
            })
        } else {
            Ok(())
        }
    }

    // partial update, absent fields in the request keep previous values
    pub fn apply_update(&mut self, data: ProductEditReqDto) -> DefaultResult<(), ProductClientErrorDto> {
        let name = data.name.as_deref().unwrap_or(self.name.as_str());
        let price = data.price.as_ref().unwrap_or(&self.price);
        Self::validate(name, price)?;
        if let Some(n) = data.name {
            self.name = n;
        }
        if let Some(d) = data.description {
            self.description = Some(d);
        }
        if let Some(p) = data.price {
            self.price = p;
        }
        Ok(())
    }
} // end of impl ProductModel

impl From<&ProductModel> for ProductReplyDto {
    fn from(value: &ProductModel) -> Self {
        Self {
            id: value.id_.clone().unwrap_or_default(),
            name: value.name.clone(),
            description: value.description.clone(),
            price: value.price,
            created_at: value.create_time.to_rfc3339(),
        }
    }
}
