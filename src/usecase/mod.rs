mod manage_order;
mod manage_product;

use regex::Regex;

use crate::constant::REGEX_DOC_ID_HEX;

pub use manage_order::{
    CreateOrderUseCase, EditOrderUseCase, OrderUcError, RemoveOrderUseCase, RetrieveOrderUseCase,
    RetrieveOrdersUseCase,
};
pub use manage_product::{
    CreateProductUseCase, EditProductUseCase, ProductUcError, RemoveProductUseCase,
    RetrieveProductUseCase, RetrieveProductsUseCase,
};

// three-state outcome of the reusable identifier check, structural format
// validity is examined first, existence lookup runs only on well-formed input
#[derive(Debug, PartialEq)]
pub enum DocIdValidity {
    Acceptable,
    Malformed,
    NotExist,
}

pub(crate) fn doc_id_wellformed(id: &str) -> bool {
    let re = Regex::new(REGEX_DOC_ID_HEX).unwrap();
    re.is_match(id)
}
