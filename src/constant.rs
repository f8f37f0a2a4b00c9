use crate::WebApiHdlrLabel;

pub mod app_meta {
    pub const LABAL: &'static str = "storefront";
    pub const MACHINE_CODE: u8 = 1;
    // TODO, machine code to document-id generator should be configurable
}

pub const ENV_VAR_SYS_BASE_PATH: &'static str = "SYS_BASE_PATH";
pub const ENV_VAR_SERVICE_BASE_PATH: &'static str = "SERVICE_BASE_PATH";
pub const ENV_VAR_CONFIG_FILE_PATH: &'static str = "CONFIG_FILE_PATH";

pub const EXPECTED_ENV_VAR_LABELS: [&'static str; 3] = [
    ENV_VAR_SYS_BASE_PATH,
    ENV_VAR_SERVICE_BASE_PATH,
    ENV_VAR_CONFIG_FILE_PATH,
];

pub mod limit {
    pub const MAX_ITEMS_STORED_PER_MODEL: u32 = 2200u32;
    pub const MAX_DB_CONNECTIONS: u32 = 10000u32;
    pub const MAX_SECONDS_DB_IDLE: u16 = 600u16;
}

pub(crate) mod api {
    use super::WebApiHdlrLabel;

    #[allow(non_camel_case_types)]
    pub(crate) struct web {}

    impl web {
        pub(crate) const CREATE_PRODUCT: WebApiHdlrLabel = "create_product";
        pub(crate) const LIST_PRODUCTS: WebApiHdlrLabel = "list_products";
        pub(crate) const ACCESS_PRODUCT: WebApiHdlrLabel = "access_product";
        pub(crate) const CREATE_NEW_ORDER: WebApiHdlrLabel = "create_new_order";
        pub(crate) const LIST_ORDERS: WebApiHdlrLabel = "list_orders";
        pub(crate) const ACCESS_ORDER: WebApiHdlrLabel = "access_order";
    }
} // end of inner-mod api

pub(crate) const HTTP_CONTENT_TYPE_JSON: &str = "application/json";

// document identifiers assigned by the data store, fixed-length
// lowercase hex, structural validity is independent of existence
pub(crate) const REGEX_DOC_ID_HEX: &'static str = r"^[0-9a-f]{32}$";

pub mod logging {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub enum Level {
        TRACE,
        DEBUG,
        INFO,
        WARNING,
        ERROR,
        FATAL,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Destination {
        CONSOLE,
        LOCALFS,
    }
}
