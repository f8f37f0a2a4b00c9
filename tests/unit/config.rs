use storefront::error::AppErrorCode;
use storefront::{AppConfig, AppDataStoreCfg};

use crate::ut_example_fullpath;

#[test]
fn parse_ok_inmem() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_ok_inmem.json"));
    assert!(result.is_ok());
    let cfg = result.unwrap();
    assert_eq!(cfg.listen.api_version.as_str(), "0.0.1");
    assert_eq!(cfg.listen.port, 8012);
    assert_eq!(cfg.listen.routes.len(), 6);
    assert_eq!(cfg.num_workers, 2);
    assert_eq!(cfg.data_store.len(), 1);
    match &cfg.data_store[0] {
        AppDataStoreCfg::InMemory(c) => {
            assert_eq!(c.max_items, 56);
        }
        _other => assert!(false),
    }
}

#[test]
fn parse_ok_docdb() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_ok_docdb.json"));
    assert!(result.is_ok());
    let cfg = result.unwrap();
    match &cfg.data_store[0] {
        AppDataStoreCfg::DocDbServer(c) => {
            assert_eq!(c.db_name.as_str(), "storefront");
            assert_eq!(c.max_conns, 40);
        }
        _other => assert!(false),
    }
}

#[test]
fn parse_nonexistent_file() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_not_there.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    let cond = matches!(error.code, AppErrorCode::IOerror(std::io::ErrorKind::NotFound));
    assert!(cond);
}

#[test]
fn parse_no_route() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_no_route.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.code, AppErrorCode::NoRouteApiServerCfg);
}

#[test]
fn parse_invalid_version() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_bad_version.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.code, AppErrorCode::InvalidVersion);
}

#[test]
fn parse_logger_missing_handler() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_logger_no_handler.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.code, AppErrorCode::NoHandlerInLoggerCfg);
}

#[test]
fn parse_no_datastore() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_no_datastore.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.code, AppErrorCode::NoDatabaseCfg);
}

#[test]
fn parse_inmem_exceeding_limit() {
    let result = AppConfig::parse_from_file(ut_example_fullpath("config_inmem_toobig.json"));
    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.code, AppErrorCode::ExceedingMaxLimit);
}
