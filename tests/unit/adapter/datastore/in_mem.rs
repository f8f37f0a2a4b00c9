use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};

use storefront::datastore::{
    AbsDocFilterKeyOp, AbstDocStore, AppDocDeleteInfo, AppDocFetchKeys, AppDocUpdateData,
    AppInMemDocStore,
};
use storefront::error::AppErrorCode;
use storefront::AppInMemoryDbCfg;

const UT_NUM_COLLECTIONS: usize = 3;
const UT_COLLECTION_LABEL_A: &'static str = "ut-products";
const UT_COLLECTION_LABEL_B: &'static str = "ut-orders";
const UT_COLLECTION_LABEL_C: &'static str = "ut-receipts";
const UT_COLLECTION_LABELS: [&'static str; UT_NUM_COLLECTIONS] = [
    UT_COLLECTION_LABEL_A,
    UT_COLLECTION_LABEL_B,
    UT_COLLECTION_LABEL_C,
];

fn ut_setup_dstore(max_items: u32) -> AppInMemDocStore {
    let cfg = AppInMemoryDbCfg {
        alias: "Rohini".to_string(),
        max_items,
    };
    AppInMemDocStore::new(&cfg)
}

#[tokio::test]
async fn save_fetch_ok_1() {
    let dstore = ut_setup_dstore(10);
    for label in UT_COLLECTION_LABELS.clone().into_iter() {
        let result = dstore.create_collection(label).await;
        assert!(result.is_ok());
    }
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            let doc = ["ballpoint pen", "", "10", "2023-10-06T09:14:30+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("d500".to_string(), doc);
            let doc = ["sketchbook", "a5 dotted", "5.5", "2023-10-07T17:02:51+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("d9oi1".to_string(), doc);
            c
        };
        let c2 = {
            let mut c = HashMap::new();
            let doc = ["d500", "3", "llama"].into_iter().map(String::from).collect();
            c.insert("1800".to_string(), doc);
            let doc = ["d9oi1", "1", "alpaca"].into_iter().map(String::from).collect();
            c.insert("1680".to_string(), doc);
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out.insert(UT_COLLECTION_LABEL_C.to_string(), c2);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 4);

    let fetching_keys: AppDocFetchKeys = {
        let mut out = HashMap::new();
        let k1 = ["d81three", "d9oi1", "d500x"]
            .into_iter()
            .map(String::from)
            .collect();
        let k2 = ["93orwjtr", "9eujr"].into_iter().map(String::from).collect();
        let k3 = ["18o0", "1680", "1800"].into_iter().map(String::from).collect();
        out.insert(UT_COLLECTION_LABEL_A.to_string(), k1);
        out.insert(UT_COLLECTION_LABEL_B.to_string(), k2);
        out.insert(UT_COLLECTION_LABEL_C.to_string(), k3);
        out
    };
    let result = dstore.fetch(fetching_keys).await;
    assert_eq!(result.is_ok(), true);
    let actual_fetched = result.unwrap();
    {
        let a_collection = actual_fetched.get(UT_COLLECTION_LABEL_A).unwrap();
        let actual_item = a_collection
            .get("d9oi1")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(
            actual_item,
            ["sketchbook", "a5 dotted", "5.5", "2023-10-07T17:02:51+02:00"]
        );
        assert_eq!(a_collection.get("d500x").is_none(), true);
        assert_eq!(a_collection.get("d81three").is_none(), true);
    }
    {
        let a_collection = actual_fetched.get(UT_COLLECTION_LABEL_B).unwrap();
        assert_eq!(a_collection.get("9eujr").is_none(), true);
        assert_eq!(a_collection.get("93orwjtr").is_none(), true);
    }
    {
        let a_collection = actual_fetched.get(UT_COLLECTION_LABEL_C).unwrap();
        let actual_item = a_collection
            .get("1680")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(actual_item, ["d9oi1", "1", "alpaca"]);
        let actual_item = a_collection
            .get("1800")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(actual_item, ["d500", "3", "llama"]);
        assert_eq!(a_collection.get("18o0").is_none(), true);
    }
} // end of fn save_fetch_ok_1

#[tokio::test]
async fn save_overwrite_ok() {
    let dstore = ut_setup_dstore(10);
    assert_eq!(
        dstore.create_collection(UT_COLLECTION_LABEL_A).await.is_ok(),
        true
    );
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            let doc = ["fountain pen", "", "18", "2023-10-06T09:14:30+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("d500".to_string(), doc);
            let doc = ["ink bottle", "blue-black", "7.4", "2023-10-09T11:57:02+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("dTr3".to_string(), doc);
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 2);
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            // modify existing document
            let doc = ["fountain pen", "fine nib", "16.5", "2023-10-06T09:14:30+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("d500".to_string(), doc);
            let doc = ["paper clip", "", "0.35", "2023-10-10T08:21:44+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("dWp8".to_string(), doc);
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 2);

    let fetching_keys: AppDocFetchKeys = {
        let mut out = HashMap::new();
        let k1 = ["dTr3", "dWp8", "d500"].into_iter().map(String::from).collect();
        out.insert(UT_COLLECTION_LABEL_A.to_string(), k1);
        out
    };
    let result = dstore.fetch(fetching_keys).await;
    assert_eq!(result.is_ok(), true);
    let actual_fetched = result.unwrap();
    if let Some(a_collection) = actual_fetched.get(UT_COLLECTION_LABEL_A) {
        let actual_item = a_collection
            .get("d500")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(
            actual_item,
            ["fountain pen", "fine nib", "16.5", "2023-10-06T09:14:30+02:00"]
        );
        let actual_item = a_collection
            .get("dWp8")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(actual_item, ["paper clip", "", "0.35", "2023-10-10T08:21:44+02:00"]);
        let actual_item = a_collection
            .get("dTr3")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>();
        assert_eq!(
            actual_item,
            ["ink bottle", "blue-black", "7.4", "2023-10-09T11:57:02+02:00"]
        );
    }
} // end of fn save_overwrite_ok

#[tokio::test]
async fn delete_ok() {
    let chosen_key = "dK41";
    let dstore = ut_setup_dstore(10);
    assert_eq!(
        dstore.create_collection(UT_COLLECTION_LABEL_A).await.is_ok(),
        true
    );
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            let doc = ["highlighter", "", "2.2", "2023-10-06T09:14:30+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("dF09".to_string(), doc);
            let doc = ["eraser", "", "0.9", "2023-10-06T10:05:11+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("dQz5".to_string(), doc);
            let doc = ["ruler", "30 cm", "1.8", "2023-10-06T12:40:09+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert(chosen_key.to_string(), doc);
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 3);
    let fetching_keys: AppDocFetchKeys = {
        let mut out = HashMap::new();
        let k1 = [chosen_key].into_iter().map(String::from).collect();
        out.insert(UT_COLLECTION_LABEL_A.to_string(), k1);
        out
    };
    {
        let result = dstore.fetch(fetching_keys.clone()).await;
        assert_eq!(result.is_ok(), true);
        let actual_fetched = result.unwrap();
        if let Some(a_collection) = actual_fetched.get(UT_COLLECTION_LABEL_A) {
            let actual_item = a_collection
                .get(chosen_key)
                .unwrap()
                .iter()
                .map(String::as_str)
                .collect::<Vec<&str>>();
            assert_eq!(actual_item, ["ruler", "30 cm", "1.8", "2023-10-06T12:40:09+02:00"]);
        }
    }
    let deleting_keys: AppDocDeleteInfo = fetching_keys.clone();
    let result = dstore.delete(deleting_keys).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 1usize);
    {
        let result = dstore.fetch(fetching_keys).await;
        assert_eq!(result.is_ok(), true);
        let actual_fetched = result.unwrap();
        if let Some(a_collection) = actual_fetched.get(UT_COLLECTION_LABEL_A) {
            assert_eq!(a_collection.get(chosen_key).is_none(), true);
        }
    }
} // end of fn delete_ok

#[tokio::test]
async fn access_nonexist_collection() {
    let dstore = ut_setup_dstore(10);
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            let doc = ["notebook", "", "4", "2023-10-06T09:14:30+02:00"]
                .into_iter()
                .map(String::from)
                .collect();
            c.insert("d500".to_string(), doc);
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_err(), true);
    let actual = result.err().unwrap();
    assert_eq!(actual.code, AppErrorCode::DataTableNotExist);
}

#[tokio::test]
async fn exceed_limit_error() {
    let dstore = ut_setup_dstore(5);
    assert_eq!(
        dstore.create_collection(UT_COLLECTION_LABEL_A).await.is_ok(),
        true
    );
    let gen_doc = || {
        ["postcard", "", "1.1", "2023-10-06T09:14:30+02:00"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<String>>()
    };
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            c.insert("dTp1".to_string(), gen_doc());
            c.insert("dTp2".to_string(), gen_doc());
            c.insert("dTp3".to_string(), gen_doc());
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 3);
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let mut c = HashMap::new();
            c.insert("dTp4".to_string(), gen_doc());
            c.insert("dTp5".to_string(), gen_doc());
            c.insert("dTp6".to_string(), gen_doc());
            c
        };
        out.insert(UT_COLLECTION_LABEL_A.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_err(), true);
    let actual = result.err().unwrap();
    assert_eq!(actual.code, AppErrorCode::ExceedingMaxLimit);
    assert_eq!(actual.detail.is_some(), true);
} // end of fn exceed_limit_error

struct UtestKeyPatternFiltOp {
    patt: String,
}

impl AbsDocFilterKeyOp for UtestKeyPatternFiltOp {
    fn filter(&self, k: &String, _v: &Vec<String>) -> bool {
        k.contains(self.patt.as_str())
    }
}

struct UtestColumnValueFiltOp {
    column: usize,
    expect: String,
}

impl AbsDocFilterKeyOp for UtestColumnValueFiltOp {
    fn filter(&self, _k: &String, v: &Vec<String>) -> bool {
        v.get(self.column)
            .map(|c| c.as_str() == self.expect.as_str())
            .unwrap_or(false)
    }
}

#[tokio::test]
async fn filter_keys_ok() {
    let dstore = ut_setup_dstore(8);
    assert_eq!(
        dstore.create_collection(UT_COLLECTION_LABEL_B).await.is_ok(),
        true
    );
    let search_id = "d4u7";
    let init_data: [Vec<String>; 4] = [
        [search_id, "2", "2023-10-06T09:14:30+02:00"]
            .into_iter()
            .map(String::from)
            .collect(),
        ["dm3w", "1", "2023-10-06T10:05:11+02:00"]
            .into_iter()
            .map(String::from)
            .collect(),
        [search_id, "9", "2023-10-06T12:40:09+02:00"]
            .into_iter()
            .map(String::from)
            .collect(),
        ["dcc8", "4", "2023-10-07T07:55:52+02:00"]
            .into_iter()
            .map(String::from)
            .collect(),
    ];
    let new_data: AppDocUpdateData = {
        let mut out = HashMap::new();
        let c1 = {
            let data = [
                (format!("{search_id}-one"), init_data[0].clone()),
                (format!("elf-schden"), init_data[1].clone()),
                (format!("gopher-neihts"), init_data[2].clone()),
                (format!("ferris-{search_id}"), init_data[3].clone()),
            ];
            HashMap::from_iter(data.into_iter())
        };
        out.insert(UT_COLLECTION_LABEL_B.to_string(), c1);
        out
    };
    let result = dstore.save(new_data).await;
    assert_eq!(result.is_ok(), true);
    assert_eq!(result.unwrap(), 4);
    {
        // filter on key substring
        let op = UtestKeyPatternFiltOp {
            patt: search_id.to_string(),
        };
        let result = dstore
            .filter_keys(UT_COLLECTION_LABEL_B.to_string(), &op)
            .await;
        assert_eq!(result.is_ok(), true);
        let actual_keys = result.unwrap();
        let expect_keys = vec![format!("{search_id}-one"), format!("ferris-{search_id}")];
        let actual_keys: HashSet<String, RandomState> = HashSet::from_iter(actual_keys.into_iter());
        let expect_keys: HashSet<String, RandomState> = HashSet::from_iter(expect_keys.into_iter());
        assert_eq!(actual_keys, expect_keys);
        assert_eq!(actual_keys.contains("gopher-neihts"), false);
    }
    {
        // filter on a document column value
        let op = UtestColumnValueFiltOp {
            column: 0,
            expect: search_id.to_string(),
        };
        let result = dstore
            .filter_keys(UT_COLLECTION_LABEL_B.to_string(), &op)
            .await;
        assert_eq!(result.is_ok(), true);
        let actual_keys = result.unwrap();
        let expect_keys = vec![format!("{search_id}-one"), format!("gopher-neihts")];
        let actual_keys: HashSet<String, RandomState> = HashSet::from_iter(actual_keys.into_iter());
        let expect_keys: HashSet<String, RandomState> = HashSet::from_iter(expect_keys.into_iter());
        assert_eq!(actual_keys, expect_keys);
    }
} // end of fn filter_keys_ok
