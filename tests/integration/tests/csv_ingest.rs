//! Integration test: CSV files on disk through ingest, the in-memory store
//! and the route service.

use std::sync::Arc;

use bicpath_integration_tests::{bic, codes, CsvFixture};
use bicpath_routing::RouteService;
use bicpath_store::{load_dataset, GraphStore, IngestError, MemoryStore};

const BANKS: &str = "\
BIC,Charge
AAAABB11,5
BBBBCC22,2
CCCCDD33,1
DDDDEE44,
";

const LINKS: &str = "\
FromBIC,ToBIC,TimeTakenInMinutes
AAAABB11,BBBBCC22,5
BBBBCC22,CCCCDD33,3
AAAABB11,CCCCDD33,10
CCCCDD33,DDDDEE44,1
";

async fn loaded_service(fixture: &CsvFixture) -> RouteService<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let dataset = load_dataset(&fixture.banks(), &fixture.links()).unwrap();
    store.replace_all(dataset).await.unwrap();
    RouteService::new(store)
}

#[tokio::test]
async fn csv_to_fastest_and_cheapest() {
    let fixture = CsvFixture::new(BANKS, LINKS);
    let service = loaded_service(&fixture).await;
    let (from, to) = (bic("AAAABB11"), bic("CCCCDD33"));

    let fastest = service.find_fastest_path(&from, &to).await.unwrap();
    assert_eq!(codes(&fastest.path), vec!["AAAABB11", "BBBBCC22", "CCCCDD33"]);
    assert_eq!(fastest.time, 8.0);

    let cheapest = service.find_cheapest_path(&from, &to).await.unwrap();
    assert_eq!(codes(&cheapest.path), vec!["AAAABB11", "CCCCDD33"]);
    assert_eq!(cheapest.cost, 1.0);
}

#[tokio::test]
async fn empty_charge_cell_is_free_to_enter() {
    let fixture = CsvFixture::new(BANKS, LINKS);
    let service = loaded_service(&fixture).await;

    let fastest = service
        .find_fastest_path(&bic("AAAABB11"), &bic("DDDDEE44"))
        .await
        .unwrap();
    assert_eq!(fastest.time, 9.0);

    // CCCCDD33 costs 1, DDDDEE44 has a blank charge.
    let cheapest = service
        .find_cheapest_path(&bic("AAAABB11"), &bic("DDDDEE44"))
        .await
        .unwrap();
    assert_eq!(codes(&cheapest.path), vec!["AAAABB11", "CCCCDD33", "DDDDEE44"]);
    assert_eq!(cheapest.cost, 1.0);
}

#[tokio::test]
async fn bank_missing_from_table_is_unreachable_by_cost() {
    let fixture = CsvFixture::new(
        "BIC,Charge\nAAAABB11,5\nBBBBCC22,2\n",
        "FromBIC,ToBIC,TimeTakenInMinutes\nAAAABB11,BBBBCC22,1\nBBBBCC22,CCCCDD33,1\n",
    );
    let service = loaded_service(&fixture).await;

    let cheapest = service
        .find_cheapest_path(&bic("AAAABB11"), &bic("CCCCDD33"))
        .await
        .unwrap();
    assert!(cheapest.path.is_empty());
    assert_eq!(cheapest.cost, f64::INFINITY);
}

#[tokio::test]
async fn summary_counts_rows() {
    let fixture = CsvFixture::new(BANKS, LINKS);
    let store = MemoryStore::new();
    assert!(store.summary().await.unwrap().is_none());

    let summary = store
        .replace_all(load_dataset(&fixture.banks(), &fixture.links()).unwrap())
        .await
        .unwrap();
    assert_eq!(summary.banks, 4);
    assert_eq!(summary.links, 4);
    assert_eq!(store.summary().await.unwrap(), Some(summary));
}

#[test]
fn negative_time_names_file_and_line() {
    let fixture = CsvFixture::new(
        BANKS,
        "FromBIC,ToBIC,TimeTakenInMinutes\nAAAABB11,BBBBCC22,5\nBBBBCC22,CCCCDD33,-3\n",
    );

    let err = load_dataset(&fixture.banks(), &fixture.links()).unwrap_err();
    match &err {
        IngestError::InvalidRecord { source_name, line, .. } => {
            assert!(source_name.ends_with("links.csv"));
            assert_eq!(*line, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn empty_bic_is_rejected() {
    let fixture = CsvFixture::new("BIC,Charge\n ,4\n", LINKS);
    let err = load_dataset(&fixture.banks(), &fixture.links()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidRecord { line: 2, .. }));
}

#[test]
fn non_numeric_time_is_rejected() {
    let fixture = CsvFixture::new(
        BANKS,
        "FromBIC,ToBIC,TimeTakenInMinutes\nAAAABB11,BBBBCC22,soon\n",
    );
    let err = load_dataset(&fixture.banks(), &fixture.links()).unwrap_err();
    assert!(matches!(err, IngestError::Csv { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let fixture = CsvFixture::new(BANKS, LINKS);
    let missing = fixture.dir().join("nope.csv");

    let err = load_dataset(&fixture.banks(), &missing).unwrap_err();
    match err {
        IngestError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn failed_ingest_leaves_store_untouched() {
    let good = CsvFixture::new(BANKS, LINKS);
    let service = loaded_service(&good).await;

    let bad = CsvFixture::new(BANKS, "FromBIC,ToBIC,TimeTakenInMinutes\nAAAABB11,,4\n");
    // The dataset never reaches the store.
    assert!(load_dataset(&bad.banks(), &bad.links()).is_err());

    let fastest = service
        .find_fastest_path(&bic("AAAABB11"), &bic("CCCCDD33"))
        .await
        .unwrap();
    assert_eq!(fastest.time, 8.0);
}

#[tokio::test]
async fn duplicate_bank_rows_fail_the_load() {
    let good = CsvFixture::new(BANKS, LINKS);
    let service = loaded_service(&good).await;

    let bad = CsvFixture::new("BIC,Charge\nBBBBCC22,9\nCCCCDD33,1\nBBBBCC22,2\n", LINKS);
    let err = load_dataset(&bad.banks(), &bad.links()).unwrap_err();
    match &err {
        IngestError::DuplicateBic {
            source_name,
            bic,
            line,
            first_line,
        } => {
            assert!(source_name.ends_with("banks.csv"));
            assert_eq!(bic, "BBBBCC22");
            assert_eq!(*first_line, 2);
            assert_eq!(*line, 4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("line 4"));

    // The previous dataset still answers.
    let cheapest = service
        .find_cheapest_path(&bic("AAAABB11"), &bic("CCCCDD33"))
        .await
        .unwrap();
    assert_eq!(cheapest.cost, 1.0);
}
