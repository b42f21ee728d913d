//! Integration test: fastest and cheapest routes through the store-backed
//! service, across bicpath-core, bicpath-store and bicpath-routing.

use std::sync::Arc;

use bicpath_integration_tests::{bank, bic, codes, link, memory_service, triangle_links};
use bicpath_routing::{PathFinder, RouteService, TimeWeighting};
use bicpath_store::{Dataset, GraphStore, MemoryStore};

// =========================================================================
// Reference scenarios
// =========================================================================

#[tokio::test]
async fn scenario_a_fastest_prefers_two_short_hops() {
    let service = memory_service(Vec::new(), triangle_links());

    let fastest = service.find_fastest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(codes(&fastest.path), vec!["A", "B", "C"]);
    assert_eq!(fastest.time, 8.0);
}

#[tokio::test]
async fn scenario_b_cheapest_counts_receiving_banks_only() {
    let service = memory_service(
        vec![bank("B", Some(2.0)), bank("C", Some(1.0))],
        triangle_links(),
    );

    let cheapest = service.find_cheapest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(codes(&cheapest.path), vec!["A", "C"]);
    assert_eq!(cheapest.cost, 1.0);
}

#[tokio::test]
async fn scenario_c_no_outgoing_links_is_unreachable() {
    let service = memory_service(Vec::new(), vec![link("B", "A", 1.0)]);

    let fastest = service.find_fastest_path(&bic("A"), &bic("Z")).await.unwrap();
    assert!(fastest.path.is_empty());
    assert_eq!(fastest.time, f64::INFINITY);

    let cheapest = service.find_cheapest_path(&bic("A"), &bic("Z")).await.unwrap();
    assert!(cheapest.path.is_empty());
    assert_eq!(cheapest.cost, f64::INFINITY);
}

#[tokio::test]
async fn scenario_d_uncharged_bank_is_avoided() {
    // A -> C -> D is fastest, but C has no charge on file.
    let service = memory_service(
        vec![bank("B", Some(2.0)), bank("C", None), bank("D", Some(3.0))],
        vec![
            link("A", "C", 1.0),
            link("C", "D", 1.0),
            link("A", "B", 5.0),
            link("B", "D", 5.0),
        ],
    );

    let fastest = service.find_fastest_path(&bic("A"), &bic("D")).await.unwrap();
    assert_eq!(codes(&fastest.path), vec!["A", "C", "D"]);
    assert_eq!(fastest.time, 2.0);

    let cheapest = service.find_cheapest_path(&bic("A"), &bic("D")).await.unwrap();
    assert_eq!(codes(&cheapest.path), vec!["A", "B", "D"]);
    assert_eq!(cheapest.cost, 5.0);

    let into_c = service.find_cheapest_path(&bic("A"), &bic("C")).await.unwrap();
    assert!(into_c.path.is_empty());
    assert_eq!(into_c.cost, f64::INFINITY);
}

// =========================================================================
// Larger network
// =========================================================================

fn corridor() -> (Vec<bicpath_core::Bank>, Vec<bicpath_core::Link>) {
    let banks = vec![
        bank("DEUTDEFF", Some(4.0)),
        bank("BNPAFRPP", Some(3.0)),
        bank("BARCGB22", Some(6.0)),
        bank("CHASUS33", Some(2.0)),
        bank("HSBCHKHH", Some(1.5)),
        bank("MHCBJPJT", Some(5.0)),
    ];
    let links = vec![
        link("DEUTDEFF", "BNPAFRPP", 20.0),
        link("DEUTDEFF", "BARCGB22", 15.0),
        link("BNPAFRPP", "CHASUS33", 40.0),
        link("BARCGB22", "CHASUS33", 30.0),
        link("BARCGB22", "HSBCHKHH", 90.0),
        link("CHASUS33", "HSBCHKHH", 45.0),
        link("HSBCHKHH", "MHCBJPJT", 25.0),
        link("CHASUS33", "MHCBJPJT", 120.0),
    ];
    (banks, links)
}

#[tokio::test]
async fn corridor_fastest_and_cheapest_differ() {
    let (banks, links) = corridor();
    let service = memory_service(banks, links);
    let (from, to) = (bic("DEUTDEFF"), bic("MHCBJPJT"));

    // 15 + 30 + 45 + 25 = 115 beats 15 + 90 + 25 = 130 and 15 + 30 + 120 = 165.
    let fastest = service.find_fastest_path(&from, &to).await.unwrap();
    assert_eq!(
        codes(&fastest.path),
        vec!["DEUTDEFF", "BARCGB22", "CHASUS33", "HSBCHKHH", "MHCBJPJT"]
    );
    assert_eq!(fastest.time, 115.0);

    // BNPAFRPP, CHASUS33, MHCBJPJT: 3 + 2 + 5 = 10; detouring via HSBCHKHH adds 1.5.
    let cheapest = service.find_cheapest_path(&from, &to).await.unwrap();
    assert_eq!(
        codes(&cheapest.path),
        vec!["DEUTDEFF", "BNPAFRPP", "CHASUS33", "MHCBJPJT"]
    );
    assert_eq!(cheapest.cost, 10.0);
}

#[tokio::test]
async fn corridor_is_directed() {
    let (banks, links) = corridor();
    let service = memory_service(banks, links);

    let back = service
        .find_fastest_path(&bic("MHCBJPJT"), &bic("DEUTDEFF"))
        .await
        .unwrap();
    assert!(back.path.is_empty());
}

#[tokio::test]
async fn service_agrees_with_direct_search() {
    let (banks, links) = corridor();
    let service = memory_service(banks, links.clone());

    let graph = bicpath_routing::Graph::from_links(&links);
    let direct = PathFinder::new()
        .search(&bic("DEUTDEFF"), &bic("HSBCHKHH"), &graph, &TimeWeighting)
        .unwrap();
    let via_service = service
        .find_fastest_path(&bic("DEUTDEFF"), &bic("HSBCHKHH"))
        .await
        .unwrap();

    assert_eq!(direct.path, via_service.path);
    assert_eq!(direct.cost, via_service.time);
}

// =========================================================================
// Reload
// =========================================================================

#[tokio::test]
async fn reload_is_visible_to_the_next_query() {
    let store = Arc::new(MemoryStore::with_dataset(Dataset::new(Vec::new(), triangle_links())));
    let service = RouteService::new(Arc::clone(&store));

    let before = service.find_fastest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(before.time, 8.0);

    let summary = store
        .replace_all(Dataset::new(vec![bank("C", Some(1.0))], vec![link("A", "C", 2.0)]))
        .await
        .unwrap();
    assert_eq!(summary.links, 1);

    let after = service.find_fastest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(codes(&after.path), vec!["A", "C"]);
    assert_eq!(after.time, 2.0);

    // B is gone with the old dataset.
    let gone = service.find_fastest_path(&bic("A"), &bic("B")).await.unwrap();
    assert!(gone.path.is_empty());
}

#[tokio::test]
async fn queries_during_reloads_see_whole_datasets() {
    // Every dataset generation has exactly one A->C route, so any answer
    // mixing generations would show up as an unexpected time.
    let store = Arc::new(MemoryStore::with_dataset(Dataset::new(
        Vec::new(),
        vec![link("A", "C", 1.0)],
    )));
    let service = RouteService::new(Arc::clone(&store));

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..50 {
                let time = if i % 2 == 0 { 2.0 } else { 1.0 };
                store
                    .replace_all(Dataset::new(Vec::new(), vec![link("A", "C", time)]))
                    .await
                    .unwrap();
            }
        })
    };

    let mut readers = Vec::new();
    for _ in 0..4 {
        let service = service.clone();
        readers.push(tokio::spawn(async move {
            for _ in 0..50 {
                let fastest = service.find_fastest_path(&bic("A"), &bic("C")).await.unwrap();
                assert!(fastest.time == 1.0 || fastest.time == 2.0);
                assert_eq!(fastest.path.len(), 2);
            }
        }));
    }

    writer.await.unwrap();
    for reader in readers {
        reader.await.unwrap();
    }
}

#[tokio::test]
async fn path_results_serialize_for_the_api() {
    let service = memory_service(vec![bank("B", Some(2.0))], triangle_links());

    let fastest = service.find_fastest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(
        serde_json::to_value(&fastest).unwrap(),
        serde_json::json!({ "path": ["A", "B", "C"], "time": 8.0 })
    );

    // C has no charge: unreachable by cost.
    let cheapest = service.find_cheapest_path(&bic("A"), &bic("C")).await.unwrap();
    assert_eq!(
        serde_json::to_value(&cheapest).unwrap(),
        serde_json::json!({ "path": [], "cost": null })
    );
}
