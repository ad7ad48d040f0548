//! Tests for the shared statistics registry

use minnow::stats::{StatsRegistry, StatsSnapshot};

#[tokio::test]
async fn test_registry_starts_at_zero() {
    let stats = StatsRegistry::new();
    assert_eq!(stats.snapshot().await, StatsSnapshot::default());
}

#[tokio::test]
async fn test_individual_counters() {
    let stats = StatsRegistry::new();

    stats.increment_requests().await;
    stats.add_bytes_received(10).await;
    stats.add_bytes_sent(25).await;
    stats.add_bytes_sent(5).await;

    let snap = stats.snapshot().await;
    assert_eq!(snap.requests_handled, 1);
    assert_eq!(snap.bytes_received, 10);
    assert_eq!(snap.bytes_sent, 30);
}

#[tokio::test]
async fn test_record_request_updates_both_counters() {
    let stats = StatsRegistry::new();

    stats.record_request(64).await;
    stats.record_request(16).await;

    let snap = stats.snapshot().await;
    assert_eq!(snap.requests_handled, 2);
    assert_eq!(snap.bytes_received, 80);
    assert_eq!(snap.bytes_sent, 0);
}

#[tokio::test]
async fn test_clones_share_counters() {
    let stats = StatsRegistry::new();
    let other = stats.clone();

    other.increment_requests().await;

    assert_eq!(stats.snapshot().await.requests_handled, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_updates_are_not_lost() {
    let stats = StatsRegistry::new();
    let mut handles = Vec::new();

    for _ in 0..64 {
        let stats = stats.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..100 {
                stats.record_request(3).await;
                stats.add_bytes_sent(7).await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let snap = stats.snapshot().await;
    assert_eq!(snap.requests_handled, 6_400);
    assert_eq!(snap.bytes_received, 19_200);
    assert_eq!(snap.bytes_sent, 44_800);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_snapshots_never_decrease() {
    let stats = StatsRegistry::new();

    let writer = {
        let stats = stats.clone();
        tokio::spawn(async move {
            for _ in 0..500 {
                stats.record_request(1).await;
            }
        })
    };

    let mut last = StatsSnapshot::default();
    for _ in 0..200 {
        let snap = stats.snapshot().await;
        assert!(snap.requests_handled >= last.requests_handled);
        // record_request moves both counters together
        assert_eq!(snap.requests_handled, snap.bytes_received);
        last = snap;
        tokio::task::yield_now().await;
    }

    writer.await.unwrap();
    assert_eq!(stats.snapshot().await.requests_handled, 500);
}
