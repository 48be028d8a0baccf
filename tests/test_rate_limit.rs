use football_data_be::middleware::{create_rate_limiter, spawn_rate_limiter_cleanup};
use std::time::Duration;

#[test]
fn test_rate_limiter_blocks_per_ip() {
    let limiter = create_rate_limiter(2);
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_ok());
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_ok());
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_err());
    assert!(limiter.check_key(&"10.0.0.2".to_string()).is_ok());
    assert_eq!(limiter.len(), 2);
}

#[test]
fn test_rate_limiter_zero_quota_allows_one() {
    let limiter = create_rate_limiter(0);
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_ok());
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_err());
}

#[tokio::test]
async fn test_cleanup_drops_idle_clients() {
    // One cell every millisecond, so a single request is forgotten almost at once.
    let limiter = create_rate_limiter(60_000);
    for i in 0..20 {
        assert!(limiter.check_key(&format!("10.0.0.{}", i)).is_ok());
    }
    assert_eq!(limiter.len(), 20);

    let cleanup = spawn_rate_limiter_cleanup(limiter.clone(), Duration::from_millis(5));
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(!cleanup.is_finished());
    assert_eq!(limiter.len(), 0);
    cleanup.abort();
}

#[tokio::test]
async fn test_cleanup_keeps_limited_clients() {
    let limiter = create_rate_limiter(1);
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_ok());

    let cleanup = spawn_rate_limiter_cleanup(limiter.clone(), Duration::from_millis(5));
    tokio::time::sleep(Duration::from_millis(30)).await;

    assert_eq!(limiter.len(), 1);
    assert!(limiter.check_key(&"10.0.0.1".to_string()).is_err());
    cleanup.abort();
}
