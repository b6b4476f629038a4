use quarry::{CachePolicy, Connector, QueryCache};
use std::{sync::Arc, time::Duration};
use tests::{row, MockDriver};

const SQL: &str = "SELECT  users.id FROM users  WHERE 1 AND id > 5";

#[tokio::test]
async fn cached_select_is_shared_until_force_refresh() {
    tests::init_tracing();

    let driver = MockDriver::new();
    driver
        .push_rows(vec![row!("id" => 6)])
        .push_rows(vec![row!("id" => 7)]);

    let mut connector = Connector::new("main", driver.clone());

    let first = connector.query(SQL).await.unwrap().unwrap();
    let second = connector.query(SQL).await.unwrap().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(driver.log().len(), 1);

    connector.force_refresh();
    let third = connector.query(SQL).await.unwrap().unwrap();

    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(*third, vec![row!("id" => 7)]);
    assert_eq!(driver.log().len(), 2);

    // The refresh applies to one statement only, and replaced the entry
    assert!(!connector.is_force_refresh());
    let fourth = connector.query(SQL).await.unwrap().unwrap();
    assert!(Arc::ptr_eq(&third, &fourth));
    assert_eq!(driver.log().len(), 2);
}

#[tokio::test]
async fn ignore_cache_executes_every_time_but_still_stores() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector.ignore_cache(true);
    connector.query(SQL).await.unwrap();
    connector.query(SQL).await.unwrap();
    assert_eq!(driver.log().len(), 2);

    connector.ignore_cache(false);
    connector.query(SQL).await.unwrap();
    assert_eq!(driver.log().len(), 2);
    assert_eq!(connector.cache().len(), 1);
}

#[tokio::test]
async fn statements_are_trimmed_before_lookup() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector.query(&format!("  {SQL}  ")).await.unwrap();
    connector.query(SQL).await.unwrap();

    assert_eq!(driver.log().sql(), [SQL]);
}

#[tokio::test]
async fn lowercase_select_is_cached() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector.query("select 1").await.unwrap();
    connector.query("select 1").await.unwrap();

    assert_eq!(driver.log().len(), 1);
}

#[tokio::test]
async fn writes_always_execute_and_cache_no_rows() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    let delete = "DELETE FROM users WHERE 1 AND id = 3";
    assert_eq!(connector.query(delete).await.unwrap(), None);
    assert_eq!(connector.query(delete).await.unwrap(), None);

    assert_eq!(driver.log().len(), 2);
    assert_eq!(connector.cache().get("main", delete), Some(None));
}

#[tokio::test]
async fn writes_keep_stale_reads_by_default() {
    let driver = MockDriver::new();
    driver.push_rows(vec![row!("id" => 1)]);

    let mut connector = Connector::new("main", driver.clone());

    connector.query(SQL).await.unwrap();
    connector.query("DELETE FROM users WHERE 1 ").await.unwrap();

    let rows = connector.query(SQL).await.unwrap().unwrap();
    assert_eq!(*rows, vec![row!("id" => 1)]);
    assert_eq!(driver.log().len(), 2);
}

#[tokio::test]
async fn invalidate_on_write_drops_connector_entries() {
    let cache = Arc::new(QueryCache::new(
        CachePolicy::default().invalidate_on_write(true),
    ));

    let main_driver = MockDriver::new();
    let mut main = Connector::builder("main")
        .cache(cache.clone())
        .build(main_driver.clone());

    let mut replica = Connector::builder("replica")
        .cache(cache.clone())
        .build(MockDriver::new());

    main.query(SQL).await.unwrap();
    replica.query(SQL).await.unwrap();
    assert_eq!(cache.len(), 2);

    main.query("UPDATE users SET `name`='x' WHERE 1 ").await.unwrap();

    assert!(cache.get("main", SQL).is_none());
    assert!(cache.get("replica", SQL).is_some());

    main.query(SQL).await.unwrap();
    assert_eq!(main_driver.log().count(|sql| sql == SQL), 2);
}

#[tokio::test]
async fn max_entries_bounds_the_cache() {
    let driver = MockDriver::new();
    let mut connector = Connector::builder("main")
        .cache_policy(CachePolicy::default().max_entries(2))
        .build(driver.clone());

    connector.query("SELECT 1").await.unwrap();
    connector.query("SELECT 2").await.unwrap();
    connector.query("SELECT 3").await.unwrap();
    assert_eq!(connector.cache().len(), 2);

    // `SELECT 1` was evicted
    connector.query("SELECT 1").await.unwrap();
    assert_eq!(driver.log().count(|sql| sql == "SELECT 1"), 2);
}

#[tokio::test(start_paused = true)]
async fn ttl_expires_entries() {
    let driver = MockDriver::new();
    let mut connector = Connector::builder("main")
        .cache_policy(CachePolicy::default().ttl(Duration::from_secs(60)))
        .build(driver.clone());

    connector.query(SQL).await.unwrap();

    tokio::time::advance(Duration::from_secs(30)).await;
    connector.query(SQL).await.unwrap();
    assert_eq!(driver.log().len(), 1);

    tokio::time::advance(Duration::from_secs(31)).await;
    connector.query(SQL).await.unwrap();
    assert_eq!(driver.log().len(), 2);
}
