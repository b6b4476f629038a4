#![cfg(feature = "mysql")]

use mysql_async::prelude::Queryable;
use quarry::{schema::Field, Connector, Query, Schema, Value};
use tests::data;

fn url() -> String {
    std::env::var("QUARRY_TEST_MYSQL_URL")
        .unwrap_or_else(|_| "mysql://localhost:3306/quarry_test".to_string())
}

async fn reset(table: &str) {
    let pool = mysql_async::Pool::new(url().as_str());
    let mut conn = pool.get_conn().await.expect("Failed to get connection");

    conn.query_drop(format!("DROP TABLE IF EXISTS `{table}`"))
        .await
        .expect("Failed to drop table");
    conn.query_drop(format!(
        "CREATE TABLE `{table}` (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            active TINYINT NOT NULL,
            created DATETIME NULL
        )"
    ))
    .await
    .expect("Failed to create table");

    drop(conn);
    pool.disconnect().await.expect("Failed to close pool");
}

#[tokio::test]
async fn crud_round_trip() {
    tests::init_tracing();
    reset("quarry_people").await;

    let schema = Schema::new("quarry_people")
        .field(Field::integer("id"))
        .field(Field::string("name"))
        .field(Field::boolean("active"))
        .field(Field::datetime("created"));

    let mut connector = Connector::builder("main").connect(&url()).unwrap();

    let created = jiff::civil::date(2024, 5, 6).at(7, 8, 9, 0);
    let parsed = connector
        .prepare_data(
            &schema,
            data!("name" => "O'Brien", "active" => true, "created" => created),
        )
        .unwrap();

    let id = connector
        .insert(&Query::new("quarry_people").data(parsed))
        .await
        .unwrap();
    assert!(id > 0);

    let query = Query::for_schema(&schema).and(format!("quarry_people.id = {id}"));
    let rows = connector.select(&query).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], Value::from("O'Brien"));
    assert_eq!(rows[0]["active"], Value::from(1i64));
    assert_eq!(rows[0]["created"], Value::from(created));

    let total = connector
        .count(&Query::new("quarry_people"), "quarry_people.id")
        .await
        .unwrap();
    assert_eq!(total, 1);

    connector
        .delete(&Query::new("quarry_people").and(format!("id = {id}")))
        .await
        .unwrap();

    connector.force_refresh();
    assert!(connector.select(&query).await.unwrap().is_empty());
}
