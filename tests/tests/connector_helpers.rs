use pretty_assertions::assert_eq;
use quarry::{
    driver::Response, schema::Field, CoercionMode, Config, Connector, Query, Schema, Value,
};
use tests::{data, row, MockDriver};

fn users() -> Schema {
    Schema::new("users")
        .field(Field::integer("id"))
        .field(Field::string("name"))
        .field(Field::boolean("active"))
        .field(Field::json("prefs").compressed())
        .field(Field::related("posts", "posts"))
}

#[tokio::test]
async fn select_renders_and_returns_rows() {
    let driver = MockDriver::new();
    driver.push_rows(vec![row!("id" => 6, "n" => "Ada")]);

    let mut connector = Connector::new("main", driver.clone());
    let query = Query::new("users")
        .columns(["id", "name as n"])
        .filter("AND id > 5");

    let rows = connector.select(&query).await.unwrap();

    assert_eq!(*rows, vec![row!("id" => 6, "n" => "Ada")]);
    assert_eq!(
        driver.log().sql(),
        ["SELECT  users.id,users.name AS n FROM users  WHERE 1 AND id > 5"]
    );
}

#[tokio::test]
async fn select_distinct_uses_distinct() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector
        .select_distinct(&Query::new("users").column("email"))
        .await
        .unwrap();

    assert_eq!(
        driver.log().last_sql().unwrap(),
        "SELECT DISTINCT users.email FROM users  WHERE 1"
    );
}

#[tokio::test]
async fn select_without_row_set_is_an_error() {
    let driver = MockDriver::new();
    driver.push_response(Response::done(0));

    let mut connector = Connector::new("main", driver);
    let err = connector
        .select(&Query::new("users").column("id"))
        .await
        .unwrap_err();

    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn count_reads_the_count_column() {
    let driver = MockDriver::new();
    driver
        .push_rows(vec![row!("Count" => 12)])
        .push_rows(vec![row!("Count" => "7")]);

    let mut connector = Connector::new("main", driver.clone());
    let query = Query::new("users").and("active = 1");

    assert_eq!(connector.count(&query, "users.id").await.unwrap(), 12);
    assert_eq!(
        driver.log().last_sql().unwrap(),
        "SELECT COUNT(DISTINCT users.id) AS Count FROM users  WHERE 1 AND active = 1"
    );

    // Text counts are parsed too
    connector.force_refresh();
    assert_eq!(connector.count(&query, "users.id").await.unwrap(), 7);
}

#[tokio::test]
async fn count_without_count_column_is_an_error() {
    let driver = MockDriver::new();
    driver.push_rows(vec![row!("total" => 3)]);

    let mut connector = Connector::new("main", driver);
    let err = connector
        .count(&Query::new("users"), "users.id")
        .await
        .unwrap_err();

    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn insert_returns_generated_id() {
    let driver = MockDriver::new();
    driver.next_insert_id(41);

    let mut connector = Connector::new("main", driver.clone());
    assert_eq!(connector.last_inserted_id(), 0);

    let schema = users();
    let parsed = connector
        .prepare_data(&schema, data!("name" => "O'Brien", "active" => true))
        .unwrap();

    let id = connector
        .insert(&Query::new("users").data(parsed))
        .await
        .unwrap();

    assert_eq!(id, 41);
    assert_eq!(connector.last_inserted_id(), 41);
    assert_eq!(
        driver.log().last_sql().unwrap(),
        "INSERT INTO users SET `name`='O\\'Brien',`active`='1'"
    );
}

#[tokio::test]
async fn update_and_delete() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    let parsed = connector
        .prepare_data(
            &users(),
            data!("prefs" => Value::Json(serde_json::json!({"theme": "dark"}))),
        )
        .unwrap();

    connector
        .update(&Query::new("users").data(parsed).and("id = 3"))
        .await
        .unwrap();
    connector
        .delete(&Query::new("users").and("id = 3"))
        .await
        .unwrap();

    assert_eq!(
        driver.log().sql(),
        [
            "UPDATE users SET `prefs`=COMPRESS('{&quot;theme&quot;:&quot;dark&quot;}') WHERE 1 AND id = 3",
            "DELETE FROM users WHERE 1 AND id = 3",
        ]
    );
}

#[tokio::test]
async fn render_does_not_execute() {
    let driver = MockDriver::new();
    let connector = Connector::new("main", driver.clone());

    let sql = connector.render(
        &Query::new("users").column("id").limit(10).page(2),
        &quarry::StatementKind::Select,
    );

    assert_eq!(sql, "SELECT  users.id FROM users  WHERE 1    LIMIT 20, 10");
    assert!(driver.log().is_empty());
    assert!(!connector.is_connected());
}

#[test]
fn schema_columns_skip_relations() {
    let connector = Connector::new("main", MockDriver::new());

    assert_eq!(
        connector.extract_schema_columns(&users()),
        [
            "users.id AS id",
            "users.name AS name",
            "users.active AS active",
            "UNCOMPRESS(users.prefs) AS prefs",
        ]
    );
}

#[test]
fn coercion_mode_follows_config() {
    let config = Config {
        coercion: CoercionMode::Strict,
        ..Config::default()
    };

    let strict = Connector::builder("main")
        .config(&config)
        .build(MockDriver::new());
    let lenient = Connector::new("main", MockDriver::new());

    let payload = || data!("id" => "not a number");

    assert!(strict
        .prepare_data(&users(), payload())
        .unwrap_err()
        .is_type_conversion());

    let parsed = lenient.prepare_data(&users(), payload()).unwrap();
    assert_eq!(parsed["id"], quarry::Literal::Int(0));
}

#[tokio::test]
async fn connection_opens_once_and_reopens_after_disconnect() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector.query("SELECT 1").await.unwrap();
    connector.query("SELECT 2").await.unwrap();
    assert_eq!(driver.connects(), 1);

    connector.disconnect();
    assert!(!connector.is_connected());
    assert_eq!(connector.last_inserted_id(), 0);

    connector.connect().await.unwrap();
    assert!(connector.is_connected());
    assert_eq!(driver.connects(), 2);
}

#[tokio::test]
async fn connection_failure_is_not_retried() {
    let driver = MockDriver::new();
    driver.fail_connects(1);

    let mut connector = Connector::new("main", driver.clone());
    let err = connector.query("SELECT 1").await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        "connector `main` failed to connect: connection refused"
    );
    assert!(driver.log().is_empty());
    assert!(!connector.is_connected());
}

#[tokio::test]
async fn execution_errors_carry_the_connector_name() {
    let driver = MockDriver::new();
    driver.push_error("syntax error");

    let mut connector = Connector::new("main", driver);
    let err = connector.query("SELEC 1").await.unwrap_err();

    assert!(err.is_driver());
    assert_eq!(err.to_string(), "connector `main`: syntax error");
}
