use pretty_assertions::assert_eq;
use quarry::Connector;
use tests::MockDriver;

#[tokio::test]
async fn lang_suffix_is_substituted() {
    let driver = MockDriver::new();
    let mut connector = Connector::builder("main").lang("es").build(driver.clone());

    connector
        .query("SELECT posts.title_LANG AS title FROM posts")
        .await
        .unwrap();

    assert_eq!(
        driver.log().last_sql().unwrap(),
        "SELECT posts.title_es AS title FROM posts"
    );
}

#[tokio::test]
async fn lang_suffix_is_kept_without_a_language() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());

    connector.query("SELECT title_LANG FROM posts").await.unwrap();

    assert_eq!(driver.log().last_sql().unwrap(), "SELECT title_LANG FROM posts");
}

#[tokio::test]
async fn remember_total_records_found_rows() {
    let driver = MockDriver::new();
    let mut connector = Connector::new("main", driver.clone());
    connector.remember_total("posts");

    connector
        .query("select posts.id FROM posts LIMIT 10")
        .await
        .unwrap();

    assert_eq!(
        driver.log().last_sql().unwrap(),
        "SELECT SQL_CALC_FOUND_ROWS posts.id FROM posts LIMIT 10; SET @rows_posts = FOUND_ROWS();"
    );

    connector.forget_total();
    connector.query("SELECT posts.id FROM posts").await.unwrap();

    assert_eq!(driver.log().last_sql().unwrap(), "SELECT posts.id FROM posts");
}

#[tokio::test]
async fn remember_total_rewrites_only_the_first_select() {
    let driver = MockDriver::new();
    let mut connector = Connector::builder("main")
        .remember_total("t")
        .build(driver.clone());

    connector
        .query("SELECT * FROM (SELECT id FROM t) AS tmp_table")
        .await
        .unwrap();

    assert_eq!(
        driver.log().last_sql().unwrap(),
        "SELECT SQL_CALC_FOUND_ROWS * FROM (SELECT id FROM t) AS tmp_table; SET @rows_t = FOUND_ROWS();"
    );
}
