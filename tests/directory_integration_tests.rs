use terra::directory::{CountryDirectory, DirectoryError, RestCountriesDirectory};
use tokio_test::assert_ok;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn germany() -> serde_json::Value {
    serde_json::json!({
        "name": { "common": "Germany", "official": "Federal Republic of Germany" },
        "capital": ["Berlin"],
        "population": 83240525,
        "region": "Europe",
        "subregion": "Western Europe",
        "flags": { "png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg" },
        "cca3": "DEU",
        "borders": ["AUT", "BEL", "CZE", "DNK", "FRA", "LUX", "NLD", "POL", "CHE"],
        "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
        "languages": { "deu": "German" }
    })
}

fn japan() -> serde_json::Value {
    serde_json::json!({
        "name": { "common": "Japan", "official": "Japan" },
        "capital": ["Tokyo"],
        "population": 125836021,
        "region": "Asia",
        "cca3": "JPN"
    })
}

fn not_found_body() -> serde_json::Value {
    serde_json::json!({ "status": 404, "message": "Not Found" })
}

async fn directory_for(server: &MockServer) -> RestCountriesDirectory {
    RestCountriesDirectory::new(Some(server.uri()))
}

// ============================================================================
// Successful Responses
// ============================================================================

#[tokio::test]
async fn test_all_requests_field_filter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/all"))
        .and(query_param(
            "fields",
            "name,capital,population,region,subregion,flags,cca3,borders,currencies,languages",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![germany(), japan()]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let countries = assert_ok!(directory.all().await);

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].name.common, "Germany");
    assert_eq!(countries[0].population, 83240525);
    assert_eq!(countries[1].primary_capital(), Some("Tokyo"));
}

#[tokio::test]
async fn test_by_name_encodes_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/united%20states"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![serde_json::json!({
            "name": { "common": "United States", "official": "United States of America" },
            "population": 329484123,
            "region": "Americas"
        })]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let countries = assert_ok!(directory.by_name("united states").await);
    assert_eq!(countries[0].name.common, "United States");
}

#[tokio::test]
async fn test_by_region() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/asia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![japan()]))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let countries = assert_ok!(directory.by_region("asia").await);
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].region, "Asia");
}

#[tokio::test]
async fn test_by_alpha_accepts_array_and_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/DEU"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![germany()]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alpha/JPN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(japan()))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let germany = assert_ok!(directory.by_alpha("DEU").await);
    assert_eq!(germany.name.common, "Germany");
    let japan = assert_ok!(directory.by_alpha("JPN").await);
    assert_eq!(japan.cca3.as_deref(), Some("JPN"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/asia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![japan()]))
        .mount(&mock_server)
        .await;

    let directory = RestCountriesDirectory::new(Some(format!("{}/", mock_server.uri())));
    assert_ok!(directory.by_region("asia").await);
}

#[tokio::test]
async fn test_malformed_records_are_skipped() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        germany(),
        { "name": { "common": "Nowhere" } },
        { "name": { "common": "   " }, "population": 1, "region": "Asia" },
        "not an object",
        japan()
    ]);
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let countries = assert_ok!(directory.all().await);
    let names: Vec<&str> = countries.iter().map(|c| c.name.common.as_str()).collect();
    assert_eq!(names, vec!["Germany", "Japan"]);
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_http_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/atlantis"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    let result = directory.by_name("atlantis").await;
    assert_eq!(result, Err(DirectoryError::NotFound));
}

#[tokio::test]
async fn test_sentinel_in_success_body_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/name/atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![not_found_body()]))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/alpha/XXX"))
        .respond_with(ResponseTemplate::new(200).set_body_json(not_found_body()))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert_eq!(
        directory.by_name("atlantis").await,
        Err(DirectoryError::NotFound)
    );
    assert_eq!(
        directory.by_alpha("XXX").await,
        Err(DirectoryError::NotFound)
    );
}

#[tokio::test]
async fn test_empty_alpha_result_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alpha/ZZZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert_eq!(
        directory.by_alpha("ZZZ").await,
        Err(DirectoryError::NotFound)
    );
}

#[tokio::test]
async fn test_server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    match directory.by_region("europe").await {
        Err(DirectoryError::Status { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("Internal Server Error"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/region/europe"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let directory = directory_for(&mock_server).await;
    assert!(matches!(
        directory.by_region("europe").await,
        Err(DirectoryError::Parse(_))
    ));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 1
    let directory = RestCountriesDirectory::new(Some("http://127.0.0.1:1".to_string()));
    assert!(matches!(
        directory.all().await,
        Err(DirectoryError::Network(_))
    ));
}
