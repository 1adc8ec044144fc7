use mockito::{Matcher, Server};

use cardseek_domain::{Color, QueryMode, QueryParameters, SearchCriteria};
use cardseek_providers::{CatalogClient, Error};

fn catalog_config(server_url: &str) -> cardseek_config::Catalog {
	cardseek_config::Catalog {
		api_base: format!("{server_url}/v1/cards"),
		timeout_ms: 2_000,
		user_agent: Some("cardseek-test".to_string()),
	}
}

#[tokio::test]
async fn sends_query_parameters_and_returns_cards() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/v1/cards")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("name".to_string(), "Shivan Dragon".to_string()),
			Matcher::UrlEncoded("colors".to_string(), "Red".to_string()),
			Matcher::UrlEncoded("page".to_string(), "2".to_string()),
			Matcher::UrlEncoded("pageSize".to_string(), "12".to_string()),
		]))
		.match_header("user-agent", "cardseek-test")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"cards":[{"name":"Shivan Dragon","set":"LEA"}]}"#)
		.create_async()
		.await;
	let client =
		CatalogClient::new(&catalog_config(&server.url())).expect("Failed to build client.");
	let criteria =
		SearchCriteria::new(12).with_name("Shivan Dragon").with_colors([Color::Red]).with_page(2);
	let params = QueryParameters::from_criteria(&criteria, QueryMode::Name);
	let cards = client.fetch_cards(&params).await.expect("Fetch failed.");

	mock.assert_async().await;

	assert_eq!(cards.len(), 1);
	assert_eq!(cards[0]["set"], "LEA");
}

#[tokio::test]
async fn missing_cards_field_is_an_empty_page() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/v1/cards")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body("{}")
		.create_async()
		.await;
	let client =
		CatalogClient::new(&catalog_config(&server.url())).expect("Failed to build client.");
	let cards = client.fetch_cards(&QueryParameters::new()).await.expect("Fetch failed.");

	assert!(cards.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/v1/cards")
		.match_query(Matcher::Any)
		.with_status(503)
		.create_async()
		.await;
	let client =
		CatalogClient::new(&catalog_config(&server.url())).expect("Failed to build client.");
	let err = client.fetch_cards(&QueryParameters::new()).await.expect_err("Expected failure.");

	assert!(matches!(err, Error::Status { status: 503 }), "Unexpected error: {err:?}");
}

#[tokio::test]
async fn malformed_body_is_an_error() {
	let mut server = Server::new_async().await;
	let _mock = server
		.mock("GET", "/v1/cards")
		.match_query(Matcher::Any)
		.with_status(200)
		.with_body("<html>")
		.create_async()
		.await;
	let client =
		CatalogClient::new(&catalog_config(&server.url())).expect("Failed to build client.");
	let err = client.fetch_cards(&QueryParameters::new()).await.expect_err("Expected failure.");

	assert!(matches!(err, Error::SerdeJson(_)), "Unexpected error: {err:?}");
}

#[test]
fn rejects_blank_api_base() {
	let cfg = cardseek_config::Catalog {
		api_base: "  ".to_string(),
		timeout_ms: 1_000,
		user_agent: None,
	};
	let err = CatalogClient::new(&cfg).expect_err("Expected config error.");

	assert!(matches!(err, Error::InvalidConfig { .. }));
}
