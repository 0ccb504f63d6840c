use claims::{assert_err, assert_ok};
use mockito::{Matcher, Server};
use serde_json::json;
use server::common::MarketplaceError;
use server::marketplace::{ExtensionQueryOptions, MarketplaceClient, MarketplaceConfig};
use server::model::Extension;

fn sample_response() -> serde_json::Value {
    json!({
        "results": [{
            "extensions": [{
                "publisher": {
                    "publisherId": "pub-1",
                    "publisherName": "dracula-theme",
                    "displayName": "Dracula Theme",
                    "flags": "verified"
                },
                "extensionId": "ext-1",
                "extensionName": "theme-dracula",
                "displayName": "Dracula Official",
                "shortDescription": "Official Dracula Theme",
                "lastUpdated": "2024-01-01T00:00:00Z",
                "versions": [{
                    "version": "2.24.3",
                    "files": [{
                        "assetType": "Microsoft.VisualStudio.Services.VSIXPackage",
                        "source": "https://example.invalid/vsix"
                    }]
                }],
                "categories": ["Themes"],
                "statistics": [
                    {"statisticName": "install", "value": 5000000.0},
                    {"statisticName": "trendingdaily", "value": 0.5},
                    {"statisticName": "trendingweekly", "value": 1.25},
                    {"statisticName": "trendingmonthly", "value": 3.0},
                    {"statisticName": "weightedRating", "value": 4.8}
                ]
            }]
        }]
    })
}

mod raw_query {
    use super::*;

    #[tokio::test]
    async fn test_query_sends_default_body_and_headers() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header(
                "accept",
                "application/json;api-version=5.2-preview.1;excludeUrls=true",
            )
            .match_header("content-type", "application/json")
            .match_header("user-agent", Matcher::Exact(String::new()))
            .match_body(Matcher::Json(json!({
                "assetTypes": null,
                "filters": [{
                    "criteria": [],
                    "direction": 2,
                    "pageSize": 100,
                    "pageNumber": 1,
                    "sortBy": 1,
                    "sortOrder": 0,
                    "pagingToken": null
                }],
                "flags": 870
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_response().to_string())
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let results = assert_ok!(client.query(ExtensionQueryOptions::default()).await);

        mock.assert_async().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].extension_name, "theme-dracula");
        assert_eq!(results[0].publisher.publisher_name, "dracula-theme");
        assert_eq!(results[0].versions[0].version, "2.24.3");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let error = assert_err!(client.query(ExtensionQueryOptions::default()).await);

        mock.assert_async().await;
        match &error {
            MarketplaceError::Transport {
                status,
                status_text,
            } => {
                assert_eq!(*status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("Expected Transport error, got {other:?}"),
        }
        assert_eq!(
            error.to_string(),
            "Marketplace API response status 'Internal Server Error'"
        );
    }

    #[tokio::test]
    async fn test_empty_results_is_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let error = assert_err!(client.query(ExtensionQueryOptions::default()).await);
        assert!(matches!(error, MarketplaceError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let error = assert_err!(client.query(ExtensionQueryOptions::default()).await);
        assert!(matches!(error, MarketplaceError::InvalidResponse { .. }));
        assert_eq!(error.status(), None);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_failure() {
        // Port 9 (discard) is not expected to have an HTTP server.
        let client = MarketplaceClient::with_endpoint("http://127.0.0.1:9/");
        let error = assert_err!(client.query(ExtensionQueryOptions::default()).await);
        assert!(matches!(error, MarketplaceError::RequestFailed { .. }));
    }
}

mod canned_queries {
    use super::*;

    #[tokio::test]
    async fn test_updated_extensions_filters_themes() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "filters": [{
                    "criteria": [
                        {"filterType": 8, "value": "Microsoft.VisualStudio.Code"},
                        {"filterType": 10, "value": "target:\"Microsoft.VisualStudio.Code\" "},
                        {"filterType": 12, "value": "37888"},
                        {"filterType": 5, "value": "Themes"}
                    ],
                    "pageNumber": 2,
                    "pageSize": 25,
                    "sortBy": 1
                }]
            })))
            .with_status(200)
            .with_body(sample_response().to_string())
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let results = assert_ok!(client.query_updated_extensions(2, 25).await);

        mock.assert_async().await;
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_updated_extensions_wraps_failures() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let error = assert_err!(client.query_updated_extensions(1, 100).await);

        assert!(matches!(
            error,
            MarketplaceError::UpdatedExtensionsQuery { .. }
        ));
        assert_eq!(error.status(), Some(503));
        assert_eq!(
            error.to_string(),
            "MarketplaceAPI.queryUpdatedExtensions failed: Marketplace API response status 'Service Unavailable'"
        );
    }

    #[tokio::test]
    async fn test_extension_id_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "filters": [{"criteria": [{"filterType": 4, "value": "ext-1"}]}]
            })))
            .with_status(200)
            .with_body(sample_response().to_string())
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let results = assert_ok!(client.query_extension_id("ext-1").await);

        mock.assert_async().await;
        assert_eq!(results[0].extension_id, "ext-1");
    }

    #[tokio::test]
    async fn test_extension_slug_query_wraps_failures() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({
                "filters": [{"criteria": [{"filterType": 7, "value": "dracula-theme.theme-dracula"}]}]
            })))
            .with_status(404)
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let error = assert_err!(
            client
                .query_extension_slug("dracula-theme.theme-dracula")
                .await
        );

        mock.assert_async().await;
        match &error {
            MarketplaceError::ExtensionSlugQuery { slug, source } => {
                assert_eq!(slug, "dracula-theme.theme-dracula");
                assert!(matches!(**source, MarketplaceError::Transport { status: 404, .. }));
            }
            other => panic!("Expected ExtensionSlugQuery error, got {other:?}"),
        }
        assert!(error.to_string().contains("Not Found"));
    }

    #[tokio::test]
    async fn test_client_from_config_uses_configured_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/gallery")
            .with_status(200)
            .with_body(sample_response().to_string())
            .create_async()
            .await;

        let config = MarketplaceConfig::new(Some(format!("{}/gallery", server.url())), None);
        let client = MarketplaceClient::from_config(&config);
        assert_ok!(client.query_extension_id("ext-1").await);

        mock.assert_async().await;
    }
}

mod extension_mapping {
    use super::*;

    #[tokio::test]
    async fn test_extension_from_query_result() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(sample_response().to_string())
            .create_async()
            .await;

        let client = MarketplaceClient::with_endpoint(server.url());
        let results = assert_ok!(client.query_extension_id("ext-1").await);
        let extension = Extension::from(&results[0]);

        assert_eq!(extension.name, "theme-dracula");
        assert_eq!(extension.display_name, "Dracula Official");
        assert_eq!(
            extension.short_description.as_deref(),
            Some("Official Dracula Theme")
        );
        assert_eq!(extension.publisher_id, "pub-1");
        assert_eq!(extension.publisher_name, "dracula-theme");
        assert_eq!(extension.publisher_display_name, "Dracula Theme");
        assert_eq!(extension.installs, 5_000_000);
        assert_eq!(extension.trending_daily, 0.5);
        assert_eq!(extension.trending_weekly, 1.25);
        assert_eq!(extension.trending_monthly, 3.0);
        assert_eq!(extension.weighted_rating, 4.8);
    }

    #[test]
    fn test_missing_statistics_default_to_zero() {
        let result: server::marketplace::ExtensionQueryResult = serde_json::from_value(json!({
            "publisher": {
                "publisherId": "pub-2",
                "publisherName": "acme",
                "displayName": "Acme"
            },
            "extensionId": "ext-2",
            "extensionName": "plain",
            "displayName": "Plain"
        }))
        .unwrap();

        let extension = Extension::from(&result);
        assert_eq!(extension.installs, 0);
        assert_eq!(extension.weighted_rating, 0.0);
        assert_eq!(extension.short_description, None);
    }
}
