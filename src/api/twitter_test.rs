#[cfg(test)]
mod tests {
    use crate::api::twitter::sign;
    use crate::api::{OAuthCredentials, ProviderError, TwitterClient};
    use mockito::{Matcher, Server};
    use serde_json::json;

    const PLACE_PATH: &str = "/1.1/trends/place.json";

    fn test_credentials() -> OAuthCredentials {
        OAuthCredentials {
            consumer_key: "ck".to_string(),
            consumer_secret: "cs".to_string(),
            access_token: "at".to_string(),
            access_token_secret: "ats".to_string(),
        }
    }

    // Helper to build a provider payload with `n` ranked trends
    fn place_body(n: usize) -> String {
        let trends: Vec<_> = (1..=n)
            .map(|i| {
                json!({
                    "name": format!("Trend{}", i),
                    "url": format!("http://twitter.com/search?q=Trend{}", i),
                    "promoted_content": null,
                    "query": format!("Trend{}", i),
                    "tweet_volume": i * 100,
                })
            })
            .collect();
        json!([{
            "trends": trends,
            "as_of": "2024-03-10T12:00:00Z",
            "created_at": "2024-03-10T11:55:00Z",
            "locations": [{"name": "New York", "woeid": 2459115}],
        }])
        .to_string()
    }

    #[test]
    fn test_sign_matches_reference_vector() {
        // Reference request from the provider's "creating a signature" documentation
        let params: Vec<(String, String)> = [
            ("include_entities", "true"),
            ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
            ("oauth_consumer_key", "xvz1evFS4wEEPTGEFPHBog"),
            ("oauth_nonce", "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1318622958"),
            ("oauth_token", "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb"),
            ("oauth_version", "1.0"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let signature = sign(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &params,
            "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
        )
        .unwrap();

        assert_eq!(signature, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[tokio::test]
    async fn test_get_place_trends_success() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", PLACE_PATH)
            .match_query(Matcher::UrlEncoded("id".into(), "2459115".into()))
            .match_header(
                "authorization",
                Matcher::AllOf(vec![
                    Matcher::Regex("^OAuth ".into()),
                    Matcher::Regex(r#"oauth_consumer_key="ck""#.into()),
                    Matcher::Regex(r#"oauth_token="at""#.into()),
                    Matcher::Regex(r#"oauth_signature_method="HMAC-SHA1""#.into()),
                    Matcher::Regex("oauth_signature=".into()),
                ]),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(place_body(3))
            .create_async()
            .await;

        let client = TwitterClient::new(test_credentials(), &server.url()).unwrap();
        let trends = client.get_place_trends("2459115").await.unwrap();

        m.assert_async().await;
        assert_eq!(trends.len(), 3);
        assert_eq!(trends[0].name, "Trend1");
        assert_eq!(trends[2].url, "http://twitter.com/search?q=Trend3");
        assert_eq!(trends[1].tweet_volume, Some(200));
    }

    #[tokio::test]
    async fn test_get_place_trends_maps_status_codes() {
        let cases = [
            (401, "unauthorized"),
            (403, "unauthorized"),
            (429, "rate_limited"),
            (503, "status"),
        ];

        for (status, expected) in cases {
            let mut server = Server::new_async().await;
            let _m = server
                .mock("GET", PLACE_PATH)
                .match_query(Matcher::Any)
                .with_status(status)
                .with_body(r#"{"errors":[{"code":32,"message":"Could not authenticate you."}]}"#)
                .create_async()
                .await;

            let client = TwitterClient::new(test_credentials(), &server.url()).unwrap();
            let err = client.get_place_trends("1").await.unwrap_err();

            let kind = match err {
                ProviderError::Unauthorized(code) => {
                    assert_eq!(code as usize, status);
                    "unauthorized"
                },
                ProviderError::RateLimited => "rate_limited",
                ProviderError::Status(code) => {
                    assert_eq!(code as usize, status);
                    "status"
                },
                other => panic!("unexpected error for {}: {:?}", status, other),
            };
            assert_eq!(kind, expected, "status {}", status);
        }
    }

    #[tokio::test]
    async fn test_get_place_trends_empty_array() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", PLACE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = TwitterClient::new(test_credentials(), &server.url()).unwrap();
        let err = client.get_place_trends("42").await.unwrap_err();

        assert!(matches!(err, ProviderError::EmptyResponse(ref id) if id == "42"));
    }

    #[tokio::test]
    async fn test_get_place_trends_malformed_body() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", PLACE_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"not": "an array"}"#)
            .create_async()
            .await;

        let client = TwitterClient::new(test_credentials(), &server.url()).unwrap();
        let err = client.get_place_trends("1").await.unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_get_place_trends_unreachable_provider() {
        // Nothing listens on port 9 locally
        let client = TwitterClient::new(test_credentials(), "http://127.0.0.1:9").unwrap();
        let err = client.get_place_trends("1").await.unwrap_err();

        assert!(matches!(err, ProviderError::Network(_)));
    }
}
