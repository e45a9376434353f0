//! Kraken candle source against a mocked REST API

use trendpulse::error::MarketDataError;
use trendpulse::models::timeframe::Timeframe;
use trendpulse::services::{CandleSource, KrakenCandleSource};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{kraken_rows, long_candles, mock_kraken_ohlc};

fn source(server: &MockServer) -> KrakenCandleSource {
    KrakenCandleSource::with_client(&server.uri(), reqwest::Client::new()).unwrap()
}

#[tokio::test]
async fn requests_pair_and_interval() {
    let server = MockServer::start().await;
    let candles = long_candles(60);

    Mock::given(method("GET"))
        .and(path("/0/public/OHLC"))
        .and(query_param("pair", "XBTUSD"))
        .and(query_param("interval", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": { "XXBTZUSD": kraken_rows(&candles), "last": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = source(&server)
        .fetch_candles("XBT/USD", Timeframe::Minute15, 300)
        .await
        .unwrap();

    assert_eq!(fetched.len(), 60);
    assert_eq!(fetched[59].close, candles[59].close);
}

#[tokio::test]
async fn keeps_base_url_path_prefix() {
    let server = MockServer::start().await;
    let candles = long_candles(60);

    Mock::given(method("GET"))
        .and(path("/kraken/0/public/OHLC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": [],
            "result": { "XXBTZUSD": kraken_rows(&candles), "last": 0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = format!("{}/kraken", server.uri());
    let source = KrakenCandleSource::with_client(&base, reqwest::Client::new()).unwrap();
    let fetched = source
        .fetch_candles("XBT/USD", Timeframe::Minute5, 300)
        .await
        .unwrap();
    assert_eq!(fetched.len(), 60);
}

#[tokio::test]
async fn returns_last_candles_in_ascending_order() {
    let server = MockServer::start().await;
    let mut candles = long_candles(80);
    candles.reverse();
    mock_kraken_ohlc(&server, &candles).await;

    let fetched = source(&server)
        .fetch_candles("XBT/USD", Timeframe::Minute5, 50)
        .await
        .unwrap();

    assert_eq!(fetched.len(), 50);
    assert!(fetched.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    // the newest candle of the original series is kept last
    assert_eq!(fetched[49].timestamp, candles[0].timestamp);
    assert_eq!(fetched[0].timestamp, candles[49].timestamp);
}

#[tokio::test]
async fn maps_rate_limit_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/0/public/OHLC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": ["EAPI:Rate limit exceeded"]
        })))
        .mount(&server)
        .await;

    let err = source(&server)
        .fetch_candles("XBT/USD", Timeframe::Minute5, 300)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::RateLimited(_)));
}

#[tokio::test]
async fn maps_unknown_pair() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/0/public/OHLC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": ["EQuery:Unknown asset pair"]
        })))
        .mount(&server)
        .await;

    let err = source(&server)
        .fetch_candles("FOO/BAR", Timeframe::Minute5, 300)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::UnknownSymbol(ref s) if s == "FOOBAR"));
}

#[tokio::test]
async fn server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/0/public/OHLC"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = source(&server)
        .fetch_candles("XBT/USD", Timeframe::Minute5, 300)
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::Http(_)));
}
