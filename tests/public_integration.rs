use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use time::macros::datetime;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bittrex_api_client::auth::NonceProvider;
use bittrex_api_client::rest::BittrexRestClient;
use bittrex_api_client::rest::public::sort_by_base_volume;
use bittrex_api_client::{BittrexError, CandleInterval};

struct FixedNonce(u64);

impl NonceProvider for FixedNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> BittrexRestClient {
    BittrexRestClient::builder()
        .base_url(server.uri())
        .v2_base_url(server.uri())
        .nonce_provider(Arc::new(FixedNonce(42)))
        .build()
}

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "message": "",
        "result": result
    }))
}

#[tokio::test]
async fn test_get_ticker_uppercases_market() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getticker"))
        .and(query_param("market", "BTC-LTC"))
        .respond_with(ok(json!({"Bid": 0.01, "Ask": 0.0102, "Last": 0.0101})))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client.get_ticker("btc-ltc").await.unwrap();

    assert_eq!(ticker.bid, 0.01);
    assert_eq!(ticker.ask, 0.0102);
    assert_eq!(ticker.last, 0.0101);
}

#[tokio::test]
async fn test_public_requests_are_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getcurrencies"))
        .and(query_param_is_missing("apikey"))
        .and(query_param_is_missing("nonce"))
        .respond_with(ok(json!([{
            "Currency": "BTC",
            "CurrencyLong": "Bitcoin",
            "MinConfirmation": 2,
            "TxFee": 0.0002,
            "IsActive": true,
            "CoinType": "BITCOIN",
            "BaseAddress": null,
            "Notice": null
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let currencies = client.get_currencies().await.unwrap();

    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].currency, "BTC");
    assert!(currencies[0].base_address.is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("apisign").is_none());
}

#[tokio::test]
async fn test_get_markets_decodes_created() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkets"))
        .respond_with(ok(json!([{
            "MarketCurrency": "LTC",
            "BaseCurrency": "BTC",
            "MarketCurrencyLong": "Litecoin",
            "BaseCurrencyLong": "Bitcoin",
            "MinTradeSize": 0.01,
            "MarketName": "BTC-LTC",
            "IsActive": true,
            "Created": "2014-02-13T00:00:00",
            "Notice": null,
            "IsSponsored": null,
            "LogoUrl": null
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let markets = client.get_markets().await.unwrap();

    assert_eq!(markets[0].market_name, "BTC-LTC");
    assert_eq!(markets[0].created, Some(datetime!(2014-02-13 00:00:00)));
}

#[tokio::test]
async fn test_get_market_summaries_and_sort() {
    let server = MockServer::start().await;
    let summary = |name: &str, base_volume: f64| {
        json!({
            "MarketName": name,
            "High": 0.0135,
            "Low": 0.012,
            "Volume": 3833.97619253,
            "Last": 0.01349998,
            "BaseVolume": base_volume,
            "TimeStamp": "2014-07-09T07:19:30.15",
            "Bid": 0.01271001,
            "Ask": 0.012911,
            "OpenBuyOrders": 45,
            "OpenSellOrders": 45,
            "PrevDay": 0.01229501
        })
    };

    Mock::given(method("GET"))
        .and(path("/public/getmarketsummaries"))
        .respond_with(ok(json!([
            summary("BTC-888", 0.5),
            summary("BTC-LTC", 47.8),
            summary("BTC-A3C", 3.1)
        ])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let mut summaries = client.get_market_summaries().await.unwrap();
    assert_eq!(summaries[0].time_stamp, Some(datetime!(2014-07-09 07:19:30.15)));

    sort_by_base_volume(&mut summaries);
    let names: Vec<_> = summaries.iter().map(|s| s.market_name.as_str()).collect();
    assert_eq!(names, ["BTC-LTC", "BTC-A3C", "BTC-888"]);
}

#[tokio::test]
async fn test_order_book_clamps_depth_and_defaults_to_both() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getorderbook"))
        .and(query_param("market", "BTC-LTC"))
        .and(query_param("type", "both"))
        .and(query_param("depth", "100"))
        .respond_with(ok(json!({
            "buy": [{"Quantity": 12.37, "Rate": 0.02525}],
            "sell": [
                {"Quantity": 32.55412402, "Rate": 0.02540001},
                {"Quantity": 60.0, "Rate": 0.02550000}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book("btc-ltc", "sideways", 500).await.unwrap();

    assert_eq!(book.buy.len(), 1);
    assert_eq!(book.sell.len(), 2);
    assert_eq!(book.sell[1].rate, 0.0255);
}

#[tokio::test]
async fn test_order_book_single_side_fills_one_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getorderbook"))
        .and(query_param("type", "sell"))
        .and(query_param("depth", "1"))
        .respond_with(ok(json!([{"Quantity": 5.0, "Rate": 0.0254}])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client.get_order_book("BTC-LTC", "sell", 0).await.unwrap();

    assert!(book.buy.is_empty());
    assert_eq!(book.sell.len(), 1);
}

#[tokio::test]
async fn test_order_book_side_falls_back_to_buy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getorderbook"))
        .and(query_param("type", "buy"))
        .and(query_param("depth", "20"))
        .respond_with(ok(json!([
            {"Quantity": 1.0, "Rate": 0.0252},
            {"Quantity": 2.0, "Rate": 0.0251}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);
    for category in ["both", "nonsense"] {
        let side = client
            .get_order_book_side("BTC-LTC", category, 20)
            .await
            .unwrap();
        assert_eq!(side.len(), 2);
        assert_eq!(side[0].rate, 0.0252);
    }
}

#[tokio::test]
async fn test_get_market_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkethistory"))
        .and(query_param("market", "BTC-DOGE"))
        .respond_with(ok(json!([{
            "Id": 319435,
            "OrderUuid": "a6ad8a2a-8bb3-4ba8-96b1-b7ab5d4d36cc",
            "TimeStamp": "2014-07-09T03:21:20.08",
            "Quantity": 0.30802438,
            "Price": 0.012634,
            "Total": 0.00389158,
            "FillType": "FILL",
            "OrderType": "BUY"
        }])))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client.get_market_history("btc-doge").await.unwrap();

    assert_eq!(trades[0].fill_type, "FILL");
    assert_eq!(trades[0].time_stamp, Some(datetime!(2014-07-09 03:21:20.08)));
}

#[tokio::test]
async fn test_api_error_is_surfaced_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "INVALID_MARKET",
            "result": null
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker("BTC-NOPE").await.unwrap_err();

    let api_error = err.api_error().expect("api error");
    assert!(api_error.is_invalid_market());
    assert_eq!(api_error.to_string(), "INVALID_MARKET");
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_envelope_on_error_status_is_an_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkets"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "success": false,
            "message": "SERVICE_UNAVAILABLE",
            "result": null
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_markets().await.unwrap_err();

    assert_eq!(err.api_error().map(|e| e.message.as_str()), Some("SERVICE_UNAVAILABLE"));
}

#[tokio::test]
async fn test_non_envelope_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkets"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_markets().await.unwrap_err();

    assert!(matches!(err, BittrexError::InvalidResponse(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_raw_send_keeps_envelope_bodies_on_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkets"))
        .respond_with(ResponseTemplate::new(503).set_body_string(
            r#"{"success":false,"message":"SERVICE_UNAVAILABLE","result":null}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/public/getcurrencies"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let no_params: &[(&str, &str)] = &[];

    let body = client
        .send(Method::GET, "/public/getmarkets", no_params, false)
        .await
        .unwrap();
    assert!(body.contains("SERVICE_UNAVAILABLE"));

    let err = client
        .send(Method::GET, "/public/getcurrencies", no_params, false)
        .await
        .unwrap_err();
    assert!(matches!(err, BittrexError::InvalidResponse(ref m) if m.starts_with("HTTP 502")));
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getticker"))
        .respond_with(ok(json!({"Bid": "0.01", "Ask": 0.0102, "Last": 0.0101})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker("BTC-LTC").await.unwrap_err();

    assert!(err.is_decode());
    assert!(err.api_error().is_none());
}

#[tokio::test]
async fn test_get_ticks_uses_v2_and_cache_buster() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/market/GetTicks"))
        .and(query_param("marketName", "BTC-ETH"))
        .and(query_param("tickInterval", "thirtyMin"))
        .and(query_param("_", "42"))
        .respond_with(ok(json!([{
            "O": 0.0731,
            "H": 0.0735,
            "L": 0.0729,
            "C": 0.0733,
            "V": 182.5,
            "T": "2017-06-01T00:30:00",
            "BV": 13.37
        }])))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_client(&server);

    let candles = client
        .get_ticks("btc-eth", CandleInterval::ThirtyMin)
        .await
        .unwrap();
    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].close, 0.0733);
    assert_eq!(candles[0].time_stamp, Some(datetime!(2017-06-01 00:30:00)));

    let candles = client.get_ticks("BTC-ETH", "thirtyMin").await.unwrap();
    assert_eq!(candles[0].base_volume, 13.37);
}

#[tokio::test]
async fn test_get_ticks_rejects_unknown_interval_without_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticks("BTC-ETH", "weekly").await.unwrap_err();

    assert!(matches!(err, BittrexError::Validation(_)));
}

#[tokio::test]
async fn test_get_distribution() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pub/currency/GetBalanceDistribution"))
        .and(query_param("currencyName", "BTC"))
        .respond_with(ok(json!({
            "Distribution": [{"Balance": 2513.7}, {"Balance": 1200.0}],
            "Balances": 51237.0,
            "AverageBalance": 0.42
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let distribution = client.get_distribution("btc").await.unwrap();

    assert_eq!(distribution.distribution.len(), 2);
    assert_eq!(distribution.distribution[0].balance, 2513.7);
    assert_eq!(distribution.average_balance, 0.42);
}
