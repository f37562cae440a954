//! Behavioral tests for the selection cascade: universe filtering, metric
//! thresholds, sampling bounds, construction validation, and the blacklist
//! pass.

use std::sync::Arc;

use pairscout_tests::*;

fn provider_for(
    exchange: Arc<MockExchange>,
    selection_size: u32,
) -> (VolatilityPairList, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::starting_at(BASE_TS));
    let provider = build_provider(
        exchange,
        Arc::new(MockManager::default()),
        clock.clone(),
        selection_size,
        42,
    );
    (provider, clock)
}

#[tokio::test]
async fn volatility_band_excludes_out_of_band_pairs() {
    let exchange = Arc::new(MockExchange::with_candles(vec![
        (pair("BTC/USDT"), rising_bars(8, 0.002)),
        (pair("ETH/USDT"), rising_bars(8, 0.007)),
        (pair("SOL/USDT"), rising_bars(8, 0.02)),
    ]));
    let (provider, _clock) = provider_for(exchange, 10);
    let tickers = tickers(&["BTC/USDT", "ETH/USDT", "SOL/USDT"]);

    let mut selected = provider.generate(Vec::new(), &tickers).await;
    selected.sort_by(|a, b| a.as_str().cmp(b.as_str()));

    assert_eq!(selected, vec![pair("BTC/USDT"), pair("ETH/USDT")]);
}

#[tokio::test]
async fn empty_ticker_snapshot_yields_empty_list() {
    let (provider, _clock) = provider_for(Arc::new(MockExchange::new()), 10);

    let selected = provider.generate(Vec::new(), &TickerMap::new()).await;

    assert!(selected.is_empty());
}

#[tokio::test]
async fn empty_candle_series_yields_empty_list() {
    let exchange = Arc::new(MockExchange::new());
    let (provider, _clock) = provider_for(exchange.clone(), 10);
    let tickers = tickers(&["BTC/USDT", "ETH/USDT"]);

    let selected = provider.generate(Vec::new(), &tickers).await;

    assert!(selected.is_empty());
    assert_eq!(exchange.fetches(), 2);
}

#[tokio::test]
async fn negative_momentum_pairs_are_excluded() {
    let exchange = Arc::new(MockExchange::with_candles(vec![
        (pair("BTC/USDT"), rising_bars(8, 0.002)),
        (pair("ETH/USDT"), falling_bars(8, 0.002)),
    ]));
    let (provider, _clock) = provider_for(exchange, 10);
    let tickers = tickers(&["BTC/USDT", "ETH/USDT"]);

    let selected = provider.generate(Vec::new(), &tickers).await;

    assert_eq!(selected, vec![pair("BTC/USDT")]);
}

#[tokio::test]
async fn non_stake_quote_pairs_are_never_fetched() {
    let exchange = Arc::new(MockExchange::with_candles(vec![
        (pair("BTC/USDT"), rising_bars(8, 0.002)),
        (pair("ETH/BTC"), rising_bars(8, 0.002)),
    ]));
    let (provider, _clock) = provider_for(exchange.clone(), 10);
    let tickers = tickers(&["BTC/USDT", "ETH/BTC"]);

    let selected = provider.generate(Vec::new(), &tickers).await;

    assert_eq!(selected, vec![pair("BTC/USDT")]);
    assert_eq!(exchange.fetches(), 1);
}

#[tokio::test]
async fn fetch_failure_skips_pair_and_continues() {
    let exchange = Arc::new(MockExchange::with_candles(vec![
        (pair("BTC/USDT"), rising_bars(8, 0.002)),
        (pair("ETH/USDT"), rising_bars(8, 0.003)),
    ]));
    exchange.fail_pair(pair("ETH/USDT"));
    let (provider, _clock) = provider_for(exchange, 10);
    let tickers = tickers(&["BTC/USDT", "ETH/USDT"]);

    let selected = provider.generate(Vec::new(), &tickers).await;

    assert_eq!(selected, vec![pair("BTC/USDT")]);
}

#[tokio::test]
async fn output_is_bounded_by_selection_size() {
    let symbols = ["A/USDT", "B/USDT", "C/USDT", "D/USDT", "E/USDT"];
    let exchange = Arc::new(MockExchange::with_candles(
        symbols
            .iter()
            .map(|symbol| (pair(symbol), rising_bars(8, 0.004)))
            .collect(),
    ));
    let (provider, _clock) = provider_for(exchange, 3);
    let tickers = tickers(&symbols);

    let selected = provider.generate(Vec::new(), &tickers).await;

    assert_eq!(selected.len(), 3);
    for selected_pair in &selected {
        assert!(tickers.contains_key(selected_pair));
    }
}

#[tokio::test]
async fn blacklist_pass_always_applies_in_filter() {
    let clock = Arc::new(ManualClock::starting_at(BASE_TS));
    let provider = build_provider(
        Arc::new(MockExchange::new()),
        Arc::new(MockManager::blacklisting(&["DOGE/USDT"])),
        clock,
        10,
        42,
    );
    let tickers = tickers(&["BTC/USDT", "DOGE/USDT"]);

    let filtered = provider
        .filter(vec![pair("BTC/USDT"), pair("DOGE/USDT")], &tickers)
        .await;

    assert_eq!(filtered, vec![pair("BTC/USDT")]);
}

#[test]
fn construction_fails_without_number_assets() {
    let err = VolatilityPairList::new(
        Arc::new(MockExchange::new()),
        Arc::new(MockManager::default()),
        &bot_config(),
        &PairListSettings::default(),
    )
    .err()
    .expect("construction must fail");

    assert!(matches!(err, ConfigError::MissingNumberAssets));
}

#[test]
fn construction_fails_on_invalid_sort_key() {
    let settings = PairListSettings {
        sort_key: Some("invalidKey".to_owned()),
        ..settings_with_selection(10)
    };
    let err = VolatilityPairList::new(
        Arc::new(MockExchange::new()),
        Arc::new(MockManager::default()),
        &bot_config(),
        &settings,
    )
    .err()
    .expect("construction must fail");

    let message = err.to_string();
    assert!(matches!(err, ConfigError::InvalidSortKey { .. }));
    assert!(message.contains("invalidKey"));
    assert!(message.contains("askVolume, bidVolume, quoteVolume"));
}

#[test]
fn construction_fails_without_bulk_ticker_support() {
    let err = VolatilityPairList::new(
        Arc::new(MockExchange::without_bulk_tickers()),
        Arc::new(MockManager::default()),
        &bot_config(),
        &settings_with_selection(10),
    )
    .err()
    .expect("construction must fail");

    assert!(matches!(err, ConfigError::BulkTickersUnsupported));
}
