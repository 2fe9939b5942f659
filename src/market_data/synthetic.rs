use crate::models::{NewStockQuote, StockQuote};
use rand::Rng;

/// Synthetic quote generator standing in for a live market-data feed.
///
/// Each refresh steps every quote by a uniform random delta and fabricates
/// fresh change/volume figures. The walk has no historical basis, no
/// correlation across symbols, and no floor: prices can drift negative
/// over repeated refreshes. Results feed the same upsert path a real
/// vendor integration would use.
#[derive(Debug, Default)]
pub struct SyntheticQuoteFeed;

impl SyntheticQuoteFeed {
    pub fn new() -> Self {
        Self
    }

    /// Next randomized snapshot for every quote in `current`.
    ///
    /// Symbol, name, market cap and sector carry over unchanged.
    pub fn next_quotes(&self, current: &[StockQuote]) -> Vec<NewStockQuote> {
        let mut rng = rand::rng();

        current
            .iter()
            .map(|quote| NewStockQuote {
                symbol: quote.symbol.clone(),
                name: quote.name.clone(),
                price: quote.price + rng.random_range(-5.0..5.0),
                change: rng.random_range(-2.5..2.5),
                change_percent: rng.random_range(-1.5..1.5),
                volume: rng.random_range(0..50_000_000) + 10_000_000,
                market_cap: quote.market_cap,
                sector: quote.sector.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn stored(symbol: &str, price: f64) -> StockQuote {
        StockQuote {
            id: Uuid::new_v4(),
            symbol: symbol.to_string(),
            name: "Test Co.".to_string(),
            price,
            change: 0.0,
            change_percent: 0.0,
            volume: 1_000_000,
            market_cap: Some(1_000_000_000.0),
            sector: Some("Technology".to_string()),
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_next_quotes_preserves_identity_fields() {
        let feed = SyntheticQuoteFeed::new();
        let current = vec![stored("AAPL", 189.84), stored("MSFT", 374.51)];

        let next = feed.next_quotes(&current);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].symbol, "AAPL");
        assert_eq!(next[1].symbol, "MSFT");
        assert_eq!(next[0].name, "Test Co.");
        assert_eq!(next[0].market_cap, Some(1_000_000_000.0));
        assert_eq!(next[0].sector, Some("Technology".to_string()));
    }

    #[test]
    fn test_next_quotes_stay_within_step_bounds() {
        let feed = SyntheticQuoteFeed::new();
        let current = vec![stored("AAPL", 189.84)];

        for _ in 0..100 {
            let next = &feed.next_quotes(&current)[0];

            assert!((next.price - 189.84).abs() <= 5.0);
            assert!(next.change.abs() <= 2.5);
            assert!(next.change_percent.abs() <= 1.5);
            assert!(next.volume >= 10_000_000);
            assert!(next.volume < 60_000_000);
        }
    }

    #[test]
    fn test_next_quotes_on_empty_input() {
        let feed = SyntheticQuoteFeed::new();
        assert!(feed.next_quotes(&[]).is_empty());
    }
}
