use crate::models::{MarketIndex, NewStockQuote};

/// Fixed reference list seeded into the stock store at process start.
///
/// Stands in for an instrument universe from a real market-data vendor;
/// seeding goes through the ordinary upsert path, so restarting the
/// process resets every quote to these values.
pub fn reference_quotes() -> Vec<NewStockQuote> {
    vec![
        NewStockQuote::new("AAPL".to_string(), "Apple Inc.".to_string(), 189.84, 2.47, 1.32, 45_200_000)
            .with_market_cap(2_980_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("GOOGL".to_string(), "Alphabet Inc.".to_string(), 139.23, -1.87, -1.32, 28_700_000)
            .with_market_cap(1_750_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("MSFT".to_string(), "Microsoft Corp.".to_string(), 374.51, 5.23, 1.42, 32_100_000)
            .with_market_cap(2_780_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("AMZN".to_string(), "Amazon.com Inc.".to_string(), 142.18, 0.95, 0.67, 41_800_000)
            .with_market_cap(1_480_000_000_000.0)
            .with_sector("Consumer Discretionary".to_string()),
        NewStockQuote::new("TSLA".to_string(), "Tesla Inc.".to_string(), 248.87, -7.23, -2.82, 52_600_000)
            .with_market_cap(791_000_000_000.0)
            .with_sector("Consumer Discretionary".to_string()),
        NewStockQuote::new("META".to_string(), "Meta Platforms Inc.".to_string(), 318.75, 4.12, 1.31, 19_500_000)
            .with_market_cap(810_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("NVDA".to_string(), "NVIDIA Corp.".to_string(), 875.28, 12.54, 1.45, 35_600_000)
            .with_market_cap(2_160_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("NFLX".to_string(), "Netflix Inc.".to_string(), 421.32, -3.87, -0.91, 8_200_000)
            .with_market_cap(187_000_000_000.0)
            .with_sector("Communication Services".to_string()),
        NewStockQuote::new("AMD".to_string(), "Advanced Micro Devices".to_string(), 137.45, 2.18, 1.61, 42_300_000)
            .with_market_cap(222_000_000_000.0)
            .with_sector("Technology".to_string()),
        NewStockQuote::new("UBER".to_string(), "Uber Technologies".to_string(), 56.23, -1.42, -2.46, 18_700_000)
            .with_market_cap(115_000_000_000.0)
            .with_sector("Technology".to_string()),
    ]
}

/// Mock aggregate index rows for the dashboard header.
pub fn market_indices() -> Vec<MarketIndex> {
    vec![
        MarketIndex {
            name: "S&P 500".to_string(),
            value: 4185.47,
            change: 12.38,
            change_percent: 0.30,
        },
        MarketIndex {
            name: "NASDAQ".to_string(),
            value: 12843.81,
            change: -24.67,
            change_percent: -0.19,
        },
        MarketIndex {
            name: "Dow Jones".to_string(),
            value: 33976.61,
            change: 156.82,
            change_percent: 0.46,
        },
        MarketIndex {
            name: "VIX".to_string(),
            value: 18.45,
            change: 0.73,
            change_percent: 4.12,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quotes_shape() {
        let quotes = reference_quotes();
        assert_eq!(quotes.len(), 10);

        let aapl = quotes.iter().find(|q| q.symbol == "AAPL").unwrap();
        assert_eq!(aapl.price, 189.84);
        assert_eq!(aapl.sector, Some("Technology".to_string()));

        // One quote per symbol in the seed universe
        let mut symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 10);
    }

    #[test]
    fn test_market_indices_shape() {
        let indices = market_indices();
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0].name, "S&P 500");
    }
}
