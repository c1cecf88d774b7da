use serde::{Deserialize, Serialize};

/// Identity of a tradable instrument.
///
/// **Equality and hashing** are based solely on `ticker_symbol`, NOT on
/// `name` or `logo_url`. The ticker is the stable unique key used for
/// list rows and logo-failure tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Human-readable name (e.g., "S&P 500 ETF (Vanguard)")
    pub name: String,

    /// Ticker symbol (e.g., "VOO")
    pub ticker_symbol: String,

    /// Logo image URL. External resource, may fail to load.
    pub logo_url: String,
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.ticker_symbol == other.ticker_symbol
    }
}

impl Eq for Asset {}

impl std::hash::Hash for Asset {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.ticker_symbol.hash(state);
    }
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        ticker_symbol: impl Into<String>,
        logo_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ticker_symbol: ticker_symbol.into(),
            logo_url: logo_url.into(),
        }
    }

    /// Textual logo placeholder: the first two characters of the ticker, uppercased.
    #[must_use]
    pub fn initials(&self) -> String {
        self.ticker_symbol.chars().take(2).collect::<String>().to_uppercase()
    }
}

/// A single position in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingAsset {
    /// The instrument held
    pub asset: Asset,

    /// Current value of the position (integer currency units, >= 0)
    pub asset_amount: f64,

    /// Unrealized profit/loss (integer currency units, signed)
    pub gain_amount: f64,

    /// Profit/loss relative to cost basis, in percent (signed)
    pub gain_ratio: f64,

    /// Share of total portfolio value, in percent
    pub holding_ratio: f64,
}

impl HoldingAsset {
    pub fn new(
        asset: Asset,
        asset_amount: f64,
        gain_amount: f64,
        gain_ratio: f64,
        holding_ratio: f64,
    ) -> Self {
        Self {
            asset,
            asset_amount,
            gain_amount,
            gain_ratio,
            holding_ratio,
        }
    }
}
