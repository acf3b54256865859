//! Bittrex REST API endpoint constants.

use crate::types::{BuySell, OrderType};

/// Base URL for the v1.1 REST API.
pub const BITTREX_BASE_URL: &str = "https://bittrex.com/api/v1.1";

/// Base URL for the v2.0 public API (distribution and candles).
pub const BITTREX_V2_BASE_URL: &str = "https://bittrex.com/Api/v2.0";

/// Public endpoints (no authentication required).
pub mod public {
    /// List supported currencies.
    pub const GET_CURRENCIES: &str = "/public/getcurrencies";
    /// List open and available markets.
    pub const GET_MARKETS: &str = "/public/getmarkets";
    /// Current ticker for a market.
    pub const GET_TICKER: &str = "/public/getticker";
    /// 24 hour summaries of all markets.
    pub const GET_MARKET_SUMMARIES: &str = "/public/getmarketsummaries";
    /// 24 hour summary of one market.
    pub const GET_MARKET_SUMMARY: &str = "/public/getmarketsummary";
    /// Order book of a market.
    pub const GET_ORDER_BOOK: &str = "/public/getorderbook";
    /// Latest trades of a market.
    pub const GET_MARKET_HISTORY: &str = "/public/getmarkethistory";
}

/// Trading endpoints (authentication required).
pub mod market {
    /// Place a limit buy order.
    pub const BUY_LIMIT: &str = "/market/buylimit";
    /// Place a market buy order.
    pub const BUY_MARKET: &str = "/market/buymarket";
    /// Place a limit sell order.
    pub const SELL_LIMIT: &str = "/market/selllimit";
    /// Place a market sell order.
    pub const SELL_MARKET: &str = "/market/sellmarket";
    /// Cancel an order.
    pub const CANCEL: &str = "/market/cancel";
    /// List open orders.
    pub const GET_OPEN_ORDERS: &str = "/market/getopenorders";
}

/// Account endpoints (authentication required).
pub mod account {
    /// All balances.
    pub const GET_BALANCES: &str = "/account/getbalances";
    /// Balance of one currency.
    pub const GET_BALANCE: &str = "/account/getbalance";
    /// Get or generate a deposit address.
    pub const GET_DEPOSIT_ADDRESS: &str = "/account/getdepositaddress";
    /// Withdraw funds.
    pub const WITHDRAW: &str = "/account/withdraw";
    /// Single order details.
    pub const GET_ORDER: &str = "/account/getorder";
    /// Order history.
    pub const GET_ORDER_HISTORY: &str = "/account/getorderhistory";
    /// Withdrawal history.
    pub const GET_WITHDRAWAL_HISTORY: &str = "/account/getwithdrawalhistory";
    /// Deposit history.
    pub const GET_DEPOSIT_HISTORY: &str = "/account/getdeposithistory";
}

/// v2.0 public endpoints, relative to [`BITTREX_V2_BASE_URL`].
pub mod v2 {
    /// Balance distribution of a currency.
    pub const GET_BALANCE_DISTRIBUTION: &str = "/pub/currency/GetBalanceDistribution";
    /// Candles of a market.
    pub const GET_TICKS: &str = "/pub/market/GetTicks";
}

/// Path of the order placement endpoint for a side and order type.
pub fn order_endpoint(side: BuySell, order_type: OrderType) -> &'static str {
    match (side, order_type) {
        (BuySell::Buy, OrderType::Limit) => market::BUY_LIMIT,
        (BuySell::Buy, OrderType::Market) => market::BUY_MARKET,
        (BuySell::Sell, OrderType::Limit) => market::SELL_LIMIT,
        (BuySell::Sell, OrderType::Market) => market::SELL_MARKET,
    }
}
