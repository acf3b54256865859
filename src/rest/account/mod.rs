//! Account endpoints (authentication required).

mod types;

pub use types::*;

use crate::error::BittrexError;
use crate::rest::BittrexRestClient;
use crate::rest::client::NO_PARAMS;
use crate::rest::endpoints::account;
use crate::rest::market::{OptionalMarketRequest, Order, OrderId, UuidRequest};

impl BittrexRestClient {
    /// Get all balances of the account.
    pub async fn get_balances(&self) -> Result<Vec<Balance>, BittrexError> {
        self.private_get(account::GET_BALANCES, NO_PARAMS).await
    }

    /// Get the balance of one currency.
    pub async fn get_balance(&self, currency: &str) -> Result<Balance, BittrexError> {
        self.private_get(account::GET_BALANCE, &CurrencyRequest::new(currency))
            .await
    }

    /// Get the deposit address of a currency, generating one if needed.
    ///
    /// While Bittrex is still generating the address the call fails with
    /// [`BittrexError::Api`] carrying `ADDRESS_GENERATING`.
    pub async fn get_deposit_address(&self, currency: &str) -> Result<Address, BittrexError> {
        self.private_get(account::GET_DEPOSIT_ADDRESS, &CurrencyRequest::new(currency))
            .await
    }

    /// Withdraw `quantity` of `currency` to `address`. Returns the withdrawal uuid.
    pub async fn withdraw(
        &self,
        address: &str,
        currency: &str,
        quantity: f64,
    ) -> Result<String, BittrexError> {
        self.withdraw_with(&WithdrawRequest::new(currency, quantity, address))
            .await
    }

    /// Submit a prepared withdrawal request. Returns the withdrawal uuid.
    pub async fn withdraw_with(&self, request: &WithdrawRequest) -> Result<String, BittrexError> {
        request.validate()?;
        let id: OrderId = self.private_get(account::WITHDRAW, request).await?;
        Ok(id.uuid)
    }

    /// Get the order history, for one market or all when `market` is `None`.
    pub async fn get_order_history(
        &self,
        market: Option<&str>,
    ) -> Result<Vec<Order>, BittrexError> {
        self.private_get(
            account::GET_ORDER_HISTORY,
            &OptionalMarketRequest::new(market),
        )
        .await
    }

    /// Get the withdrawal history, for one currency or all when `currency` is `None`.
    pub async fn get_withdrawal_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Withdrawal>, BittrexError> {
        self.private_get(
            account::GET_WITHDRAWAL_HISTORY,
            &OptionalCurrencyRequest::new(currency),
        )
        .await
    }

    /// Get the deposit history, for one currency or all when `currency` is `None`.
    pub async fn get_deposit_history(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<Deposit>, BittrexError> {
        self.private_get(
            account::GET_DEPOSIT_HISTORY,
            &OptionalCurrencyRequest::new(currency),
        )
        .await
    }

    /// Get the details of a single order.
    pub async fn get_order(&self, order_uuid: &str) -> Result<OrderDetail, BittrexError> {
        self.private_get(account::GET_ORDER, &UuidRequest::new(order_uuid))
            .await
    }
}
