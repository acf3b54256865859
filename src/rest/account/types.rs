//! Types for account endpoints.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::error::BittrexError;
use crate::types::serde_helpers::fixed8;
use crate::types::timestamp::wire_timestamp;

/// Request parameters for endpoints scoped to one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRequest {
    /// Currency code, uppercase.
    pub currency: String,
}

impl CurrencyRequest {
    /// Create a request, uppercasing the currency.
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_uppercase(),
        }
    }
}

/// Request parameters for histories optionally filtered by currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalCurrencyRequest {
    /// Currency code, uppercase. `None` lists every currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl OptionalCurrencyRequest {
    /// Create a request, uppercasing the currency.
    pub fn new(currency: Option<&str>) -> Self {
        Self {
            currency: currency.map(str::to_uppercase),
        }
    }
}

/// Request parameters for a withdrawal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    /// Currency code, uppercase.
    pub currency: String,
    /// Amount to withdraw.
    #[serde(serialize_with = "fixed8::serialize")]
    pub quantity: f64,
    /// Destination address.
    pub address: String,
    /// Memo / payment id for coins that need one.
    #[serde(rename = "paymentid", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

impl WithdrawRequest {
    /// Create a withdrawal request, uppercasing the currency.
    pub fn new(currency: &str, quantity: f64, address: impl Into<String>) -> Self {
        Self {
            currency: currency.to_uppercase(),
            quantity,
            address: address.into(),
            payment_id: None,
        }
    }

    /// Attach a memo / payment id.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    /// Reject requests Bittrex could never accept.
    pub fn validate(&self) -> Result<(), BittrexError> {
        if self.currency.is_empty() {
            return Err(BittrexError::Validation("currency must not be empty".into()));
        }
        if self.address.trim().is_empty() {
            return Err(BittrexError::Validation("address must not be empty".into()));
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(BittrexError::Validation(format!(
                "quantity must be a positive number, got {}",
                self.quantity
            )));
        }
        Ok(())
    }
}

/// Balance of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    /// Currency code.
    pub currency: String,
    /// Total balance.
    pub balance: f64,
    /// Balance not reserved by open orders.
    pub available: f64,
    /// Incoming deposits not yet credited.
    pub pending: f64,
    /// Deposit address, if one was generated.
    pub crypto_address: Option<String>,
    /// Whether an address was requested.
    pub requested: Option<bool>,
    /// Balance identifier.
    pub uuid: Option<String>,
}

/// Deposit address of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Currency code.
    pub currency: String,
    /// Deposit address.
    pub address: String,
}

/// A deposit from the deposit history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deposit {
    /// Deposit identifier.
    pub id: i64,
    /// Amount deposited.
    pub amount: f64,
    /// Currency code.
    pub currency: String,
    /// Blockchain confirmations so far.
    pub confirmations: u32,
    /// Last status change.
    #[serde(with = "wire_timestamp")]
    pub last_updated: Option<PrimitiveDateTime>,
    /// Transaction id.
    pub tx_id: String,
    /// Receiving address.
    pub crypto_address: String,
}

/// A withdrawal from the withdrawal history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Withdrawal {
    /// Payment identifier.
    pub payment_uuid: String,
    /// Currency code.
    pub currency: String,
    /// Amount withdrawn.
    pub amount: f64,
    /// Destination address.
    pub address: String,
    /// Request time.
    #[serde(with = "wire_timestamp")]
    pub opened: Option<PrimitiveDateTime>,
    /// Whether the withdrawal was authorized.
    pub authorized: bool,
    /// Whether payment is pending.
    pub pending_payment: bool,
    /// Network fee.
    pub tx_cost: f64,
    /// Transaction id, absent until broadcast.
    pub tx_id: Option<String>,
    /// Whether the withdrawal was canceled.
    pub canceled: bool,
}

/// Full details of a single order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDetail {
    /// Owning account.
    pub account_id: Option<String>,
    /// Order identifier.
    pub order_uuid: String,
    /// Market name.
    pub exchange: String,
    /// e.g. `LIMIT_BUY`.
    #[serde(rename = "Type")]
    pub order_type: String,
    /// Ordered quantity.
    pub quantity: f64,
    /// Quantity not yet filled.
    pub quantity_remaining: f64,
    /// Limit rate.
    pub limit: f64,
    /// Funds reserved.
    pub reserved: f64,
    /// Reserved funds left.
    pub reserve_remaining: f64,
    /// Commission reserved.
    pub commission_reserved: f64,
    /// Reserved commission left.
    pub commission_reserve_remaining: f64,
    /// Commission paid.
    pub commission_paid: f64,
    /// Total price paid or received.
    pub price: f64,
    /// Average price per unit, if filled.
    pub price_per_unit: Option<f64>,
    /// Open time.
    #[serde(with = "wire_timestamp")]
    pub opened: Option<PrimitiveDateTime>,
    /// Close time, absent while open.
    #[serde(with = "wire_timestamp")]
    pub closed: Option<PrimitiveDateTime>,
    /// Whether the order is still open.
    pub is_open: bool,
    /// Opaque order sentinel.
    pub sentinel: Option<String>,
    /// Whether a cancel was requested.
    pub cancel_initiated: bool,
    /// Immediate-or-cancel flag.
    pub immediate_or_cancel: bool,
    /// Conditional order flag.
    pub is_conditional: bool,
    /// Condition, e.g. `NONE`.
    pub condition: Option<String>,
    /// Condition target.
    pub condition_target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn test_withdraw_query() {
        let request = WithdrawRequest::new("btc", 0.25, "1BoatSLRHtKNngkdXEeobR76b53LETtpyT");
        request.validate().unwrap();
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "currency=BTC&quantity=0.25000000&address=1BoatSLRHtKNngkdXEeobR76b53LETtpyT"
        );

        let request = WithdrawRequest::new("xrp", 20.0, "rAddr").payment_id("1234");
        assert!(
            serde_urlencoded::to_string(&request)
                .unwrap()
                .ends_with("&paymentid=1234")
        );
    }

    #[test]
    fn test_withdraw_validate() {
        assert!(WithdrawRequest::new("BTC", 1.0, " ").validate().is_err());
        assert!(WithdrawRequest::new("BTC", -1.0, "addr").validate().is_err());
        assert!(WithdrawRequest::new("", 1.0, "addr").validate().is_err());
    }

    #[test]
    fn test_balance_decode() {
        let balance: Balance = serde_json::from_value(json!({
            "Currency": "DOGE",
            "Balance": 4.21549076,
            "Available": 4.21549076,
            "Pending": 0.0,
            "CryptoAddress": "DLxcEt3AatMyr2NTatzjsfHNoB9NT62HiF",
            "Requested": false,
            "Uuid": null
        }))
        .unwrap();
        assert_eq!(balance.currency, "DOGE");
        assert_eq!(balance.balance, 4.21549076);
        assert!(balance.uuid.is_none());
    }

    #[test]
    fn test_deposit_rejects_fractional_id() {
        let err = serde_json::from_value::<Deposit>(json!({
            "Id": 1.5,
            "Amount": 0.1,
            "Currency": "BTC",
            "Confirmations": 3,
            "LastUpdated": "2014-02-13T07:38:53.883",
            "TxId": "e26d3b33",
            "CryptoAddress": "15VyEAT4uf7ycrNWZVb1eGMzrs21BH95Va"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"));
    }

    fn assert_survives<T>(value: &T)
    where
        T: Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let wire = serde_json::to_string(value).unwrap();
        assert_eq!(&serde_json::from_str::<T>(&wire).unwrap(), value, "{wire}");
    }

    #[test]
    fn test_balance_survives_encode_decode() {
        let mut balance = Balance {
            currency: "BTC".into(),
            balance: 0.009288670983029261,
            available: 0.1 + 0.2,
            pending: 1.0 / 3.0,
            crypto_address: Some("1Mrcdr6715hjda34pdXuLqXcju6qgwHA31".into()),
            requested: Some(true),
            uuid: Some("47ae3a0d-98b4-4a9e-9f71-b6e8a9e4d1f2".into()),
        };
        assert_survives(&balance);
        balance.crypto_address = None;
        balance.requested = None;
        balance.uuid = None;
        assert_survives(&balance);
    }

    #[test]
    fn test_address_survives_encode_decode() {
        assert_survives(&Address {
            currency: "VTC".into(),
            address: "Vy5SKeKGXUHKS2WVpJ76HYuKAu3URastUo".into(),
        });
    }

    #[test]
    fn test_deposit_survives_encode_decode() {
        let mut deposit = Deposit {
            id: 1_234_567_890_123,
            amount: 0.00156121 / 3.0,
            currency: "BTC".into(),
            confirmations: 2,
            last_updated: Some(datetime!(2014-02-13 07:38:53.883)),
            tx_id: "e26d3b33fcfc2cb0c74d0938034956ea590339170bf4102f080eab4b85da9bde".into(),
            crypto_address: "15VyEAT4uf7ycrNWZVb1eGMzrs21BH95Va".into(),
        };
        assert_survives(&deposit);
        deposit.last_updated = None;
        assert_survives(&deposit);
    }

    #[test]
    fn test_withdrawal_survives_encode_decode() {
        let mut withdrawal = Withdrawal {
            payment_uuid: "b52c7a5c-90c6-4c6e-835c-e16df12708b1".into(),
            currency: "BTC".into(),
            amount: 17.0 / 3.0,
            address: "1DeaaFBdbB5nrHj87x3NHS4onvw1GPNyAu".into(),
            opened: Some(datetime!(2014-07-09 04:24:47.217)),
            authorized: true,
            pending_payment: false,
            tx_cost: 0.0002 * 1.1,
            tx_id: Some("b4a575c2a71c7e56d02ab8e26bb1ef0a2f6cf2094f6ca2116476a569c1e84f6e".into()),
            canceled: false,
        };
        assert_survives(&withdrawal);
        withdrawal.tx_id = None;
        withdrawal.opened = None;
        assert_survives(&withdrawal);
    }

    #[test]
    fn test_order_detail_survives_encode_decode() {
        let detail = OrderDetail {
            account_id: Some("a0f2b8c1".into()),
            order_uuid: "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1".into(),
            exchange: "BTC-SHLD".into(),
            order_type: "LIMIT_SELL".into(),
            quantity: 1000.0 / 7.0,
            quantity_remaining: 0.0,
            limit: 0.00000001 * 3.0,
            reserved: 0.00001 / 3.0,
            reserve_remaining: 0.1 + 0.2,
            commission_reserved: 0.00000002 / 7.0,
            commission_reserve_remaining: 0.0,
            commission_paid: 0.009288670983029261,
            price: 2.0_f64.sqrt(),
            price_per_unit: Some(1.0 / 3.0),
            opened: Some(datetime!(2014-07-13 07:45:46.27)),
            closed: Some(datetime!(2014-07-13 07:45:47.000000001)),
            is_open: false,
            sentinel: None,
            cancel_initiated: false,
            immediate_or_cancel: true,
            is_conditional: true,
            condition: Some("LESS_THAN".into()),
            condition_target: Some("0.00000001".into()),
        };
        assert_survives(&detail);
    }

    #[test]
    fn test_order_detail_decode_open_order() {
        let detail: OrderDetail = serde_json::from_value(json!({
            "AccountId": null,
            "OrderUuid": "0cb4c4e4-bdc7-4e13-8c13-430e587d2cc1",
            "Exchange": "BTC-SHLD",
            "Type": "LIMIT_BUY",
            "Quantity": 1000.0,
            "QuantityRemaining": 1000.0,
            "Limit": 0.00000001,
            "Reserved": 0.00001,
            "ReserveRemaining": 0.00001,
            "CommissionReserved": 0.00000002,
            "CommissionReserveRemaining": 0.00000002,
            "CommissionPaid": 0.0,
            "Price": 0.0,
            "PricePerUnit": null,
            "Opened": "2014-07-13T07:45:46.27",
            "Closed": null,
            "IsOpen": true,
            "Sentinel": "6c454604-22e2-4fb4-892e-179eede20972",
            "CancelInitiated": false,
            "ImmediateOrCancel": false,
            "IsConditional": false,
            "Condition": "NONE",
            "ConditionTarget": null
        }))
        .unwrap();
        assert_eq!(detail.order_type, "LIMIT_BUY");
        assert_eq!(detail.opened, Some(datetime!(2014-07-13 07:45:46.27)));
        assert_eq!(detail.closed, None);
        assert!(detail.is_open);

        let wire = serde_json::to_value(&detail).unwrap();
        assert_eq!(wire["Closed"], "");
        assert_eq!(wire["Type"], "LIMIT_BUY");
        assert_eq!(serde_json::from_value::<OrderDetail>(wire).unwrap(), detail);
    }
}
