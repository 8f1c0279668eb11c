use crate::order::*;
use crate::params::Params;
use derive_more::Constructor;
use rust_decimal::Decimal;
use std::fmt;

/// Remote operations understood by the marketplace API.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Balance,
    OrdersGet,
    OrdersCreate,
    OrdersSetPrice,
    OrdersSetPriceDecrease,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Balance => "balance",
            Method::OrdersGet => "orders.get",
            Method::OrdersCreate => "orders.create",
            Method::OrdersSetPrice => "orders.set.price",
            Method::OrdersSetPriceDecrease => "orders.set.price.decrease",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order book listing for one algorithm in one region.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Constructor)]
pub struct OrderQuery {
    pub algo: Algorithm,
    pub location: Location,
}

impl From<OrderQuery> for Params {
    fn from(query: OrderQuery) -> Self {
        Params::new()
            .with("algo", query.algo)
            .with("location", query.location)
    }
}

/// A new hashing-power order pointed at the buyer's pool.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OrderCreate {
    pub location: Location,
    pub algo: Algorithm,
    /// BTC to put into the order
    pub amount: Decimal,
    /// BTC per unit of speed per day
    pub price: Price,
    /// speed cap, zero means unlimited
    pub limit: Decimal,
    pub pool_host: String,
    pub pool_port: u16,
    pub pool_user: String,
    pub pool_pass: String,
    /// two-factor code, only for accounts that require it
    pub code: Option<String>,
}

impl From<OrderCreate> for Params {
    fn from(order: OrderCreate) -> Self {
        let mut params = Params::new()
            .with("location", order.location)
            .with("algo", order.algo)
            .with("amount", order.amount)
            .with("price", order.price)
            .with("limit", order.limit)
            .with("pool_host", order.pool_host)
            .with("pool_port", order.pool_port)
            .with("pool_user", order.pool_user)
            .with("pool_pass", order.pool_pass);
        if let Some(code) = order.code {
            params.insert("code", code);
        }
        params
    }
}

/// Price adjustment of an existing order. `price` is only meaningful for
/// increases; the decrease operation steps the price down by the
/// marketplace's fixed amount and rejects an explicit target.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PriceChange {
    pub algo: Algorithm,
    pub location: Location,
    pub order: OrderId,
    pub price: Option<Price>,
}

impl PriceChange {
    pub fn increase(algo: Algorithm, location: Location, order: OrderId, price: Price) -> Self {
        Self {
            algo,
            location,
            order,
            price: Some(price),
        }
    }

    pub fn decrease(algo: Algorithm, location: Location, order: OrderId) -> Self {
        Self {
            algo,
            location,
            order,
            price: None,
        }
    }

    pub fn method(&self) -> Method {
        match self.price {
            Some(_) => Method::OrdersSetPrice,
            None => Method::OrdersSetPriceDecrease,
        }
    }
}

impl From<PriceChange> for Params {
    fn from(change: PriceChange) -> Self {
        let mut params = Params::new()
            .with("algo", change.algo)
            .with("location", change.location)
            .with("order", change.order);
        if let Some(price) = change.price {
            params.insert("price", price);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;
    use rust_decimal::dec;

    fn make_order() -> OrderCreate {
        OrderCreate {
            location: Location::Europe,
            algo: Algorithm(20),
            amount: dec!(0.01),
            price: dec!(0.0521),
            limit: dec!(0),
            pool_host: "daggerhashimoto.eu.example.net".to_string(),
            pool_port: 3353,
            pool_user: "worker.rig1".to_string(),
            pool_pass: "x".to_string(),
            code: None,
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(Method::OrdersGet.as_str(), "orders.get");
        assert_eq!(
            Method::OrdersSetPriceDecrease.to_string(),
            Method::OrdersSetPriceDecrease.as_str()
        );
    }

    #[test]
    fn test_order_create_params() {
        let params = Params::from(make_order());

        assert_eq!(params.len(), 9);
        assert_eq!(params.get("pool_port"), Some(&ParamValue::Integer(3353)));
        assert_eq!(params.get("location"), Some(&ParamValue::Integer(0)));
        assert!(!params.contains_key("code"));

        let with_code = Params::from(OrderCreate {
            code: Some("123456".to_string()),
            ..make_order()
        });
        assert_eq!(with_code.get("code"), Some(&ParamValue::from("123456")));
    }

    #[test]
    fn test_price_change_params() {
        let up = PriceChange::increase(Algorithm(24), Location::UnitedStates, 9_812_345, dec!(0.31));
        let down = PriceChange::decrease(Algorithm(24), Location::UnitedStates, 9_812_345);

        assert_eq!(up.method(), Method::OrdersSetPrice);
        assert_eq!(down.method(), Method::OrdersSetPriceDecrease);

        let down = Params::from(down);
        assert_eq!(down.get("order"), Some(&ParamValue::Integer(9_812_345)));
        assert!(!down.contains_key("price"));
        assert_eq!(Params::from(up).get("price"), Some(&ParamValue::Decimal(dec!(0.31))));
    }
}
