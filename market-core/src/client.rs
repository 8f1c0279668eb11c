use crate::error::{ClientError, MessageCodecError, Result};
use crate::transport::{HttpTransport, Transport};
use data::{
    Params,
    config::Credentials,
    order::{Algorithm, Location, OrderId, Price},
    request::{Method, OrderQuery, PriceChange},
};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

pub const ENDPOINT_REST: &'static str = "https://api.nicehash.com/api";

const ID_PARAM: &str = "id";
const KEY_PARAM: &str = "key";
const METHOD_PARAM: &str = "method";

/// Query-string client for the marketplace API.
///
/// Holds nothing but immutable credentials and the endpoint, so one instance
/// can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct QueryClient<T = HttpTransport> {
    credentials: Credentials,
    endpoint: Url,
    transport: T,
}

impl QueryClient<HttpTransport> {
    pub fn new(credentials: Credentials, http_client: reqwest::Client) -> Result<Self> {
        Self::with_transport(credentials, ENDPOINT_REST, HttpTransport::new(http_client))
    }
}

impl<T: Transport> QueryClient<T> {
    pub fn with_transport(credentials: Credentials, endpoint: &str, transport: T) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|err| {
            ClientError::ClientInitialization(format!("invalid endpoint '{endpoint}': {err}"))
        })?;
        Ok(Self {
            credentials,
            endpoint,
            transport,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Call `method` with `params` and return the JSON body as sent by the
    /// server.
    pub async fn invoke(&self, method: &str, params: Params, authenticated: bool) -> Result<Value> {
        let params = self.build_params(method, params, authenticated)?;
        debug!(
            method,
            authenticated,
            endpoint = %self.endpoint,
            param_count = params.len(),
            "sending request"
        );

        let body = self.transport.fetch(&self.endpoint, &params).await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    fn build_params(&self, method: &str, mut params: Params, authenticated: bool) -> Result<Params> {
        if method.trim().is_empty() {
            return Err(MessageCodecError::MissingField(METHOD_PARAM).into());
        }
        params.insert(METHOD_PARAM, method);

        if authenticated {
            params.insert(ID_PARAM, self.credentials.id().as_str());
            params.insert(KEY_PARAM, self.credentials.key().as_str());
        } else {
            let dropped_id = params.remove(ID_PARAM).is_some();
            let dropped_key = params.remove(KEY_PARAM).is_some();
            if dropped_id || dropped_key {
                warn!(method, "dropped credential fields from unauthenticated request");
            }
        }
        Ok(params)
    }

    pub async fn balance(&self) -> Result<Value> {
        self.invoke(Method::Balance.as_str(), Params::new(), true).await
    }

    /// Public order book, no credentials attached.
    pub async fn orders(&self, algo: Algorithm, location: Location) -> Result<Value> {
        let params = Params::from(OrderQuery::new(algo, location));
        self.invoke(Method::OrdersGet.as_str(), params, false).await
    }

    pub async fn my_orders(&self, algo: Algorithm, location: Location) -> Result<Value> {
        let params = Params::from(OrderQuery::new(algo, location)).with("my", 1u32);
        self.invoke(Method::OrdersGet.as_str(), params, true).await
    }

    pub async fn create_order(&self, order: impl Into<Params>) -> Result<Value> {
        self.invoke(Method::OrdersCreate.as_str(), order.into(), true).await
    }

    pub async fn order_price_increase(
        &self,
        algo: Algorithm,
        location: Location,
        order: OrderId,
        price: Price,
    ) -> Result<Value> {
        self.change_price(PriceChange::increase(algo, location, order, price)).await
    }

    /// The marketplace lowers the price by its own fixed step; there is no
    /// way to ask for a target price here.
    pub async fn order_price_decrease(
        &self,
        algo: Algorithm,
        location: Location,
        order: OrderId,
    ) -> Result<Value> {
        self.change_price(PriceChange::decrease(algo, location, order)).await
    }

    async fn change_price(&self, change: PriceChange) -> Result<Value> {
        let method = change.method();
        self.invoke(method.as_str(), change.into(), true).await
    }
}
