use crate::client::DoraClient;
use crate::error::SdkError;
use serde_json::Value;

pub struct ExchangeInfo<'a> {
    pub(crate) client: &'a DoraClient,
}

impl<'a> ExchangeInfo<'a> {
    /// Symbols, filters and rate limits exactly as the backend forwards them.
    pub async fn get(&self) -> Result<Value, SdkError> {
        self.client
            .http
            .get_exchange_info()
            .await
            .map_err(|e| e.context("Failed to fetch exchange info"))
    }

    /// Names of the symbols listed in the payload, in payload order. Empty
    /// when the payload has no `symbols` array.
    pub async fn symbols(&self) -> Result<Vec<String>, SdkError> {
        let info = self.get().await?;
        Ok(symbol_names(&info))
    }
}

fn symbol_names(info: &Value) -> Vec<String> {
    info.get("symbols")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|s| s.get("symbol").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
