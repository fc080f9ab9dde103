use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::PrimitiveValue;
use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Time-scale values are epoch milliseconds.
#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

impl PrimitiveValue {
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::number(datetime_to_unix_millis(time))
    }

    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::number(decimal_to_f64(value, "value")?))
    }
}

/// JSON cell for a timestamp, so time series can be authored from `chrono` values.
#[must_use]
pub fn datetime_cell(time: DateTime<Utc>) -> serde_json::Value {
    serde_json::Value::from(time.timestamp_millis())
}

/// JSON cell for a decimal amount.
pub fn decimal_cell(value: Decimal) -> ChartResult<serde_json::Value> {
    let number = decimal_to_f64(value, "value")?;
    serde_json::Number::from_f64(number)
        .map(serde_json::Value::Number)
        .ok_or_else(|| ChartError::InvalidData("decimal value must be finite".to_owned()))
}
