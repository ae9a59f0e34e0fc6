//! Response decoders for the live reference APIs.

use std::collections::BTreeMap;

use econcheck_core::errors::{EconResult, SourceError};
use econcheck_core::models::ForexRates;
use serde_json::Value;

fn missing(field: &str) -> SourceError {
    SourceError::MissingField {
        field: field.to_string(),
    }
}

fn rate(rates: &Value, currency: &str) -> EconResult<f64> {
    rates
        .get(currency)
        .and_then(Value::as_f64)
        .filter(|r| *r > 0.0)
        .ok_or_else(|| missing(&format!("rates.{currency}")).into())
}

/// Decode a USD-based `{"rates": {"EUR": 0.853, ...}}` document.
/// EUR and GBP quotes are inverted into `EUR/USD` and `GBP/USD`.
pub fn parse_forex(body: &Value, endpoint: &str) -> EconResult<ForexRates> {
    let rates = body.get("rates").ok_or_else(|| SourceError::Decode {
        endpoint: endpoint.to_string(),
        reason: "no rates object".to_string(),
    })?;
    let mut out = BTreeMap::new();
    out.insert("EUR/USD".to_string(), 1.0 / rate(rates, "EUR")?);
    out.insert("GBP/USD".to_string(), 1.0 / rate(rates, "GBP")?);
    out.insert("USD/JPY".to_string(), rate(rates, "JPY")?);
    if let Ok(cad) = rate(rates, "CAD") {
        out.insert("USD/CAD".to_string(), cad);
    }
    Ok(ForexRates { rates: out })
}

/// Values of a FRED `observations` array in response order. Missing
/// observations (`"."`) are skipped.
pub fn parse_fred_observations(body: &Value, endpoint: &str) -> EconResult<Vec<f64>> {
    let observations = body
        .get("observations")
        .and_then(Value::as_array)
        .ok_or_else(|| SourceError::Decode {
            endpoint: endpoint.to_string(),
            reason: "no observations array".to_string(),
        })?;
    Ok(observations
        .iter()
        .filter_map(|o| o.get("value").and_then(Value::as_str))
        .filter_map(|v| v.trim().parse::<f64>().ok())
        .collect())
}

/// Newest value of a newest-first series.
pub fn latest(values: &[f64], series_id: &str) -> EconResult<f64> {
    values
        .first()
        .copied()
        .ok_or_else(|| missing(series_id).into())
}

/// Year-over-year percent change of a newest-first monthly index,
/// rounded to one decimal.
pub fn year_over_year(values: &[f64], series_id: &str) -> EconResult<f64> {
    match (values.first(), values.get(12)) {
        (Some(now), Some(year_ago)) if *year_ago > 0.0 => {
            Ok(((now / year_ago - 1.0) * 1000.0).round() / 10.0)
        }
        _ => Err(missing(series_id).into()),
    }
}
