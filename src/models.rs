use serde::{Deserialize, Deserializer, Serialize};
use std::num::ParseFloatError;

/// A credit card product as loaded from the corpus.
///
/// Keys follow the column names of the source spreadsheet so that exported
/// corpora and API clients share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "cardTitle", default, deserialize_with = "cell_text")]
    pub title: String,
    #[serde(rename = "cardImages", default, deserialize_with = "cell_text")]
    pub image_ref: String,
    #[serde(rename = "annualFees", default, deserialize_with = "cell_text")]
    pub annual_fee: String,
    #[serde(rename = "purchaseInterestRate", default, deserialize_with = "cell_text")]
    pub purchase_rate: String,
    #[serde(rename = "cashInterestRate", default, deserialize_with = "cell_text")]
    pub cash_rate: String,
    #[serde(rename = "productValueProp", default, deserialize_with = "cell_text")]
    pub value_prop: String,
    #[serde(rename = "productBenefits", default, deserialize_with = "cell_text")]
    pub benefits: String,
    #[serde(default, deserialize_with = "cell_text")]
    pub bank_name: String,
    #[serde(rename = "cardLink", default, deserialize_with = "cell_text")]
    pub link: String,
}

impl Record {
    /// The four free-text fields that feed every index, in indexing order.
    pub fn indexed_fields(&self) -> [&str; 4] {
        [&self.title, &self.value_prop, &self.benefits, &self.bank_name]
    }

    /// Indexed fields joined by single spaces.
    pub fn searchable_text(&self) -> String {
        self.indexed_fields().join(" ")
    }

    /// Annual fee as a number, ignoring a currency sign (`"$95"` -> `95.0`).
    pub fn annual_fee_amount(&self) -> Result<f64, ParseFloatError> {
        self.annual_fee.replace('$', "").trim().parse()
    }

    /// Purchase rate as a percentage. The corpus stores fractions (`0.1999`).
    pub fn purchase_rate_percent(&self) -> Result<f64, ParseFloatError> {
        self.purchase_rate.trim().parse::<f64>().map(|r| r * 100.0)
    }
}

/// Accepts strings (trimmed), numbers and booleans, since spreadsheet exports
/// emit whatever type the cell held. `null` becomes the empty string.
fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s.trim().to_string(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Query parameters accepted by the card listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardQuery {
    pub bank_name: Option<String>,
    pub min_fee: Option<f64>,
    pub max_fee: Option<f64>,
    pub min_interest: Option<f64>,
    pub max_interest: Option<f64>,
    pub search: Option<String>,
    pub rank: Option<bool>,
}

/// One row of the page-ranking output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCard {
    pub title: String,
    pub bank: String,
    pub url: String,
    pub relevance: f64,
    pub occurrences: usize,
}

/// Page-ranking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSearchResults {
    pub search_term: String,
    pub results: Vec<RankedCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCount {
    pub term: String,
    pub count: u64,
}

/// Body of `POST /search-history`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSearchRequest {
    pub term: Option<String>,
}

/// Sizes of the built indexes, reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    pub records: usize,
    pub vocabulary_size: usize,
    pub terms: usize,
    pub completions: usize,
}
