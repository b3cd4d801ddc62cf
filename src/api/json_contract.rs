use serde::{Deserialize, Serialize};

use crate::error::{MarketError, MarketResult};

use super::{MarketAnalysis, MarketAnalysisInput};

pub const MARKET_ANALYSIS_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysisJsonContractV1 {
    pub schema_version: u32,
    pub analysis: MarketAnalysis,
}

impl MarketAnalysis {
    pub fn to_json_pretty(&self) -> MarketResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            MarketError::InvalidData(format!("failed to serialize market analysis json: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> MarketResult<String> {
        let payload = MarketAnalysisJsonContractV1 {
            schema_version: MARKET_ANALYSIS_JSON_SCHEMA_V1,
            analysis: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            MarketError::InvalidData(format!(
                "failed to serialize market analysis contract v1: {e}"
            ))
        })
    }

    /// Parses either a bare analysis or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> MarketResult<Self> {
        if let Ok(analysis) = serde_json::from_str::<MarketAnalysis>(input) {
            return Ok(analysis);
        }
        let payload: MarketAnalysisJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            MarketError::InvalidData(format!("failed to parse market analysis json payload: {e}"))
        })?;
        if payload.schema_version != MARKET_ANALYSIS_JSON_SCHEMA_V1 {
            return Err(MarketError::InvalidData(format!(
                "unsupported market analysis schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.analysis)
    }
}

impl MarketAnalysisInput {
    /// Parses the market data block of an upstream analysis response.
    pub fn from_json_str(input: &str) -> MarketResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            MarketError::InvalidData(format!("failed to parse market analysis input: {e}"))
        })
    }
}
