mod json_contract;
mod market_analysis;

pub use json_contract::{MARKET_ANALYSIS_JSON_SCHEMA_V1, MarketAnalysisJsonContractV1};
pub use market_analysis::{MarketAnalysis, MarketAnalysisInput, MarketAnalyzer};
