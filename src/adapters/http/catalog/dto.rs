//! Bodies for the informational endpoints.

use serde::{Deserialize, Serialize};

use crate::ports::BusinessMetrics;

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBanner {
    pub message: String,
    pub status: String,
    pub version: String,
    pub business_model: String,
    pub target_markets: Vec<String>,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    pub model_available: bool,
    pub model: String,
}

/// Response of `GET /api/business-metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetricsResponse {
    #[serde(flatten)]
    pub metrics: BusinessMetrics,
    pub traction: Traction,
    pub economics: Economics,
    pub market: Market,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traction {
    pub scenes_generated: u64,
    pub api_calls: u64,
    pub growth_rate: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Economics {
    pub cac: String,
    pub lifetime_value: String,
    pub gross_margin: String,
    pub arpu: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub tam: String,
    pub sam: String,
    pub som: String,
}

impl BusinessMetricsResponse {
    /// Live counters plus the fixed economics and market figures.
    pub fn from_metrics(metrics: BusinessMetrics) -> Self {
        Self {
            traction: Traction {
                scenes_generated: metrics.total_scenes_generated,
                api_calls: metrics.api_usage.total(),
                growth_rate: "15% week-over-week".to_string(),
            },
            economics: Economics {
                cac: "$0.50".to_string(),
                lifetime_value: "$2450".to_string(),
                gross_margin: "85%".to_string(),
                arpu: "$125/month".to_string(),
            },
            market: Market {
                tam: "$12B".to_string(),
                sam: "$3.2B".to_string(),
                som: "$84M".to_string(),
            },
            metrics,
        }
    }
}

/// One entry of `GET /api/examples`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExampleStory {
    pub title: String,
    pub text: String,
    pub industry: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ApiUsage;

    #[test]
    fn metrics_response_merges_live_and_static_sections() {
        let metrics = BusinessMetrics::from_counters(
            2,
            ApiUsage {
                analyze: 3,
                generate_3d: 2,
            },
            900.0,
        );

        let json = serde_json::to_value(BusinessMetricsResponse::from_metrics(metrics)).unwrap();

        assert_eq!(json["totalScenesGenerated"], 2);
        assert_eq!(json["apiUsage"]["generate3d"], 2);
        assert_eq!(json["costSavings"]["averagePerScene"], 450.0);
        assert_eq!(json["traction"]["apiCalls"], 5);
        assert_eq!(json["market"]["tam"], "$12B");
    }
}
