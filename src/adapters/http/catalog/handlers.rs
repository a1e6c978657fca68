//! HTTP handlers for the service banner, health and catalog endpoints.

use axum::extract::{Json, State};
use serde_json::{json, Value};

use super::super::state::AppState;
use super::dto::{BusinessMetricsResponse, ExampleStory, HealthResponse, ServiceBanner};

/// GET /
pub async fn service_banner() -> Json<ServiceBanner> {
    Json(ServiceBanner {
        message: "LioraWave 3D Generation API".to_string(),
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        business_model: "API-first 3D content automation".to_string(),
        target_markets: ["gaming", "education", "architecture", "ecommerce"]
            .map(String::from)
            .to_vec(),
    })
}

/// GET /api/health
///
/// Healthy even when the model is down; analyses then come from the fallback.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.health_handler().handle().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "LioraWave AI API".to_string(),
        timestamp: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
        model_available: status.model_available,
        model: status.provider.model,
    })
}

/// GET /api/business-metrics
pub async fn business_metrics(State(state): State<AppState>) -> Json<BusinessMetricsResponse> {
    let metrics = state.business_metrics_handler().handle().await;
    Json(BusinessMetricsResponse::from_metrics(metrics))
}

/// GET /api/use-cases
pub async fn use_cases() -> Json<Value> {
    Json(json!({
        "gaming": {
            "valueProp": "Automate game asset creation",
            "costSavings": "80% reduction in 3D modeling costs",
            "timeSavings": "From weeks to minutes",
            "targetCustomers": "Indie studios, AAA outsourcing"
        },
        "education": {
            "valueProp": "Interactive learning materials",
            "costSavings": "90% vs custom educational content",
            "timeSavings": "Instant 3D diagrams from textbooks",
            "targetCustomers": "EdTech, publishers, schools"
        },
        "ecommerce": {
            "valueProp": "3D product visualization at scale",
            "costSavings": "95% vs manual 3D product shots",
            "timeSavings": "Hours instead of weeks",
            "targetCustomers": "E-commerce platforms, brands"
        },
        "architecture": {
            "valueProp": "Instant architectural visualization",
            "costSavings": "85% vs traditional rendering",
            "timeSavings": "Real-time instead of days",
            "targetCustomers": "Architects, real estate, construction"
        }
    }))
}

/// GET /api/pricing
pub async fn pricing() -> Json<Value> {
    Json(json!({
        "tiers": {
            "starter": {
                "price": "$0.10 per scene",
                "includes": ["Basic analysis", "Preview quality", "100 scenes/month"],
                "target": "Developers, indie creators"
            },
            "pro": {
                "price": "$0.25 per scene",
                "includes": ["Advanced analysis", "Standard quality", "API access", "Custom styles"],
                "target": "Small studios, agencies"
            },
            "enterprise": {
                "price": "Custom",
                "includes": ["Premium quality", "Dedicated support", "White-label", "Volume discounts"],
                "target": "Large studios, platforms"
            }
        },
        "costComparison": {
            "traditional3dModeling": "$2000-$10000 per scene",
            "liorawave": "$0.10-$2.00 per scene",
            "savings": "99% cost reduction"
        }
    }))
}

/// GET /api/examples
pub async fn examples() -> Json<Vec<ExampleStory>> {
    let stories = [
        (
            "The Brave Knight",
            "The brave knight entered the dark forest, his sword gleaming in the slivers of moonlight. A dragon watched from the ancient castle ruins, its eyes glowing like embers in the night.",
            "gaming",
        ),
        (
            "The Wizard's Tower",
            "An old wizard climbed the spiral staircase of his ancient tower, carrying a glowing crystal that illuminated dusty scrolls and magical artifacts lining the stone walls.",
            "gaming",
        ),
        (
            "Science Classroom",
            "Students gathered around a detailed model of the solar system, with planets orbiting a central sun. Educational diagrams showed gravitational forces and orbital mechanics.",
            "education",
        ),
        (
            "Modern Architecture",
            "A sleek modern building with glass facades and sustainable design features. The interior features open spaces, natural lighting, and minimalist furniture.",
            "architecture",
        ),
    ];

    Json(
        stories
            .into_iter()
            .map(|(title, text, industry)| ExampleStory {
                title: title.to_string(),
                text: text.to_string(),
                industry: industry.to_string(),
            })
            .collect(),
    )
}
