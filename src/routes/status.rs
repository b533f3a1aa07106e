use axum::Json;

use crate::message::{HealthStatus, ServiceStatus};

pub async fn home_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "Chatbot service is running".to_string(),
        message: "Welcome to Green Pulse AI".to_string(),
    })
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "chatbot".to_string(),
    })
}
