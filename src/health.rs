use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

/// Touches the gallery table so an unmigrated database is reported as not ready.
const READINESS_QUERY: &str = "SELECT 1 FROM media LIMIT 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Unhealthy,
}

#[derive(Serialize)]
struct LivenessResponse {
    status: CheckStatus,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: CheckStatus,
    database: CheckStatus,
}

/// Liveness check. No I/O.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(LivenessResponse {
        status: CheckStatus::Ok,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check. Storage and auth are remote and fail per request, so
/// only the database is checked here.
#[get("/ready")]
pub async fn readiness(db: web::Data<Arc<DatabaseConnection>>) -> impl Responder {
    let database = match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            READINESS_QUERY,
        ))
        .await
    {
        Ok(_) => CheckStatus::Ok,
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            CheckStatus::Unhealthy
        }
    };

    let body = ReadinessResponse {
        status: database,
        database,
    };
    match database {
        CheckStatus::Ok => HttpResponse::Ok().json(body),
        CheckStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(body),
    }
}
