use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::auth::application::{
    domain::entities::Session,
    ports::outgoing::{TokenError, TokenVerifier},
};
use crate::shared::api::ApiResponse;

/// Any caller with a valid, unexpired access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub session: Session,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn resolve_session(req: &HttpRequest) -> Result<Session, ActixError> {
    let verifier = req
        .app_data::<web::Data<Arc<dyn TokenVerifier>>>()
        .ok_or_else(|| {
            tracing::error!("Token verifier is not registered as app data");
            create_api_error(ApiResponse::internal_error())
        })?;

    let token = extract_token_from_header(req).ok_or_else(|| {
        create_api_error(ApiResponse::unauthorized(
            "MISSING_AUTH_HEADER",
            "Missing or invalid authorization header",
        ))
    })?;

    match verifier.verify(&token) {
        Ok(session) if session.is_active() => Ok(session),
        Ok(_) | Err(TokenError::Expired) => Err(create_api_error(ApiResponse::unauthorized(
            "TOKEN_EXPIRED",
            "Session has expired, please sign in again",
        ))),
        Err(_) => Err(create_api_error(ApiResponse::unauthorized(
            "INVALID_TOKEN",
            "Invalid or expired token",
        ))),
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve_session(req).map(|session| AuthenticatedUser { session }))
    }
}

/// An authenticated caller holding the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub session: Session,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = match resolve_session(req) {
            Ok(session) => session,
            Err(e) => return ready(Err(e)),
        };

        if !session.is_admin() {
            tracing::warn!(user_id = %session.user_id, "Admin route denied");
            return ready(Err(create_api_error(ApiResponse::forbidden(
                "ADMIN_REQUIRED",
                "Admin privileges required",
            ))));
        }

        ready(Ok(AdminUser { session }))
    }
}
