use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use std::future::{Ready, ready};

use crate::auth::jwt::{self, Claims};
use crate::error::AppError;

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// Any caller presenting a valid bearer token.
pub struct AuthenticatedUser(pub Claims);

/// A caller whose token carries the `admin` role.
pub struct AdminUser(pub Claims);

impl AuthenticatedUser {
    /// Narrow to an admin, answering 403 for any other role.
    pub fn into_admin(self) -> Result<AdminUser, AppError> {
        if self.0.is_admin() {
            Ok(AdminUser(self.0))
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedUser))
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|claims| AuthenticatedUser(claims).into_admin()))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    // 1. Extract the Bearer token from the Authorization header.
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Authorization header must be: Bearer <token>".to_string())
    })?;

    // 2. Get the signing secret from app data.
    let secret = req
        .app_data::<web::Data<JwtSecret>>()
        .ok_or_else(|| AppError::Internal("JWT secret not configured".to_string()))?;

    // 3. Validate the JWT.
    jwt::validate_token(token, &secret.get_ref().0).map_err(|e| {
        tracing::debug!("Rejected bearer token: {e}");
        AppError::Unauthorized(format!("Invalid token: {e}"))
    })
}
