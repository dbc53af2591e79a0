use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, Responder};
use tracing::Instrument;
use validator::Validate;
use crate::models::{
    ErrorResponse, HealthResponse, MentorProfileResponse, RecommendationQuery,
    RecommendationsResponse,
};
use crate::services::{AuthError, MatchService, RecommendationError, TokenVerifier, TOKEN_COOKIE};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchService,
    pub verifier: TokenVerifier,
    pub max_limit: usize,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommendations", web::get().to(recommend_for_session))
        .route("/recommendations/{user_id}", web::get().to(recommend_for_user))
        .route("/mentors/me", web::get().to(mentor_for_session));
}

fn error_body(status: StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

impl error::ResponseError for RecommendationError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecommendationError::MissingIdentity => StatusCode::BAD_REQUEST,
            RecommendationError::MenteeNotFound(_) => StatusCode::NOT_FOUND,
            RecommendationError::EmptyCandidatePool => StatusCode::NOT_FOUND,
            RecommendationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error, message) = match self {
            RecommendationError::MissingIdentity => ("UserId not provided", self.to_string()),
            RecommendationError::MenteeNotFound(_) => ("Mentee not found", self.to_string()),
            RecommendationError::EmptyCandidatePool => ("No mentors available", self.to_string()),
            RecommendationError::Unexpected(_) => {
                ("Internal Server Error", "An internal error occurred".to_string())
            }
        };
        error_body(self.status_code(), error, message)
    }
}

impl error::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AuthError::MissingToken => "No token found",
            AuthError::InvalidToken(_) | AuthError::MissingIdentity => "Invalid token",
        };
        error_body(self.status_code(), error, self.to_string())
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.service.store().health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Mentor profile of the caller identified by the session cookie
///
/// GET /api/v1/mentors/me
async fn mentor_for_session(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = session_user(&state, &req)?;

    match state.service.store().find_mentor(&user_id).await {
        Ok(Some(mentor)) => Ok(HttpResponse::Ok().json(MentorProfileResponse {
            success: true,
            data: mentor,
        })),
        Ok(None) => Ok(error_body(
            StatusCode::NOT_FOUND,
            "Mentor profile not found",
            format!("No mentor profile for user {}", user_id),
        )),
        Err(e) => {
            tracing::error!(user_id = %user_id, "Mentor lookup failed: {}", e);
            Ok(error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred".to_string(),
            ))
        }
    }
}

/// Recommendations for an explicit user
///
/// GET /api/v1/recommendations/{userId}?limit=5
async fn recommend_for_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = path.into_inner();
    respond(&state, Some(user_id), &query).await
}

/// Recommendations for the caller identified by the session cookie
///
/// GET /api/v1/recommendations?limit=5
async fn recommend_for_session(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<RecommendationQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let user_id = session_user(&state, &req)?;
    respond(&state, Some(user_id), &query).await
}

fn session_user(state: &AppState, req: &HttpRequest) -> Result<String, AuthError> {
    let cookie = req.cookie(TOKEN_COOKIE).ok_or(AuthError::MissingToken)?;
    state.verifier.verify(cookie.value()).map_err(|e| {
        tracing::info!("Rejected session token: {}", e);
        e
    })
}

async fn respond(
    state: &AppState,
    user_id: Option<String>,
    query: &RecommendationQuery,
) -> Result<HttpResponse, actix_web::Error> {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for recommendation query: {:?}", errors);
        return Ok(error_body(
            StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        ));
    }

    let limit = query.limit.map(|l| (l as usize).min(state.max_limit));
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id, user_id = ?user_id);

    let result = state
        .service
        .recommend(user_id.as_deref(), limit)
        .instrument(span)
        .await;

    match result {
        Ok(recommendations) => Ok(HttpResponse::Ok().json(RecommendationsResponse { recommendations })),
        Err(RecommendationError::Unexpected(e)) => {
            tracing::error!(%request_id, "Recommendation failed: {}", e);
            Err(RecommendationError::Unexpected(e).into())
        }
        Err(e) => {
            tracing::info!(%request_id, "Recommendation rejected: {}", e);
            Err(e.into())
        }
    }
}
