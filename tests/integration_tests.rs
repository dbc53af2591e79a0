// Integration tests for Mentor Match

use actix_web::{cookie::Cookie, http::StatusCode, test, web, App};
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use mentor_match::core::Matcher;
use mentor_match::models::{
    MenteeProfile, MentorProfile, MentorProfileResponse, RecommendationsResponse,
};
use mentor_match::routes::{self, recommendations::AppState};
use mentor_match::services::{Claims, MatchService, ProfileStore, StoreError, TokenVerifier};
use std::sync::Arc;

const SECRET: &str = "integration-secret";

struct MemoryStore {
    mentees: Vec<MenteeProfile>,
    mentors: Vec<MentorProfile>,
    fail: bool,
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_mentee(&self, user_id: &str) -> Result<Option<MenteeProfile>, StoreError> {
        if self.fail {
            return Err(StoreError::MalformedRecord("broken mentee row".to_string()));
        }
        Ok(self.mentees.iter().find(|m| m.user_id == user_id).cloned())
    }

    async fn find_mentor(&self, user_id: &str) -> Result<Option<MentorProfile>, StoreError> {
        if self.fail {
            return Err(StoreError::MalformedRecord("broken mentor row".to_string()));
        }
        Ok(self.mentors.iter().find(|m| m.user_id == user_id).cloned())
    }

    async fn list_mentors(&self) -> Result<Vec<MentorProfile>, StoreError> {
        Ok(self.mentors.clone())
    }
}

fn create_mentor(id: &str, goals: &str) -> MentorProfile {
    MentorProfile {
        user_id: id.to_string(),
        full_name: format!("Mentor {}", id),
        email: Some(format!("{}@example.com", id)),
        mentoring_goals: Some(goals.to_string()),
        ..Default::default()
    }
}

fn create_store(mentors: Vec<MentorProfile>) -> MemoryStore {
    MemoryStore {
        mentees: vec![MenteeProfile {
            user_id: "mentee-1".to_string(),
            career_goals: Some("machine learning research".to_string()),
            ..Default::default()
        }],
        mentors,
        fail: false,
    }
}

fn scenario_mentors() -> Vec<MentorProfile> {
    vec![
        create_mentor("1", "machine learning engineer"),
        create_mentor("2", "web design"),
        create_mentor("3", "machine learning research scientist"),
    ]
}

fn app_state(store: MemoryStore) -> AppState {
    AppState {
        service: MatchService::new(Arc::new(store), Matcher::default()),
        verifier: TokenVerifier::new(SECRET),
        max_limit: 50,
    }
}

fn sign_token(id: &str) -> String {
    let claims = Claims {
        id: Some(id.to_string()),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        iat: None,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

#[actix_web::test]
async fn test_integration_end_to_end_matching() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1?limit=2")
        .to_request();
    let resp: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = resp
        .recommendations
        .iter()
        .map(|r| r.mentor.user_id.as_str())
        .collect();
    assert_eq!(ids, vec!["3", "1"]);
    assert_eq!(resp.recommendations[0].similarity, 0.866);
    assert_eq!(resp.recommendations[1].similarity, 0.6667);
}

#[actix_web::test]
async fn test_payload_hides_private_fields() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let first = &body["recommendations"][0];
    assert!(first["similarity"].is_number());
    assert_eq!(first["mentor"]["fullName"], "Mentor 3");
    assert!(first["mentor"].get("personalBio").is_none());
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn test_bio_scores_but_is_not_returned() {
    let mut with_bio = create_mentor("bio", "web design");
    with_bio.personal_bio = Some("machine learning researcher".to_string());
    let mentors = vec![create_mentor("plain", "web design"), with_bio];

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(mentors))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let recommendations = body["recommendations"].as_array().unwrap();
    assert_eq!(recommendations[0]["mentor"]["userId"], "bio");
    // 2 shared terms: 2 / sqrt(3 * 5)
    assert_eq!(recommendations[0]["similarity"], 0.5164);
    assert_eq!(recommendations[1]["similarity"], 0.0);
    assert!(recommendations[0]["mentor"].get("personalBio").is_none());
    assert!(!body.to_string().contains("researcher"));
}

#[actix_web::test]
async fn test_unknown_mentee_is_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/nobody")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Mentee not found");
}

#[actix_web::test]
async fn test_empty_pool_is_reported() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(vec![]))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No mentors available");
}

#[actix_web::test]
async fn test_store_failure_does_not_leak_details() {
    let mut store = create_store(scenario_mentors());
    store.fail = true;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Internal Server Error");
    assert!(!body.to_string().contains("broken mentee row"));
}

#[actix_web::test]
async fn test_invalid_limit_is_rejected() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations/mentee-1?limit=0")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_session_cookie_identity() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations?limit=1")
        .cookie(Cookie::new("token", sign_token("mentee-1")))
        .to_request();
    let resp: RecommendationsResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.recommendations.len(), 1);
    assert_eq!(resp.recommendations[0].mentor.user_id, "3");
}

#[actix_web::test]
async fn test_missing_session_cookie_is_unauthorized() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/recommendations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/v1/recommendations")
        .cookie(Cookie::new("token", "not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_own_mentor_profile() {
    let mut mentor = create_mentor("1", "machine learning engineer");
    mentor.personal_bio = Some("likes climbing".to_string());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(vec![mentor]))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/mentors/me")
        .cookie(Cookie::new("token", sign_token("1")))
        .to_request();
    let resp: MentorProfileResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.success);
    assert_eq!(resp.data.user_id, "1");
    assert_eq!(resp.data.personal_bio.as_deref(), Some("likes climbing"));
}

#[actix_web::test]
async fn test_own_mentor_profile_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/mentors/me")
        .cookie(Cookie::new("token", sign_token("mentee-1")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Mentor profile not found");
}

#[actix_web::test]
async fn test_own_mentor_profile_requires_session() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(scenario_mentors()))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/mentors/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_own_mentor_profile_store_failure() {
    let mut store = create_store(scenario_mentors());
    store.fail = true;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store)))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/mentors/me")
        .cookie(Cookie::new("token", sign_token("1")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body.to_string().contains("broken mentor row"));
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(create_store(vec![]))))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
}
