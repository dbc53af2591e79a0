// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{MenteeProfile, MentorProfile, MentorSummary, Recommendation};
pub use requests::RecommendationQuery;
pub use responses::{RecommendationsResponse, MentorProfileResponse, HealthResponse, ErrorResponse};
