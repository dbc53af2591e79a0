// Service exports
pub mod auth;
pub mod postgres;
pub mod recommender;
pub mod store;

pub use auth::{AuthError, Claims, TokenVerifier, TOKEN_COOKIE};
pub use postgres::PostgresClient;
pub use recommender::{MatchService, RecommendationError};
pub use store::{ProfileStore, StoreError};
