use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string accepted by the recommendation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationQuery {
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
