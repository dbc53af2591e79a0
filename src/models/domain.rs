use serde::{Deserialize, Serialize};

/// Mentee profile as stored by the profile collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenteeProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "careerGoals", default)]
    pub career_goals: Option<String>,
    #[serde(rename = "mentorshipGoals", default)]
    pub mentorship_goals: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(rename = "technicalBackground", default)]
    pub technical_background: Option<String>,
    #[serde(rename = "preferredMentorshipAreas", default)]
    pub preferred_mentorship_areas: Vec<String>,
}

/// Mentor profile as stored by the profile collaborator
///
/// `personal_bio` takes part in matching but is never exposed in
/// recommendation payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "profilePhoto", default)]
    pub profile_photo: Option<String>,
    #[serde(rename = "currentRole", default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(rename = "mentoringGoals", default)]
    pub mentoring_goals: Option<String>,
    #[serde(rename = "technicalSkills", default)]
    pub technical_skills: Vec<String>,
    #[serde(rename = "areasOfInterest", default)]
    pub areas_of_interest: Vec<String>,
    #[serde(rename = "personalBio", default)]
    pub personal_bio: Option<String>,
}

/// Public projection of a mentor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentorSummary {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: Option<String>,
    #[serde(rename = "profilePhoto")]
    pub profile_photo: Option<String>,
    #[serde(rename = "currentRole")]
    pub current_role: Option<String>,
    pub company: Option<String>,
    #[serde(rename = "mentoringGoals")]
    pub mentoring_goals: Option<String>,
    #[serde(rename = "technicalSkills")]
    pub technical_skills: Vec<String>,
    #[serde(rename = "areasOfInterest")]
    pub areas_of_interest: Vec<String>,
}

impl From<&MentorProfile> for MentorSummary {
    fn from(mentor: &MentorProfile) -> Self {
        Self {
            user_id: mentor.user_id.clone(),
            full_name: mentor.full_name.clone(),
            email: mentor.email.clone(),
            profile_photo: mentor.profile_photo.clone(),
            current_role: mentor.current_role.clone(),
            company: mentor.company.clone(),
            mentoring_goals: mentor.mentoring_goals.clone(),
            technical_skills: mentor.technical_skills.clone(),
            areas_of_interest: mentor.areas_of_interest.clone(),
        }
    }
}

/// Scored recommendation, similarity rounded to 4 decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub similarity: f64,
    pub mentor: MentorSummary,
}
