use crate::models::{MenteeProfile, MentorProfile};

/// Selector for one field that contributes to a profile's document
pub enum DocumentField<P> {
    /// Scalar free-text field, absent contributes nothing
    Text(fn(&P) -> Option<&str>),
    /// List field, elements joined by single spaces
    List(fn(&P) -> &[String]),
}

/// A profile variant with a fixed, ordered table of document fields
pub trait Profile: Sized + 'static {
    const DOCUMENT_FIELDS: &'static [DocumentField<Self>];
}

impl Profile for MenteeProfile {
    const DOCUMENT_FIELDS: &'static [DocumentField<Self>] = &[
        DocumentField::Text(mentee_career_goals),
        DocumentField::Text(mentee_mentorship_goals),
        DocumentField::Text(mentee_challenges),
        DocumentField::Text(mentee_technical_background),
        DocumentField::List(mentee_preferred_areas),
    ];
}

impl Profile for MentorProfile {
    const DOCUMENT_FIELDS: &'static [DocumentField<Self>] = &[
        DocumentField::Text(mentor_mentoring_goals),
        DocumentField::List(mentor_technical_skills),
        DocumentField::List(mentor_areas_of_interest),
        DocumentField::Text(mentor_personal_bio),
    ];
}

fn mentee_career_goals(m: &MenteeProfile) -> Option<&str> {
    m.career_goals.as_deref()
}

fn mentee_mentorship_goals(m: &MenteeProfile) -> Option<&str> {
    m.mentorship_goals.as_deref()
}

fn mentee_challenges(m: &MenteeProfile) -> Option<&str> {
    m.challenges.as_deref()
}

fn mentee_technical_background(m: &MenteeProfile) -> Option<&str> {
    m.technical_background.as_deref()
}

fn mentee_preferred_areas(m: &MenteeProfile) -> &[String] {
    &m.preferred_mentorship_areas
}

fn mentor_mentoring_goals(m: &MentorProfile) -> Option<&str> {
    m.mentoring_goals.as_deref()
}

fn mentor_technical_skills(m: &MentorProfile) -> &[String] {
    &m.technical_skills
}

fn mentor_areas_of_interest(m: &MentorProfile) -> &[String] {
    &m.areas_of_interest
}

fn mentor_personal_bio(m: &MentorProfile) -> Option<&str> {
    m.personal_bio.as_deref()
}

/// Combine a profile's document fields into a single document string
///
/// Fields are visited in table order. Empty contributions are dropped
/// before joining, so the result never contains doubled separators from
/// missing fields.
pub fn combine_text<P: Profile>(profile: &P) -> String {
    P::DOCUMENT_FIELDS
        .iter()
        .map(|field| match field {
            DocumentField::Text(get) => get(profile).unwrap_or_default().to_string(),
            DocumentField::List(get) => get(profile).join(" "),
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
