//! Question model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Correct-answer marker for a multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(AnswerKey::A),
            "B" => Ok(AnswerKey::B),
            "C" => Ok(AnswerKey::C),
            "D" => Ok(AnswerKey::D),
            _ => Err(format!("Invalid answer key: {}", s)),
        }
    }
}

// SQLx conversion for AnswerKey (stored as text)
impl sqlx::Type<Postgres> for AnswerKey {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for AnswerKey {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for AnswerKey {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// A stored exam question. Insert-only; no update or delete path exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: Uuid,
    pub exam_id: String,
    pub year_asked: i32,
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: AnswerKey,
    pub solution: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a question. Field names follow the wire format used
/// by the admin form (`examId`, `yearAsked`, `optionA`...).
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestion {
    #[validate(length(min = 1, message = "examId must not be empty"))]
    pub exam_id: String,
    #[validate(range(min = 1900, max = 2100, message = "yearAsked out of range"))]
    pub year_asked: i32,
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    #[validate(length(min = 1, message = "questionText must not be empty"))]
    pub question_text: String,
    #[validate(length(min = 1, message = "optionA must not be empty"))]
    pub option_a: String,
    #[validate(length(min = 1, message = "optionB must not be empty"))]
    pub option_b: String,
    #[validate(length(min = 1, message = "optionC must not be empty"))]
    pub option_c: String,
    #[validate(length(min = 1, message = "optionD must not be empty"))]
    pub option_d: String,
    pub correct_answer: AnswerKey,
    #[validate(length(min = 1, message = "solution must not be empty"))]
    pub solution: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateQuestion {
        CreateQuestion {
            exam_id: "CAT".into(),
            year_asked: 2023,
            topic: Some("Algebra".into()),
            subtopic: None,
            question_text: "What is $x$ if $2x = 4$?".into(),
            option_a: "1".into(),
            option_b: "2".into(),
            option_c: "3".into(),
            option_d: "4".into(),
            correct_answer: AnswerKey::B,
            solution: "Divide both sides by 2.".into(),
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn empty_required_field_fails_validation() {
        let mut payload = valid_payload();
        payload.question_text = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn implausible_year_fails_validation() {
        let mut payload = valid_payload();
        payload.year_asked = 23;
        assert!(payload.validate().is_err());
    }

    #[test]
    fn payload_deserializes_from_wire_format() {
        let body = serde_json::json!({
            "examId": "CAT",
            "yearAsked": 2023,
            "questionText": "...",
            "optionA": "1",
            "optionB": "2",
            "optionC": "3",
            "optionD": "4",
            "correctAnswer": "B",
            "solution": "..."
        });
        let payload: CreateQuestion = serde_json::from_value(body).unwrap();
        assert_eq!(payload.correct_answer, AnswerKey::B);
        assert_eq!(payload.year_asked, 2023);
        assert!(payload.topic.is_none());
    }

    #[test]
    fn bad_answer_key_is_rejected_at_deserialization() {
        let body = serde_json::json!({
            "examId": "CAT",
            "yearAsked": 2023,
            "questionText": "...",
            "optionA": "1",
            "optionB": "2",
            "optionC": "3",
            "optionD": "4",
            "correctAnswer": "E",
            "solution": "..."
        });
        assert!(serde_json::from_value::<CreateQuestion>(body).is_err());
    }
}
