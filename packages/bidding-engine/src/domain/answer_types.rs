//! Answer-type compatibility: which question formats make sense against the
//! auction's final call.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::auction_types::Call;

/// The shape of a player's structured response. The shape's content is
/// opaque to this engine; only its compatibility with the final call is
/// checked here.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AnswerType {
    ForcingNonForcing,
    DoubleInterpretation,
    RedoubleInterpretation,
    FreeAnswer,
    MultipleChoice,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("answer type {answer_type:?} cannot be asked about final call {call}")]
pub struct IncompatibilityError {
    pub answer_type: AnswerType,
    pub call: Call,
}

/// Check whether `answer_type` is semantically meaningful for a question
/// whose auction ends with `last_call`.
///
/// Rule table: ForcingNonForcing needs a contract or a pass,
/// DoubleInterpretation needs a double, RedoubleInterpretation needs a
/// redouble; FreeAnswer and MultipleChoice fit any call.
pub fn compatible(answer_type: AnswerType, last_call: Call) -> Result<(), IncompatibilityError> {
    let ok = match answer_type {
        AnswerType::ForcingNonForcing => {
            matches!(last_call, Call::Contract { .. } | Call::Pass)
        }
        AnswerType::DoubleInterpretation => last_call == Call::Double,
        AnswerType::RedoubleInterpretation => last_call == Call::Redouble,
        AnswerType::FreeAnswer | AnswerType::MultipleChoice => true,
    };
    if ok {
        Ok(())
    } else {
        Err(IncompatibilityError {
            answer_type,
            call: last_call,
        })
    }
}

/// Every answer type compatible with `last_call`, in presentation order.
/// FreeAnswer and MultipleChoice are always appended last so editing tools
/// show the call-specific formats first.
pub fn available_types(last_call: Call) -> Vec<AnswerType> {
    let mut types: Vec<AnswerType> = [
        AnswerType::ForcingNonForcing,
        AnswerType::DoubleInterpretation,
        AnswerType::RedoubleInterpretation,
    ]
    .into_iter()
    .filter(|t| compatible(*t, last_call).is_ok())
    .collect();
    types.push(AnswerType::FreeAnswer);
    types.push(AnswerType::MultipleChoice);
    types
}

// AnswerType serde
impl Serialize for AnswerType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            AnswerType::ForcingNonForcing => "FORCING_NON_FORCING",
            AnswerType::DoubleInterpretation => "DOUBLE_INTERPRETATION",
            AnswerType::RedoubleInterpretation => "REDOUBLE_INTERPRETATION",
            AnswerType::FreeAnswer => "FREE_ANSWER",
            AnswerType::MultipleChoice => "MULTIPLE_CHOICE",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for AnswerType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "FORCING_NON_FORCING" => Ok(AnswerType::ForcingNonForcing),
            "DOUBLE_INTERPRETATION" => Ok(AnswerType::DoubleInterpretation),
            "REDOUBLE_INTERPRETATION" => Ok(AnswerType::RedoubleInterpretation),
            "FREE_ANSWER" => Ok(AnswerType::FreeAnswer),
            "MULTIPLE_CHOICE" => Ok(AnswerType::MultipleChoice),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid answer type: {s}"
            ))),
        }
    }
}
