use crate::domain::answer_types::{available_types, compatible, AnswerType};
use crate::domain::auction_types::{Call, Strain};

const CONTRACT: Call = Call::Contract {
    level: 3,
    strain: Strain::NoTrump,
};

#[test]
fn forcing_non_forcing_needs_contract_or_pass() {
    assert!(compatible(AnswerType::ForcingNonForcing, CONTRACT).is_ok());
    assert!(compatible(AnswerType::ForcingNonForcing, Call::Pass).is_ok());
    assert!(compatible(AnswerType::ForcingNonForcing, Call::Double).is_err());
    assert!(compatible(AnswerType::ForcingNonForcing, Call::Redouble).is_err());
}

#[test]
fn double_interpretation_needs_a_double() {
    assert!(compatible(AnswerType::DoubleInterpretation, Call::Double).is_ok());
    assert!(compatible(AnswerType::DoubleInterpretation, CONTRACT).is_err());
    assert!(compatible(AnswerType::DoubleInterpretation, Call::Pass).is_err());
    assert!(compatible(AnswerType::DoubleInterpretation, Call::Redouble).is_err());
}

#[test]
fn redouble_interpretation_needs_a_redouble() {
    assert!(compatible(AnswerType::RedoubleInterpretation, Call::Redouble).is_ok());
    assert!(compatible(AnswerType::RedoubleInterpretation, Call::Double).is_err());
    assert!(compatible(AnswerType::RedoubleInterpretation, CONTRACT).is_err());
}

#[test]
fn free_answer_and_multiple_choice_fit_any_call() {
    for call in [CONTRACT, Call::Pass, Call::Double, Call::Redouble] {
        assert!(compatible(AnswerType::FreeAnswer, call).is_ok());
        assert!(compatible(AnswerType::MultipleChoice, call).is_ok());
    }
}

#[test]
fn incompatibility_error_names_both_sides() {
    let err = compatible(AnswerType::DoubleInterpretation, CONTRACT).unwrap_err();
    assert_eq!(err.answer_type, AnswerType::DoubleInterpretation);
    assert_eq!(err.call, CONTRACT);
    let msg = err.to_string();
    assert!(msg.contains("DoubleInterpretation"));
    assert!(msg.contains("3NT"));
}

#[test]
fn available_types_per_call() {
    assert_eq!(
        available_types(CONTRACT),
        vec![
            AnswerType::ForcingNonForcing,
            AnswerType::FreeAnswer,
            AnswerType::MultipleChoice,
        ]
    );
    assert_eq!(
        available_types(Call::Pass),
        vec![
            AnswerType::ForcingNonForcing,
            AnswerType::FreeAnswer,
            AnswerType::MultipleChoice,
        ]
    );
    assert_eq!(
        available_types(Call::Double),
        vec![
            AnswerType::DoubleInterpretation,
            AnswerType::FreeAnswer,
            AnswerType::MultipleChoice,
        ]
    );
    assert_eq!(
        available_types(Call::Redouble),
        vec![
            AnswerType::RedoubleInterpretation,
            AnswerType::FreeAnswer,
            AnswerType::MultipleChoice,
        ]
    );
}

#[test]
fn available_types_always_end_with_open_formats() {
    for call in [CONTRACT, Call::Pass, Call::Double, Call::Redouble] {
        let types = available_types(call);
        let n = types.len();
        assert_eq!(types[n - 2], AnswerType::FreeAnswer);
        assert_eq!(types[n - 1], AnswerType::MultipleChoice);
        // Everything listed really is compatible.
        for t in types {
            assert!(compatible(t, call).is_ok());
        }
    }
}

#[test]
fn answer_type_serde() {
    assert_eq!(
        serde_json::to_string(&AnswerType::ForcingNonForcing).unwrap(),
        "\"FORCING_NON_FORCING\""
    );
    assert_eq!(
        serde_json::from_str::<AnswerType>("\"MULTIPLE_CHOICE\"").unwrap(),
        AnswerType::MultipleChoice
    );
    assert!(serde_json::from_str::<AnswerType>("\"FREEFORM\"").is_err());
}
