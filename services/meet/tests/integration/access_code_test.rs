use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use huddle_access_code::{RejectReason, Resolution};
use huddle_meet::usecase::access_code::{GenerateCodeInput, ValidateCodeInput};

use crate::helpers::test_state;

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, h, m, 0).unwrap()
}

fn validate(code: &str, client_name: Option<&str>, now: DateTime<Utc>) -> Resolution {
    test_state().validate_code_usecase().execute(
        ValidateCodeInput {
            code: code.to_owned(),
            client_name: client_name.map(str::to_owned),
        },
        now,
    )
}

#[test]
fn should_accept_code_shortly_before_meeting() {
    let generated = test_state()
        .generate_code_usecase()
        .execute(GenerateCodeInput {
            client_name: String::new(),
            meeting_date_time: "2025-01-01T10:00:00Z".into(),
        })
        .unwrap();
    assert_eq!(generated.code.as_str(), "45018760");

    match validate("45018760", Some(""), at(9, 58)) {
        Resolution::Valid {
            meeting_start,
            window,
        } => {
            assert_eq!(meeting_start, at(10, 0));
            assert_eq!(window.end, at(12, 0));
        }
        other => panic!("expected valid, got {other:?}"),
    }
}

#[test]
fn should_reject_code_after_window_closes() {
    assert_eq!(
        validate("45018760", None, at(12, 1)),
        Resolution::Invalid(RejectReason::OutsideWindow)
    );
}

#[test]
fn should_reject_short_code_immediately() {
    assert_eq!(
        validate("1234567", None, at(10, 0)),
        Resolution::Invalid(RejectReason::InvalidFormat)
    );
}

#[test]
fn should_bind_code_to_client_name() {
    let generated = test_state()
        .generate_code_usecase()
        .execute(GenerateCodeInput {
            client_name: "Acme Corp".into(),
            meeting_date_time: "01/01/2025, 10:00:00 AM".into(),
        })
        .unwrap();
    let code = generated.code.as_str();

    assert!(validate(code, Some("acme-corp"), at(10, 15)).is_valid());
    assert_eq!(
        validate(code, Some("Globex"), at(10, 15)),
        Resolution::Invalid(RejectReason::CodeMismatch)
    );
}

#[test]
fn should_resolve_later_of_two_meetings_sharing_time_digits() {
    let state = test_state();
    let first = at(10, 0);
    let second = first + TimeDelta::minutes(10_000);
    let uc = state.generate_code_usecase();
    let a = uc
        .execute(GenerateCodeInput {
            client_name: String::new(),
            meeting_date_time: first.to_rfc3339(),
        })
        .unwrap();
    let b = uc
        .execute(GenerateCodeInput {
            client_name: String::new(),
            meeting_date_time: second.to_rfc3339(),
        })
        .unwrap();

    assert_eq!(a.encoded_timestamp(), b.encoded_timestamp());
    assert_ne!(a.code, b.code);

    let now = second + TimeDelta::minutes(30);
    match validate(b.code.as_str(), None, now) {
        Resolution::Valid { meeting_start, .. } => assert_eq!(meeting_start, second),
        other => panic!("expected valid, got {other:?}"),
    }
    assert!(!validate(a.code.as_str(), None, now).is_valid());
}
