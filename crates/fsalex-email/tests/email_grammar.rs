//! End-to-end tests: the bundled email automaton driving the email token
//! builder.

use fsalex_core::{Rejection, StateId, Verdict};
use fsalex_email::{EmailAddress, EmailTokenBuilder, email_fsa};
use fsalex_engine::Fsa;

fn fsa() -> Fsa {
    email_fsa().expect("bundled email config")
}

fn address(username: &str, host: &str, sld: &str, tld: &str) -> EmailAddress {
    EmailAddress {
        username: username.into(),
        host: host.into(),
        second_level_domain: sld.into(),
        top_level_domain: tld.into(),
    }
}

#[test]
fn accepts_full_address() {
    let mut builder = EmailTokenBuilder::new();
    let verdict = fsa().evaluate("ab@cd.ef.gh", &mut builder);
    assert_eq!(
        verdict,
        Verdict::Accepted {
            state: StateId(7),
            tokens: address("ab", "cd", "ef", "gh"),
        }
    );
}

#[test]
fn username_with_dot_and_digits() {
    let mut builder = EmailTokenBuilder::new();
    let verdict = fsa().evaluate("jon.grant2@mail.wcusd5.net", &mut builder);
    assert_eq!(
        verdict.into_tokens(),
        Some(address("jon.grant2", "mail", "wcusd5", "net"))
    );
}

#[test]
fn two_label_domain_has_empty_host() {
    let mut builder = EmailTokenBuilder::new();
    let verdict = fsa().evaluate("ab@cd.ef", &mut builder);
    assert_eq!(verdict.into_tokens(), Some(address("ab", "", "cd", "ef")));
}

#[test]
fn long_domain_joins_host_labels() {
    let mut builder = EmailTokenBuilder::new();
    let verdict = fsa().evaluate("x@a.b.c.d", &mut builder);
    assert_eq!(verdict.into_tokens(), Some(address("x", "a.b", "c", "d")));
}

#[test]
fn missing_domain_is_rejected() {
    let verdict = fsa().evaluate("ab@cd", &mut EmailTokenBuilder::new());
    assert_eq!(
        verdict,
        Verdict::Rejected {
            reason: Rejection::NotAccepting { state: StateId(5) }
        }
    );
}

#[test]
fn out_of_alphabet_symbol_is_rejected() {
    let mut builder = EmailTokenBuilder::new();
    let verdict = fsa().evaluate("a#b@cd.ef", &mut builder);
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::OutOfAlphabet {
            position: 1,
            symbol: '#'
        })
    );
    // Nothing after the fault reached the builder.
    assert_eq!(builder.fields().username, "a");
    assert!(builder.fields().top_level_domain.is_empty());
}

#[test]
fn empty_string_is_rejected() {
    let verdict = fsa().evaluate("", &mut EmailTokenBuilder::new());
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::NotAccepting {
            state: StateId::INITIAL
        })
    );
}

#[test]
fn sink_stops_token_building() {
    let mut builder = EmailTokenBuilder::new();
    // '.' as the first symbol goes straight to the sink.
    let verdict = fsa().evaluate(".ab@cd.ef", &mut builder);
    assert_eq!(
        verdict.rejection(),
        Some(&Rejection::RejectingState {
            state: StateId(8),
            consumed: 1
        })
    );
    assert_eq!(*builder.fields(), EmailAddress::default());
}

#[test]
fn rejects_malformed_addresses() {
    let fsa = fsa();
    for input in [
        "ab.@cd.ef",
        "a..b@cd.ef",
        "a.b.c@cd.ef",
        "@cd.ef",
        "ab@@cd.ef",
        "ab@.cd.ef",
        "ab@cd..ef",
        "ab@cd.ef.",
        "ab@cd.ef ",
    ] {
        assert!(!fsa.recognizes(input), "{input:?} should be rejected");
    }
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let fsa = fsa();
    let mut builder = EmailTokenBuilder::new();
    let first = fsa.evaluate("ab@cd.ef.gh", &mut builder);
    let _ = fsa.evaluate("zz@yy.xx.ww", &mut builder);
    let again = fsa.evaluate("ab@cd.ef.gh", &mut builder);
    assert_eq!(first, again);
    assert_eq!(first, fsa.evaluate("ab@cd.ef.gh", &mut EmailTokenBuilder::new()));
}

#[test]
fn batch_of_lines() {
    let fsa = fsa();
    let mut builder = EmailTokenBuilder::new();
    let input = "ab@cd.ef.gh\n   ab@cd\na#b@cd.ef\n\nq@r.s\n";
    let accepted: Vec<(String, Option<EmailAddress>)> = fsa
        .evaluate_lines(input, &mut builder)
        .map(|(line, verdict)| (line.to_string(), verdict.into_tokens()))
        .collect();
    assert_eq!(
        accepted,
        vec![
            ("ab@cd.ef.gh".to_string(), Some(address("ab", "cd", "ef", "gh"))),
            ("ab@cd".to_string(), None),
            ("a#b@cd.ef".to_string(), None),
            (String::new(), None),
            ("q@r.s".to_string(), Some(address("q", "", "r", "s"))),
        ]
    );
}

#[test]
fn accepted_fields_serialize_to_json() {
    let mut builder = EmailTokenBuilder::new();
    let tokens = fsa()
        .evaluate("ab@cd.ef.gh", &mut builder)
        .into_tokens()
        .unwrap();
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "username": "ab",
            "host": "cd",
            "second_level_domain": "ef",
            "top_level_domain": "gh",
        })
    );
}
