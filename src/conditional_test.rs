use super::*;
use crate::clock::Clock;
use crate::entity_tag::TagFilter;
use crate::options::ConfigError;
use crate::preconditions::{AcceptCondition, RejectCondition};
use crate::result::{ShortCircuit, ValidateError};
use crate::validator::ValidatorOptions;
use chrono::{TimeZone, Utc};

fn conditional() -> Conditional {
    Conditional::new(ConditionalOptions {
        clock: Clock::fixed(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
                .single()
                .expect("valid test instant"),
        ),
        ..ConditionalOptions::default()
    })
    .expect("valid conditional configuration")
}

fn request(method: &'static str) -> RequestContext<'static> {
    RequestContext {
        method,
        ..RequestContext::default()
    }
}

mod new {
    use super::*;

    #[test]
    fn should_reject_invalid_ignored_method() {
        // Arrange
        let options = ConditionalOptions {
            ignored_methods: vec![String::new()],
            ..ConditionalOptions::default()
        };

        // Act
        let result = Conditional::new(options);

        // Assert
        assert!(matches!(
            result,
            Err(ConfigError::InvalidIgnoredMethod { .. })
        ));
    }

    #[test]
    fn should_match_default_options_when_defaulted() {
        let conditional = Conditional::default();

        assert_eq!(
            conditional.options().ignored_methods,
            ConditionalOptions::default().ignored_methods
        );
    }
}

mod begin {
    use super::*;

    #[test]
    fn should_open_unconditional_exchange_when_no_headers() {
        let exchange = conditional()
            .begin(&request("GET"))
            .expect("begin succeeds");

        assert!(!exchange.is_conditional());
        assert!(!exchange.is_ignored_method());
        assert!(!exchange.is_validated());
        assert_eq!(exchange.method(), "GET");
    }

    #[test]
    fn should_skip_parsing_for_ignored_methods_even_when_malformed() {
        for method in ["CONNECT", "OPTIONS", "TRACE"] {
            let request = RequestContext {
                if_match: Some("not a tag"),
                if_none_match: Some("*"),
                ..request(method)
            };

            let exchange = conditional().begin(&request).expect("begin succeeds");

            assert!(exchange.is_ignored_method(), "method {method}");
            assert!(!exchange.is_conditional(), "method {method}");
        }
    }

    #[test]
    fn should_reject_malformed_if_match() {
        let request = RequestContext {
            if_match: Some(r#""abc"#),
            ..request("PUT")
        };

        let result = conditional().begin(&request);

        assert!(matches!(result, Err(MalformedHeader::IfMatch)));
    }

    #[test]
    fn should_reject_malformed_if_none_match() {
        let request = RequestContext {
            if_none_match: Some(r#""a" "b""#),
            ..request("GET")
        };

        let result = conditional().begin(&request);

        assert!(matches!(result, Err(MalformedHeader::IfNoneMatch)));
    }

    #[test]
    fn should_expose_parsed_preconditions() {
        let request = RequestContext {
            if_match: Some(r#"W/"a", "b""#),
            if_none_match: Some("*"),
            ..request("PATCH")
        };

        let exchange = conditional().begin(&request).expect("begin succeeds");

        assert_eq!(
            exchange.preconditions().accept,
            Some(AcceptCondition::Tags(TagFilter::List(vec![
                r#"W/"a""#.into(),
                r#""b""#.into()
            ])))
        );
        assert_eq!(
            exchange.preconditions().reject,
            Some(RejectCondition::Tags(TagFilter::Any))
        );
    }

    #[test]
    fn should_honour_custom_ignored_methods() {
        let conditional = Conditional::new(ConditionalOptions {
            ignored_methods: vec!["PROPFIND".into()],
            ..ConditionalOptions::default()
        })
        .expect("valid conditional configuration");
        let request = RequestContext {
            if_none_match: Some("*"),
            ..request("OPTIONS")
        };

        let mut exchange = conditional.begin(&request).expect("begin succeeds");
        let result = exchange.validate(ValidatorOptions::strong(["x"]));

        assert!(!exchange.is_ignored_method());
        assert_eq!(
            result,
            Err(ValidateError::ShortCircuit(ShortCircuit::PreconditionFailed))
        );
    }
}
