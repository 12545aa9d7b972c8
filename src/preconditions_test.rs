use super::*;
use chrono::TimeZone;

const DATE: &str = "Sun, 06 Nov 1994 08:49:37 GMT";

fn date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37)
        .single()
        .expect("valid test instant")
}

fn request(method: &'static str) -> RequestContext<'static> {
    RequestContext {
        method,
        ..RequestContext::default()
    }
}

mod parse {
    use super::*;

    #[test]
    fn should_be_unconditional_when_no_headers() {
        // Arrange
        let request = request("GET");

        // Act
        let result = Preconditions::parse(&request).expect("parse succeeds");

        // Assert
        assert_eq!(result, Preconditions::default());
        assert!(!result.is_conditional());
    }

    #[test]
    fn should_prefer_if_match_over_if_unmodified_since() {
        // Arrange
        let request = RequestContext {
            if_match: Some(r#""a""#),
            if_unmodified_since: Some(DATE),
            ..request("PUT")
        };

        // Act
        let result = Preconditions::parse(&request).expect("parse succeeds");

        // Assert
        assert_eq!(
            result.accept,
            Some(AcceptCondition::Tags(TagFilter::List(vec![r#""a""#.into()])))
        );
        assert!(result.is_conditional());
    }

    #[test]
    fn should_use_if_unmodified_since_when_if_match_absent() {
        let request = RequestContext {
            if_unmodified_since: Some(DATE),
            ..request("DELETE")
        };

        let result = Preconditions::parse(&request).expect("parse succeeds");

        assert_eq!(result.accept, Some(AcceptCondition::UnmodifiedSince(date())));
    }

    #[test]
    fn should_prefer_if_none_match_over_if_modified_since() {
        let request = RequestContext {
            if_none_match: Some(r#"W/"a""#),
            if_modified_since: Some(DATE),
            ..request("GET")
        };

        let result = Preconditions::parse(&request).expect("parse succeeds");

        assert_eq!(
            result.reject,
            Some(RejectCondition::Tags(TagFilter::List(vec![r#""a""#.into()])))
        );
    }

    #[test]
    fn should_read_if_modified_since_only_for_get_and_head() {
        for (method, expected) in [
            ("GET", Some(RejectCondition::ModifiedSince(date()))),
            ("HEAD", Some(RejectCondition::ModifiedSince(date()))),
            ("POST", None),
            ("PUT", None),
        ] {
            let request = RequestContext {
                if_modified_since: Some(DATE),
                ..request(method)
            };

            let result = Preconditions::parse(&request).expect("parse succeeds");

            assert_eq!(result.reject, expected, "method {method}");
        }
    }

    #[test]
    fn should_ignore_unparsable_dates() {
        let request = RequestContext {
            if_modified_since: Some("last tuesday"),
            if_unmodified_since: Some("Sun, 32 Jan 1994 08:49:37 GMT"),
            ..request("GET")
        };

        let result = Preconditions::parse(&request).expect("parse succeeds");

        assert!(!result.is_conditional());
    }

    #[test]
    fn should_fail_when_if_match_malformed() {
        let request = RequestContext {
            if_match: Some(r#""a" "b""#),
            if_none_match: Some(r#""also bad"#),
            ..request("PUT")
        };

        let result = Preconditions::parse(&request);

        assert_eq!(result, Err(MalformedHeader::IfMatch));
    }

    #[test]
    fn should_fail_when_if_none_match_malformed() {
        let request = RequestContext {
            if_match: Some("*"),
            if_none_match: Some(r#""unterminated"#),
            ..request("GET")
        };

        let result = Preconditions::parse(&request);

        assert_eq!(result, Err(MalformedHeader::IfNoneMatch));
    }

    #[test]
    fn should_treat_empty_tag_header_as_absent() {
        let request = RequestContext {
            if_match: Some(" "),
            if_unmodified_since: Some(DATE),
            ..request("PUT")
        };

        let result = Preconditions::parse(&request).expect("parse succeeds");

        assert_eq!(result.accept, Some(AcceptCondition::UnmodifiedSince(date())));
    }

    #[test]
    fn should_parse_wildcards_as_any() {
        let request = RequestContext {
            if_match: Some("*"),
            if_none_match: Some(" * "),
            ..request("PUT")
        };

        let result = Preconditions::parse(&request).expect("parse succeeds");

        assert_eq!(result.accept, Some(AcceptCondition::Tags(TagFilter::Any)));
        assert_eq!(result.reject, Some(RejectCondition::Tags(TagFilter::Any)));
    }
}
