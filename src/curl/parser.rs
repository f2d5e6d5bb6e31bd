use winnow::{ModalResult, Parser, combinator::preceded, token::take_till};

/// Take the second space-delimited token of a curl command: the text between
/// the first and the second `' '`. Only the ASCII space separates tokens, so a
/// newline right after the url stays part of the token.
pub fn parse_url_token<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded((take_till(0.., ' '), ' '), take_till(0.., ' ')).parse_next(s)
}

/// The url argument of the command with every `'` removed.
pub fn url_argument(input: &str) -> Option<String> {
    let mut input = input;
    parse_url_token(&mut input)
        .ok()
        .map(|token| token.replace('\'', ""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("curl 'https://x.com/a?b=1' -H 'Accept: */*'", "'https://x.com/a?b=1'")]
    #[case("curl 'https://x.com/a'", "'https://x.com/a'")]
    #[case("curl https://x.com/a", "https://x.com/a")]
    #[case("curl 'https://x.com/a' \\\n  -H 'Accept: */*'", "'https://x.com/a'")]
    #[case("curl 'https://x.com/a'\\\n-H 'A: b'", "'https://x.com/a'\\\n-H")]
    #[case("curl  'https://x.com/a'", "")]
    #[case("curl -X 'POST' 'https://x.com/a'", "-X")]
    fn test_parse_url_token(#[case] input: &str, #[case] expected: &str) {
        let mut input = input;
        let token = parse_url_token(&mut input).unwrap();
        assert_eq!(token, expected)
    }

    #[rstest]
    #[case("curl")]
    #[case("")]
    fn test_parse_url_token_without_space(#[case] input: &str) {
        let mut input = input;
        assert!(parse_url_token(&mut input).is_err());
    }

    #[rstest]
    #[case("curl 'https://x.com/a?b=1' -H 'Accept: */*'", Some("https://x.com/a?b=1"))]
    #[case("curl 'https://x.com/it''s'", Some("https://x.com/its"))]
    #[case("curl", None)]
    fn test_url_argument(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(url_argument(input).as_deref(), expected);
    }
}
