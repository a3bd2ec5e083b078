/// The syntactic shape of one raw token, independent of any parameter meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// `--name` or `--name=value`.
    Long {
        name: &'t str,
        inline: Option<&'t str>,
    },
    /// `-x` or `-x=value`.
    Short {
        alias: char,
        inline: Option<&'t str>,
    },
    /// `-abc`: bundled short aliases, which are never matched.
    Cluster(&'t str),
    /// Anything else, including negative numbers (`-3`) and the lone `-`/`--`.
    Value(&'t str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classified<'t> {
    pub offset: usize,
    pub raw: &'t str,
    pub token: Token<'t>,
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

pub(crate) fn classify(raw: &str) -> Token<'_> {
    if raw == "-" || raw == "--" {
        return Token::Value(raw);
    }

    if let Some(rest) = raw.strip_prefix("--") {
        let (name, inline) = split_equals_delimiter(rest);
        return Token::Long { name, inline };
    }

    if let Some(rest) = raw.strip_prefix('-') {
        // Negative numbers are values (ex: `-3`, `-2.5`).
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            return Token::Value(raw);
        }

        let (name, inline) = split_equals_delimiter(rest);
        let mut characters = name.chars();

        return match (characters.next(), characters.next()) {
            (Some(alias), None) => Token::Short { alias, inline },
            _ => Token::Cluster(rest),
        };
    }

    Token::Value(raw)
}

/// Classify every token, keeping its offset in the input (shifted by `base_offset`).
pub(crate) fn tokenize<'t>(tokens: &[&'t str], base_offset: usize) -> Vec<Classified<'t>> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, &raw)| Classified {
            offset: base_offset + index,
            raw,
            token: classify(raw),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--foo", Token::Long { name: "foo", inline: None })]
    #[case("--foo=bar", Token::Long { name: "foo", inline: Some("bar") })]
    #[case("--foo=", Token::Long { name: "foo", inline: Some("") })]
    #[case("--foo=a=b", Token::Long { name: "foo", inline: Some("a=b") })]
    #[case("--my-num", Token::Long { name: "my-num", inline: None })]
    #[case("-f", Token::Short { alias: 'f', inline: None })]
    #[case("-f=1", Token::Short { alias: 'f', inline: Some("1") })]
    #[case("-ab", Token::Cluster("ab"))]
    #[case("-ab=1", Token::Cluster("ab=1"))]
    #[case("-3", Token::Value("-3"))]
    #[case("-2.5", Token::Value("-2.5"))]
    #[case("-", Token::Value("-"))]
    #[case("--", Token::Value("--"))]
    #[case("hello", Token::Value("hello"))]
    #[case("a-b", Token::Value("a-b"))]
    #[case("", Token::Value(""))]
    fn classify_token(#[case] raw: &str, #[case] expected: Token) {
        assert_eq!(classify(raw), expected);
    }

    #[test]
    fn tokenize_offsets() {
        let tokens = tokenize(&["bar", "-i", "10"], 1);
        assert_eq!(
            tokens,
            vec![
                Classified {
                    offset: 1,
                    raw: "bar",
                    token: Token::Value("bar"),
                },
                Classified {
                    offset: 2,
                    raw: "-i",
                    token: Token::Short {
                        alias: 'i',
                        inline: None,
                    },
                },
                Classified {
                    offset: 3,
                    raw: "10",
                    token: Token::Value("10"),
                },
            ]
        );
    }

    #[test]
    fn tokenize_empty() {
        assert_eq!(tokenize(empty::slice(), 0), vec![]);
    }
}
