use super::prelude::{tokenize, Lexer, LexicalError, LexicalErrorType, Token};

fn lex_all(input: &str) -> Vec<Token> {
    tokenize(input)
        .expect("lexing failed")
        .into_iter()
        .map(|(_, token, _)| token)
        .collect()
}

#[test]
fn test_nested_call() {
    let input = "(add 1 (subtract 6 5))";

    let tokens = vec![
        Token::LParen,
        Token::Name(String::from("add")),
        Token::Number(String::from("1")),
        Token::LParen,
        Token::Name(String::from("subtract")),
        Token::Number(String::from("6")),
        Token::Number(String::from("5")),
        Token::RParen,
        Token::RParen,
    ];

    let lexed = lex_all(input);

    assert_eq!(lexed.len(), 9);

    for (idx, (token, lexed)) in tokens.iter().zip(lexed.iter()).enumerate() {
        assert_eq!(
            token, lexed,
            "Next token does not match expected token ({:?}, {:?}) at {}",
            lexed, token, idx
        );
    }
}

#[test]
fn test_sibling_calls() {
    let input = "(add 1)\n(subtract 6 5)";

    let tokens = vec![
        Token::LParen,
        Token::Name(String::from("add")),
        Token::Number(String::from("1")),
        Token::RParen,
        Token::LParen,
        Token::Name(String::from("subtract")),
        Token::Number(String::from("6")),
        Token::Number(String::from("5")),
        Token::RParen,
    ];

    assert_eq!(lex_all(input), tokens);
}

#[test]
fn test_literals() {
    assert_eq!(
        lex_all("1 2"),
        vec![
            Token::Number(String::from("1")),
            Token::Number(String::from("2")),
        ]
    );

    assert_eq!(
        lex_all(r#""some" "string""#),
        vec![
            Token::Str(String::from("some")),
            Token::Str(String::from("string")),
        ]
    );
}

#[test]
fn test_maximal_munch() {
    let input = "concat 1234 abcXYZ 007";

    let tokens = vec![
        Token::Name(String::from("concat")),
        Token::Number(String::from("1234")),
        Token::Name(String::from("abcXYZ")),
        Token::Number(String::from("007")),
    ];

    assert_eq!(lex_all(input), tokens);
}

#[test]
fn test_spans() {
    let input = "(add 1)";

    let spanned = tokenize(input).expect("lexing failed");

    let expected = vec![
        (0, Token::LParen, 1),
        (1, Token::Name(String::from("add")), 4),
        (5, Token::Number(String::from("1")), 6),
        (6, Token::RParen, 7),
    ];

    assert_eq!(spanned, expected);
}

#[test]
fn test_string_contents_kept_verbatim() {
    // no escape handling: a backslash is just another character
    let spanned = tokenize(r#""a \n b""#).expect("lexing failed");

    assert_eq!(spanned.len(), 1);
    assert_eq!(spanned[0].1, Token::Str(String::from("a \\n b")));
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize("").expect("lexing failed"), vec![]);
    assert_eq!(tokenize(" \t\n ").expect("lexing failed"), vec![]);
}

#[test]
fn test_unrecognized_character() {
    let input = "(add 1)\n(subtract 6 5);";

    let err = tokenize(input).expect_err("`;` should not lex");

    assert_eq!(
        err.error,
        LexicalErrorType::UnrecognizedCharacter { ch: ';' }
    );
    assert_eq!(err.location.start, 22);
}

#[test]
fn test_unterminated_string() {
    let err = tokenize(r#"(foo "bar"#).expect_err("open string should not lex");

    assert_eq!(err.error, LexicalErrorType::UnterminatedString);
    assert_eq!(err.location.start, 5);
}

#[test]
fn test_eof_is_sticky() -> std::result::Result<(), LexicalError> {
    let mut lexer = Lexer::new("42".char_indices().map(|(i, c)| (i as u32, c)));

    let (_, token, _) = lexer.next_token()?;
    assert_eq!(token, Token::Number(String::from("42")));

    for _ in 0..3 {
        let (_, token, _) = lexer.next_token()?;
        assert_eq!(token, Token::Eof);
    }

    Ok(())
}
