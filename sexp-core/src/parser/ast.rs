use std::fmt::Display;

use crate::{
    lexer::prelude::{LexResult, Token},
    parser::prelude::{parse_error, Parse, ParseError, ParseErrorType, Parser},
    utils::prelude::SrcSpan
};

// program -> {<node>}
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Node>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Program {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let start = match &parser.current_token {
            Some((start, _, _)) => *start,
            None => 0
        };
        let mut end = start;

        let mut body = vec![];

        loop {
            match &parser.current_token {
                Some((_, Token::Eof, _)) | None => break,
                Some(_) => {
                    let node = Node::parse(parser)?;

                    end = node.location().end;
                    body.push(node);
                }
            }
        }

        Ok(Self {
            body,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = self.body.iter()
            .map(|node| format!("{}", node))
            .collect::<Vec<String>>();

        write!(f, "{}", body.join("\n"))
    }
}

// node -> <number> | <string> | <call>
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Number(NumberLiteral),
    String(StringLiteral),
    Call(CallExpression),
}

impl<T: Iterator<Item = LexResult>> Parse<T> for Node {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let res = match &parser.current_token {
            Some((start, token, end)) => match token {
                Token::Number(_) => Self::Number(NumberLiteral::parse(parser)?),
                Token::Str(_) => Self::String(StringLiteral::parse(parser)?),
                Token::LParen => Self::Call(CallExpression::parse(parser)?),
                Token::Eof => return parse_error(
                    ParseErrorType::UnexpectedEof,
                    SrcSpan { start: *start, end: *end }
                ),
                _ => return parse_error(
                    ParseErrorType::UnexpectedToken {
                        token: token.clone(),
                        expected: vec!["a Number, a String or `(`".to_string()]
                    },
                    SrcSpan { start: *start, end: *end }
                )
            },
            None => return parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        };

        Ok(res)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
            Self::Call(call) => write!(f, "{call}")
        }
    }
}

impl Node {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number(number) => number.location,
            Self::String(string) => string.location,
            Self::Call(call) => call.location
        }
    }
}

// number -> <digit>{<digit>}
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: String,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for NumberLiteral {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        match parser.next_token() {
            Some((start, Token::Number(value), end)) => Ok(Self {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["a Number".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

// string -> '"' {<any character except '"'>} '"'
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for StringLiteral {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        match parser.next_token() {
            Some((start, Token::Str(value), end)) => Ok(Self {
                value,
                location: SrcSpan { start, end }
            }),
            Some((start, token, end)) => parse_error(
                ParseErrorType::UnexpectedToken {
                    token,
                    expected: vec!["a String".to_string()]
                },
                SrcSpan { start, end }
            ),
            None => parse_error(
                ParseErrorType::UnexpectedEof,
                SrcSpan { start: 0, end: 0 }
            )
        }
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

// call -> "(" <name> {<node>} ")"
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub name: String,
    pub params: Vec<Node>,
    pub location: SrcSpan
}

impl<T: Iterator<Item = LexResult>> Parse<T> for CallExpression {
    fn parse(parser: &mut Parser<T>) -> Result<Self, ParseError> {
        let (start, _) = parser.expect_one(Token::LParen)?;

        let (_, name, _) = parser.expect_name()?;

        let mut params = vec![];

        while !matches!(parser.current_token, Some((_, Token::RParen, _))) {
            params.push(Node::parse(parser)?);
        }

        let (_, end) = parser.expect_one(Token::RParen)?;

        Ok(Self {
            name,
            params,
            location: SrcSpan { start, end }
        })
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.params.iter()
            .map(|param| format!("{}", param))
            .collect::<Vec<String>>();

        if params.len() > 0 {
            write!(f, "({} {})", self.name, params.join(" "))
        } else {
            write!(f, "({})", self.name)
        }
    }
}
