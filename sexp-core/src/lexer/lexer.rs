use super::error::{LexicalError, LexicalErrorType};
use super::token::Token;
use std::fmt::Display;
use crate::utils::prelude::SrcSpan;

pub type Spanned = (u32, Token, u32);
pub type LexResult = std::result::Result<Spanned, LexicalError>;

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        return lexer;
    }

    pub fn next_token(&mut self) -> LexResult {
		let span = match self.ch {
			Some(ch) => match ch {
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'"' => return self.lex_string(),
				'0'..='9' => {
					return Ok(self.lex_number());
				},
				'a'..='z' | 'A'..='Z' => {
					return Ok(self.lex_name());
				},
				'\n' | ' ' | '\t' | '\x0C' | '\r' => {
					while matches!(self.ch, Some(ch) if ch.is_ascii_whitespace()) {
						let _ = self.next_char();
					}

					return self.next_token();
				}
				c => {
					let location = self.position;
					return Err(LexicalError {
						error: LexicalErrorType::UnrecognizedCharacter { ch: c },
						location: SrcSpan {
							start: location,
							end: location,
						},
					});
				}
			},
			None => {
				self.eat_one_char(Token::Eof)
			}
		};

		Ok(span)
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += 1;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_name(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut name = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_alphabetic() => name.push(self.next_char().unwrap()),
				_ => break
			}
		}

        let end_pos = self.position;

        (start_pos, Token::Name(name), end_pos)
	}

	fn lex_number(&mut self) -> Spanned {
		let start_pos = self.position;
		let mut value = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_digit() => value.push(self.next_char().unwrap()),
				_ => break
			}
		}

		let end_pos = self.position;

		(start_pos, Token::Number(value), end_pos)
	}

	fn lex_string(&mut self) -> LexResult {
		let start_pos = self.position;

		self.next_char(); // skip quote

		let mut value = String::new();

		while Some('"') != self.ch {
			match self.next_char() {
				Some(ch) => value.push(ch),
				None => return Err(LexicalError {
					error: LexicalErrorType::UnterminatedString,
					location: SrcSpan::from(start_pos, self.position)
				})
			}
		}

		self.next_char(); // skip quote

		let end_pos = self.position;

		Ok((start_pos, Token::Str(value), end_pos))
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		let token = self.next_token();

		Some(token)
	}
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, LexicalError> {
	let mut lexer = Lexer::new(src.char_indices().map(|(i, c)| (i as u32, c)));
	let mut tokens = vec![];

	loop {
		let (start, token, end) = lexer.next_token()?;

		if token == Token::Eof {
			break;
		}

		tokens.push((start, token, end));
	}

	Ok(tokens)
}
