//! Lexer for path-data strings using logos

use logos::Logos;

use crate::error::{PathError, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r\x0C,]+")]
pub enum Token {
    /// A single command letter; whether it is supported is decided later
    #[regex(r"[A-Za-z]", |lex| lex.slice().chars().next())]
    Command(char),

    #[regex(r"[-+]?([0-9]*\.[0-9]+|[0-9]+\.?)([eE][-+]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok().filter(|n| n.is_finite()))]
    Number(f64),
}

/// Lex path data into tokens with spans
///
/// Fails on the first character that is neither a separator, a letter nor
/// part of a number, and on numbers that overflow to infinity.
pub fn lex(input: &str) -> Result<Vec<(Token, Span)>, PathError> {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            // a rejected number keeps its whole slice, which still parses
            Err(()) if input[span.clone()].parse::<f64>().is_ok() => {
                Err(PathError::NumberOutOfRange { span })
            }
            Err(()) => Err(PathError::InvalidCharacter {
                ch: input[span.clone()].chars().next().unwrap_or('\u{fffd}'),
                span,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_commands_and_numbers() {
        assert_eq!(
            tokens("M10 20 L 30,40"),
            vec![
                Token::Command('M'),
                Token::Number(10.0),
                Token::Number(20.0),
                Token::Command('L'),
                Token::Number(30.0),
                Token::Number(40.0),
            ]
        );
    }

    #[test]
    fn test_signed_numbers_split_without_separator() {
        assert_eq!(
            tokens("10-5+3"),
            vec![Token::Number(10.0), Token::Number(-5.0), Token::Number(3.0)]
        );
    }

    #[test]
    fn test_decimal_shorthand() {
        assert_eq!(
            tokens(".5.25 -.75"),
            vec![Token::Number(0.5), Token::Number(0.25), Token::Number(-0.75)]
        );
    }

    #[test]
    fn test_exponent_is_greedy() {
        assert_eq!(
            tokens("1e3 2.5E-2"),
            vec![Token::Number(1000.0), Token::Number(0.025)]
        );
    }

    #[test]
    fn test_letters_are_not_validated() {
        assert_eq!(
            tokens("A z"),
            vec![Token::Command('A'), Token::Command('z')]
        );
    }

    #[test]
    fn test_spans_point_at_source() {
        let lexed = lex("M 1.5").unwrap();
        assert_eq!(lexed[0].1, 0..1);
        assert_eq!(lexed[1].1, 2..5);
    }

    #[test]
    fn test_invalid_character() {
        let err = lex("M0 0 # 1").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidCharacter {
                ch: '#',
                span: 5..6
            }
        );
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        let err = lex("M0 0 L1e999 0").unwrap_err();
        assert_eq!(err, PathError::NumberOutOfRange { span: 6..11 });
    }
}
