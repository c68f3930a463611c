//! Command interpreter for path data
//!
//! Walks the token stream once, threading a [`PenState`] (active command,
//! cursor, subpath start) through every operand group. Any structural
//! problem aborts the whole path; nothing partial is returned. A path must
//! begin with a move, so empty input is an error too.

use super::lexer::{lex, Token};
use super::{Path, Point, Verb};
use crate::error::{PathError, Span};

/// Commands that take operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Move,
    Line,
    Horizontal,
    Vertical,
    Cubic,
}

impl CommandKind {
    fn arity(self) -> usize {
        match self {
            CommandKind::Move | CommandKind::Line => 2,
            CommandKind::Horizontal | CommandKind::Vertical => 1,
            CommandKind::Cubic => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveCommand {
    kind: CommandKind,
    relative: bool,
    /// Letter as written, for error messages
    letter: char,
}

impl ActiveCommand {
    fn from_letter(letter: char) -> Option<Self> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::Move,
            'L' => CommandKind::Line,
            'H' => CommandKind::Horizontal,
            'V' => CommandKind::Vertical,
            'C' => CommandKind::Cubic,
            _ => return None,
        };
        Some(Self {
            kind,
            relative: letter.is_ascii_lowercase(),
            letter,
        })
    }

    /// Command that consumes the next group without a new letter
    fn repeated(self) -> Self {
        match self.kind {
            CommandKind::Move => Self {
                kind: CommandKind::Line,
                ..self
            },
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct PenState {
    command: Option<ActiveCommand>,
    cursor: Point,
    start: Option<Point>,
    moved: bool,
}

impl PenState {
    fn offset(&self, relative: bool) -> Point {
        if relative {
            self.cursor
        } else {
            Point::ORIGIN
        }
    }

    /// Execute one operand group and return the state that follows it
    fn apply(mut self, cmd: ActiveCommand, args: &[f64], path: &mut Path) -> Self {
        let base = self.offset(cmd.relative);
        match cmd.kind {
            CommandKind::Move => {
                let p = base + Point::new(args[0], args[1]);
                path.push(p, Verb::MoveTo);
                self.cursor = p;
                self.start = Some(p);
                self.moved = true;
            }
            CommandKind::Line => {
                let p = base + Point::new(args[0], args[1]);
                path.push(p, Verb::LineTo);
                self.cursor = p;
            }
            CommandKind::Horizontal => {
                self.cursor.x = base.x + args[0];
                path.push(self.cursor, Verb::LineTo);
            }
            CommandKind::Vertical => {
                self.cursor.y = base.y + args[0];
                path.push(self.cursor, Verb::LineTo);
            }
            CommandKind::Cubic => {
                let c1 = base + Point::new(args[0], args[1]);
                let c2 = base + Point::new(args[2], args[3]);
                let end = base + Point::new(args[4], args[5]);
                path.push(c1, Verb::CubicTo);
                path.push(c2, Verb::CubicTo);
                path.push(end, Verb::CubicTo);
                self.cursor = end;
            }
        }
        self.command = Some(cmd.repeated());
        self
    }

    fn close(mut self, path: &mut Path) -> Self {
        let start = *self.start.get_or_insert(self.cursor);
        path.push(start, Verb::Close);
        self.cursor = start;
        self.command = None;
        self
    }
}

/// Read one operand group of `arity` numbers starting at `pos`
///
/// `anchor` is the span reported when the group is empty (the command letter).
fn read_group(
    tokens: &[(Token, Span)],
    pos: usize,
    cmd: ActiveCommand,
    anchor: &Span,
) -> Result<[f64; 6], PathError> {
    let arity = cmd.kind.arity();
    let mut args = [0.0; 6];

    for (found, slot) in args.iter_mut().take(arity).enumerate() {
        match tokens.get(pos + found) {
            Some((Token::Number(n), _)) => *slot = *n,
            _ => {
                let span = if found == 0 {
                    anchor.clone()
                } else {
                    let first = &tokens[pos].1;
                    let last = &tokens[pos + found - 1].1;
                    first.start..last.end
                };
                return Err(PathError::IncompleteOperands {
                    command: cmd.letter,
                    expected: arity,
                    found,
                    span,
                });
            }
        }
    }

    Ok(args)
}

/// Interpret an already lexed token stream
pub fn interpret(tokens: &[(Token, Span)]) -> Result<Path, PathError> {
    let mut path = Path::new();
    let mut state = PenState::default();
    let mut pos = 0;

    while pos < tokens.len() {
        let (token, span) = &tokens[pos];
        let cmd = match *token {
            Token::Command(letter) => {
                pos += 1;
                if letter.eq_ignore_ascii_case(&'z') {
                    if !state.moved {
                        return Err(PathError::MissingMove {
                            command: Some(letter),
                            span: span.clone(),
                        });
                    }
                    state = state.close(&mut path);
                    continue;
                }
                let cmd = ActiveCommand::from_letter(letter).ok_or(
                    PathError::UnsupportedCommand {
                        command: letter,
                        span: span.clone(),
                    },
                )?;
                if !state.moved && cmd.kind != CommandKind::Move {
                    return Err(PathError::MissingMove {
                        command: Some(letter),
                        span: span.clone(),
                    });
                }
                cmd
            }
            Token::Number(_) => state
                .command
                .ok_or_else(|| PathError::MissingCommand { span: span.clone() })?,
        };

        let args = read_group(tokens, pos, cmd, span)?;
        let arity = cmd.kind.arity();
        pos += arity;
        state = state.apply(cmd, &args[..arity], &mut path);
    }

    // only reachable without tokens; every other path to here has moved
    if !state.moved {
        return Err(PathError::MissingMove {
            command: None,
            span: 0..0,
        });
    }

    Ok(path)
}

/// Parse path data into a path of absolute vertices
pub fn parse_path(d: &str) -> Result<Path, PathError> {
    let tokens = lex(d)?;
    interpret(&tokens)
}
