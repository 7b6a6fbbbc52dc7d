//! Explicit state machine shared by the open and close scanners.
//!
//! ```text
//! Start --'{'--> SeenOpenByte --'{'--> InContent --'}'--> SeenCloseByte --'}'--> Accept
//!                                       |    ^
//!                                       +----+ plain byte / valid UTF-8 sequence
//! ```
//!
//! Every other byte (including `\n` and EOF) moves to `Reject`. The open
//! scanner enters at `Start`; the close scanner enters directly at
//! `InContent`. Each non-terminal step consumes at least one byte, so a run
//! terminates after at most `len - offset` steps.

use crate::cursor::Cursor;
use crate::utf8;

/// Scanner state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum State {
    /// Expecting the first `{`.
    Start,
    /// Expecting the second `{`.
    SeenOpenByte,
    /// Inside the directive content.
    InContent,
    /// Saw a `}` in content; the next byte must be `}`.
    SeenCloseByte,
    Accept,
    Reject,
}

/// One scan over a cursor.
///
/// Holds the cursor, the current state, and the content boundaries: where
/// the content started and the marker at which the most recent `}` was seen.
pub(crate) struct Machine<'a> {
    cursor: Cursor<'a>,
    state: State,
    content_start: usize,
    marker: usize,
}

impl<'a> Machine<'a> {
    /// Machine that must see `{{` before any content.
    pub(crate) fn open(cursor: Cursor<'a>) -> Self {
        Self::new(cursor, State::Start)
    }

    /// Machine whose content begins at the cursor.
    pub(crate) fn close(cursor: Cursor<'a>) -> Self {
        Self::new(cursor, State::InContent)
    }

    fn new(cursor: Cursor<'a>, state: State) -> Self {
        let pos = cursor.pos();
        Self {
            cursor,
            state,
            content_start: pos,
            marker: pos,
        }
    }

    /// Drive the machine to a terminal state.
    ///
    /// Returns the number of content bytes between the content start and the
    /// closing `}}` on acceptance, `None` on rejection.
    pub(crate) fn run(mut self) -> Option<usize> {
        loop {
            self.state = self.step();
            match self.state {
                State::Accept => return Some(self.marker - self.content_start),
                State::Reject => return None,
                _ => {}
            }
        }
    }

    /// Compute the next state, consuming the bytes the transition covers.
    fn step(&mut self) -> State {
        match self.state {
            State::Start => self.expect(b'{', State::SeenOpenByte),
            State::SeenOpenByte => {
                let next = self.expect(b'{', State::InContent);
                self.content_start = self.cursor.pos();
                next
            }
            State::InContent => self.content(),
            State::SeenCloseByte => self.expect(b'}', State::Accept),
            terminal @ (State::Accept | State::Reject) => terminal,
        }
    }

    fn expect(&mut self, byte: u8, next: State) -> State {
        if self.cursor.current() == byte {
            self.cursor.advance();
            next
        } else {
            State::Reject
        }
    }

    fn content(&mut self) -> State {
        match self.cursor.eat_plain() {
            b'}' => {
                self.marker = self.cursor.pos();
                self.cursor.advance();
                State::SeenCloseByte
            }
            // `eat_plain` only stops on an ASCII byte for `\n`, `}`, or EOF.
            0x00..=0x7F => State::Reject,
            _ => {
                if utf8::eat_sequence(&mut self.cursor) {
                    State::InContent
                } else {
                    State::Reject
                }
            }
        }
    }
}
