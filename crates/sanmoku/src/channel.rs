//! Console I/O boundary for a game session.

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument, trace};

/// Where the controller reads moves from and writes the board to.
pub trait InputChannel {
    /// Writes text, ending it with a newline if it lacks one.
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Clears the display before a fresh board, if supported.
    fn clear(&mut self) -> io::Result<()>;

    /// Prints `prompt` and reads one line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Line-oriented console over any reader/writer pair.
///
/// Flushes its writer when dropped, which ends the session's use of the
/// console on every exit path.
pub struct ConsoleChannel<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleChannel<R, W> {
    /// Wraps a reader and writer.
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        debug!(clear_screen, "Console channel acquired");
        Self {
            reader,
            writer,
            clear_screen,
        }
    }
}

impl ConsoleChannel<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> InputChannel for ConsoleChannel<R, W> {
    fn show(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
            self.writer.flush()?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        // Invalid UTF-8 becomes replacement characters and fails parsing.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        trace!(%line, "Line read");
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Drop for ConsoleChannel<R, W> {
    fn drop(&mut self) {
        let _ = self.writer.flush();
        debug!("Console channel released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_until_exhausted() {
        let mut out = Vec::new();
        let mut channel = ConsoleChannel::new("1 1\r\n2 2\n".as_bytes(), &mut out, false);
        assert_eq!(channel.read_line("> ").unwrap(), Some("1 1".to_string()));
        assert_eq!(channel.read_line("> ").unwrap(), Some("2 2".to_string()));
        assert_eq!(channel.read_line("> ").unwrap(), None);
        drop(channel);
        assert_eq!(String::from_utf8(out).unwrap(), "> > > ");
    }

    #[test]
    fn test_invalid_utf8_line_is_still_a_line() {
        let input: &[u8] = &[0xff, 0xfe, b'\n', b'1', b' ', b'1', b'\n'];
        let mut out = Vec::new();
        let mut channel = ConsoleChannel::new(input, &mut out, false);
        assert_eq!(
            channel.read_line("> ").unwrap(),
            Some("\u{FFFD}\u{FFFD}".to_string())
        );
        assert_eq!(channel.read_line("> ").unwrap(), Some("1 1".to_string()));
        assert_eq!(channel.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_show_appends_newline() {
        let mut out = Vec::new();
        let mut channel = ConsoleChannel::new("".as_bytes(), &mut out, false);
        channel.show("hello").unwrap();
        channel.show("board\n").unwrap();
        drop(channel);
        assert_eq!(String::from_utf8(out).unwrap(), "hello\nboard\n");
    }

    #[test]
    fn test_clear_respects_setting() {
        let mut out = Vec::new();
        ConsoleChannel::new("".as_bytes(), &mut out, false)
            .clear()
            .unwrap();
        assert!(out.is_empty());

        ConsoleChannel::new("".as_bytes(), &mut out, true)
            .clear()
            .unwrap();
        assert!(!out.is_empty());
    }
}
