//! Terminal boundary.
//!
//! The picker talks to the screen only through [`Backend`]: "how big is
//! the screen", "paint this frame" and "give me the next key".
//! [`CrosstermBackend`] is the real terminal; tests drive the picker with
//! a scripted backend instead.
//!
//! The picker draws on stderr. Stdout stays free for the result, so
//! `treepick opts.json > out.json` captures only the answer.

use std::io::{self, Stderr, Write};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use is_terminal::IsTerminal;

use crate::picker::render::{truncate_to_width, Frame};
use crate::theme::colors;

/// Screen access used by the session loop
pub trait Backend {
    /// Terminal size as `(columns, rows)`
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Paint one frame
    fn draw(&mut self, frame: &Frame) -> io::Result<()>;

    /// Block until the next key press
    fn read_key(&mut self) -> io::Result<KeyEvent>;

    /// Whether box-drawing guides can be used
    fn supports_unicode(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
}

/// Capabilities of the stream the picker draws on (stderr)
pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            if v == "c" || v == "posix" {
                return false;
            }
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}

/// Raw-mode, alternate-screen terminal drawn on stderr.
///
/// The terminal is restored when the backend is dropped, including when
/// the session ends with an error.
pub struct CrosstermBackend {
    out: Stderr,
    caps: TerminalCapabilities,
}

impl CrosstermBackend {
    pub fn enter() -> io::Result<Self> {
        let caps = detect_capabilities();
        terminal::enable_raw_mode()?;
        let mut out = io::stderr();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self { out, caps })
    }

    pub fn capabilities(&self) -> TerminalCapabilities {
        self.caps
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let (cols, _) = terminal::size()?;
        let max_width = usize::from(cols).saturating_sub(2);
        let color = self.caps.supports_color;

        queue!(self.out, terminal::Clear(ClearType::All))?;

        let mut y: u16 = 1;
        for line in &frame.title {
            queue!(self.out, cursor::MoveTo(1, y))?;
            if color {
                queue!(self.out, SetForegroundColor(colors::TITLE))?;
            }
            queue!(self.out, Print(truncate_to_width(line, max_width)), ResetColor)?;
            y = y.saturating_add(1);
        }

        for row in &frame.rows {
            queue!(self.out, cursor::MoveTo(1, y))?;
            if row.marked {
                if color {
                    queue!(
                        self.out,
                        SetForegroundColor(frame.foreground),
                        SetBackgroundColor(frame.background)
                    )?;
                } else {
                    queue!(
                        self.out,
                        SetForegroundColor(Color::Reset),
                        SetAttribute(Attribute::Reverse)
                    )?;
                }
            }
            queue!(
                self.out,
                Print(truncate_to_width(&row.text, max_width)),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
            y = y.saturating_add(1);
        }

        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }

    fn supports_unicode(&self) -> bool {
        self.caps.supports_unicode
    }
}
