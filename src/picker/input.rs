//! Keyboard input handling and the session loop.
//!
//! Each key goes through three stages: `Ctrl-C` always cancels, then the
//! caller's custom handlers get a chance, then the built-in bindings.
//! The loop blocks on [`Backend::read_key`] and nowhere else.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::config::PickerConfig;
use crate::error::{PickError, PickResult};
use crate::terminal::{Backend, CrosstermBackend};

use super::builder::{build_root, Options};
use super::menu::{ActionOutcome, PickAction, Session};
use super::output::Picked;

/// Caller-registered key handler.
///
/// Returning `Ok(Some(result))` ends the session with
/// [`PickOutcome::Custom`]; `Ok(None)` keeps the loop running and skips
/// the built-in binding for that key.
pub type KeyHandler<R> = Box<dyn FnMut(&mut Session) -> anyhow::Result<Option<R>>>;

/// How a picker session ended
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome<R = ()> {
    /// Confirmed with ENTER
    Picked(Picked),
    /// Quit with ESC, `q` or `Ctrl-C`
    Cancelled,
    /// A custom handler ended the session
    Custom(R),
}

impl<R> PickOutcome<R> {
    pub fn picked(self) -> Option<Picked> {
        match self {
            PickOutcome::Picked(picked) => Some(picked),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PickOutcome::Cancelled)
    }
}

/// Convert a keyboard event to a built-in action
pub fn key_to_action(key: KeyEvent) -> Option<PickAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(PickAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(PickAction::Down),
        KeyCode::Char(' ') | KeyCode::Right => Some(PickAction::Toggle),
        KeyCode::Enter => Some(PickAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(PickAction::Quit),
        _ => None,
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Table key for a custom handler. SHIFT is dropped for character keys,
/// whose case already carries it.
fn binding(code: KeyCode, mut modifiers: KeyModifiers) -> (KeyCode, KeyModifiers) {
    if matches!(code, KeyCode::Char(_)) {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    (code, modifiers)
}

/// Interactive tree picker.
///
/// `R` is the result type custom key handlers may end the session with.
pub struct Picker<R = ()> {
    session: Session,
    handlers: HashMap<(KeyCode, KeyModifiers), KeyHandler<R>>,
}

impl<R> Picker<R> {
    /// Build the tree from `options` and validate `config` against it.
    ///
    /// Fails with [`PickError::InvalidTree`] or
    /// [`PickError::Configuration`]; nothing touches the terminal yet.
    pub fn new<T>(options: Options<T>, config: PickerConfig) -> PickResult<Self> {
        let root = build_root(options, config.root_name.as_deref())?;
        let session = Session::new(root, config)?;
        Ok(Self {
            session,
            handlers: HashMap::new(),
        })
    }

    /// Bind `handler` to `key` pressed without modifiers. Alt-`key` and
    /// Ctrl-`key` do not trigger it; see [`Picker::register_with_modifiers`].
    /// A later registration for the same key replaces the earlier one.
    pub fn register(
        &mut self,
        key: KeyCode,
        handler: impl FnMut(&mut Session) -> anyhow::Result<Option<R>> + 'static,
    ) {
        self.register_with_modifiers(key, KeyModifiers::NONE, handler);
    }

    /// Bind `handler` to `key` pressed with exactly `modifiers`.
    /// `Ctrl-C` stays the interrupt and never reaches a handler.
    pub fn register_with_modifiers(
        &mut self,
        key: KeyCode,
        modifiers: KeyModifiers,
        handler: impl FnMut(&mut Session) -> anyhow::Result<Option<R>> + 'static,
    ) {
        if self
            .handlers
            .insert(binding(key, modifiers), Box::new(handler))
            .is_some()
        {
            debug!(?key, ?modifiers, "replaced custom key handler");
        }
    }

    /// Builder form of [`Picker::register`]
    pub fn with_handler(
        mut self,
        key: KeyCode,
        handler: impl FnMut(&mut Session) -> anyhow::Result<Option<R>> + 'static,
    ) -> Self {
        self.register(key, handler);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The answer ENTER would return right now
    pub fn selected(&self) -> Picked {
        self.session.selected()
    }

    /// Feed one key to the picker. Returns the outcome once the session
    /// ends, `None` while it keeps running.
    pub fn dispatch(&mut self, key: KeyEvent) -> PickResult<Option<PickOutcome<R>>> {
        if is_interrupt(&key) {
            debug!("interrupt");
            return Ok(Some(PickOutcome::Cancelled));
        }

        if let Some(handler) = self.handlers.get_mut(&binding(key.code, key.modifiers)) {
            debug!(key = ?key.code, modifiers = ?key.modifiers, "custom handler");
            return match handler(&mut self.session) {
                Ok(Some(result)) => Ok(Some(PickOutcome::Custom(result))),
                Ok(None) => Ok(None),
                Err(e) => Err(PickError::Handler(e)),
            };
        }

        let Some(action) = key_to_action(key) else {
            return Ok(None);
        };
        debug!(key = ?key.code, ?action, cursor = self.session.cursor(), "built-in action");

        Ok(match self.session.handle_action(action) {
            ActionOutcome::Continue => None,
            ActionOutcome::Confirmed => Some(PickOutcome::Picked(self.session.selected())),
            ActionOutcome::Cancelled => Some(PickOutcome::Cancelled),
        })
    }

    /// Run the session on `backend` until it ends
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> PickResult<PickOutcome<R>> {
        let (_, rows) = backend.size()?;
        self.session.fit_viewport(rows)?;
        let supports_unicode = backend.supports_unicode();

        info!(
            rows = self.session.row_count(),
            multiselect = self.session.config().multiselect,
            handlers = self.handlers.len(),
            "picker session started"
        );

        loop {
            let (_, rows) = backend.size()?;
            self.session.resize(rows);
            backend.draw(&self.session.frame(supports_unicode))?;

            let key = backend.read_key()?;
            if let Some(outcome) = self.dispatch(key)? {
                let kind = match &outcome {
                    PickOutcome::Picked(_) => "picked",
                    PickOutcome::Cancelled => "cancelled",
                    PickOutcome::Custom(_) => "custom",
                };
                info!(outcome = kind, "picker session finished");
                return Ok(outcome);
            }
        }
    }

    /// Run the session on the real terminal
    pub fn start(&mut self) -> PickResult<PickOutcome<R>> {
        let mut backend = CrosstermBackend::enter()?;
        self.run(&mut backend)
    }
}

/// Construct a [`Picker`] and run it on the terminal.
///
/// ```no_run
/// use treepick::{pick, Node, Options, PickerConfig};
///
/// let root = Node::with_children("Root", vec![Node::new("Child")]);
/// let config = PickerConfig {
///     title: Some("Please choose an option:".to_string()),
///     ..Default::default()
/// };
/// let outcome = pick(Options::tree(root), config)?;
/// # Ok::<(), treepick::PickError>(())
/// ```
pub fn pick<T>(options: Options<T>, config: PickerConfig) -> PickResult<PickOutcome> {
    Picker::<()>::new(options, config)?.start()
}
