//! Event loop translating terminal input into session events and redrawing.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self as term_event, Event as TermEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use grid_core::{ErrorSeverity, GridError, InteractionEvent, Position, Session, Transition};
use tracing::{debug, error, info, warn};

use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    Status,
    layout::Panels,
    terminal::Tui,
    theme::Theme,
    ui::{self, ViewState},
};

const POLL_INTERVAL_MS: u64 = 16;

/// What the loop should do after handling one terminal event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

pub struct EventLoop {
    session: Session,
    input: InputHandler,
    theme: Theme,
    hovered: Option<Position>,
    status: Option<Status>,
    panels: Option<Panels>,
}

impl EventLoop {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input: InputHandler::new(),
            theme: Theme::new(),
            hovered: None,
            status: None,
            panels: None,
        }
    }

    /// Runs until the user quits. Internal errors from the session end the
    /// loop and are returned to the caller.
    pub fn run(mut self, terminal: &mut Tui) -> Result<Session> {
        self.render(terminal)?;

        loop {
            if !term_event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }

            let flow = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key(self.input.handle_key(key))?
                }
                TermEvent::Mouse(mouse) => self.handle_mouse(mouse)?,
                TermEvent::Resize(_, _) => Flow::Redraw,
                _ => Flow::Continue,
            };

            match flow {
                Flow::Quit => break,
                Flow::Redraw => self.render(terminal)?,
                Flow::Continue => {}
            }
        }

        info!(phase = %self.session.phase(), "event loop finished");
        Ok(self.session)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view = ViewState {
            hovered: self.hovered,
            status: self.status.as_ref(),
            theme: &self.theme,
        };
        self.panels = Some(ui::render(terminal, &self.session, &view)?);
        Ok(())
    }

    fn handle_key(&mut self, action: KeyAction) -> Result<Flow> {
        match action {
            KeyAction::Quit => Ok(Flow::Quit),
            KeyAction::NextAlgorithm => self.cycle_algorithm(1),
            KeyAction::PrevAlgorithm => self.cycle_algorithm(-1),
            KeyAction::ToggleDiagonal => self.dispatch(InteractionEvent::AllowDiagonalToggled),
            KeyAction::None => Ok(Flow::Continue),
        }
    }

    fn cycle_algorithm(&mut self, step: isize) -> Result<Flow> {
        let Some(next) = next_algorithm(&self.session.algorithms(), self.session.algorithm(), step)
        else {
            return Ok(Flow::Continue);
        };
        self.dispatch(InteractionEvent::AlgorithmChanged(next))
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Flow> {
        let position = self
            .panels
            .and_then(|panels| panels.grid.hit_test(mouse.column, mouse.row));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(tile) = position.and_then(|p| self.session.tile(p)) else {
                    return Ok(Flow::Continue);
                };
                self.dispatch(InteractionEvent::TileClicked(tile))
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if position == self.hovered {
                    return Ok(Flow::Continue);
                }
                self.hovered = position;
                match position.and_then(|p| self.session.tile(p)) {
                    Some(tile) => {
                        self.dispatch(InteractionEvent::MouseEnteredTile(tile))?;
                        Ok(Flow::Redraw)
                    }
                    None => Ok(Flow::Redraw),
                }
            }
            _ => Ok(Flow::Continue),
        }
    }

    /// Dispatches `event`, turning validation failures into a status line and
    /// propagating everything else.
    fn dispatch(&mut self, event: InteractionEvent) -> Result<Flow> {
        match self.session.dispatch(event) {
            Ok(Transition::Ignored) => Ok(Flow::Continue),
            Ok(transition) => {
                debug!(%transition, "dispatched");
                self.status = status_for(transition, &self.session);
                Ok(Flow::Redraw)
            }
            Err(err) => match err.severity() {
                ErrorSeverity::Validation => {
                    warn!(code = err.error_code(), error = %err, "event rejected");
                    self.status = Some(Status::error(err.to_string()));
                    Ok(Flow::Redraw)
                }
                ErrorSeverity::Internal | ErrorSeverity::Fatal => {
                    error!(code = err.error_code(), error = %err, "session failure");
                    Err(err.into())
                }
            },
        }
    }
}

/// Name `step` places away from `current` in `names`, wrapping around.
fn next_algorithm(names: &[&str], current: &str, step: isize) -> Option<String> {
    if names.is_empty() {
        return None;
    }
    let len = names.len() as isize;
    let index = names.iter().position(|name| *name == current).unwrap_or(0) as isize;
    let next = (index + step).rem_euclid(len) as usize;
    names.get(next).map(|name| (*name).to_owned())
}

fn status_for(transition: Transition, session: &Session) -> Option<Status> {
    match transition {
        Transition::Committed if session.path().is_empty() => {
            Some(Status::info("No path: end is unreachable"))
        }
        Transition::Committed => Some(Status::info(format!(
            "Path committed: {} cells",
            session.path().len()
        ))),
        Transition::AlgorithmChanged => {
            Some(Status::info(format!("Algorithm: {}", session.algorithm())))
        }
        Transition::DiagonalToggled => Some(Status::info(if session.allow_diagonal() {
            "Diagonal movement on"
        } else {
            "Diagonal movement off"
        })),
        Transition::Started | Transition::Restarted => {
            Some(Status::info("Start selected, move to preview the end"))
        }
        Transition::EndPreviewed | Transition::Ignored => None,
    }
}
