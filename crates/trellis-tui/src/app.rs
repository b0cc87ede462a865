use crate::events::{is_force_quit, Event, EventHandler};
use crate::handlers::DragSession;
use crate::state::{ExecuteOutcome, StateManager};
use crate::ui;
use crate::view_model::{self, BoardView, Focus};
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use trellis_core::{
    AppConfig, InputState, LogEntry, Loggable, SelectionState, TrellisResult, Viewport,
};
use trellis_domain::commands::Command;
use trellis_domain::{Board, Card, List};

const MAX_LOG_ENTRIES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditingCard,
    RenameList,
    Dragging,
    Help,
}

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub input: InputState,
    pub state_manager: StateManager,
    pub list_selection: SelectionState,
    pub card_selection: SelectionState,
    pub list_viewport: Viewport,
    pub drag: Option<DragSession>,
    logs: Vec<LogEntry>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_state_manager(StateManager::from_config(config))
    }

    pub fn with_state_manager(state_manager: StateManager) -> Self {
        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            input: InputState::new(),
            state_manager,
            list_selection: SelectionState::new(),
            card_selection: SelectionState::new(),
            list_viewport: Viewport::default(),
            drag: None,
            logs: Vec::new(),
        };
        app.sync_selection();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn board(&self) -> &Board {
        &self.state_manager.state().board
    }

    pub fn focused_list(&self) -> Option<&List> {
        self.list_selection
            .get()
            .and_then(|idx| self.board().lists.get(idx))
    }

    pub fn focused_card(&self) -> Option<&Card> {
        let list = self.focused_list()?;
        self.card_selection.get().and_then(|idx| list.cards.get(idx))
    }

    /// Render tree for the current frame. While dragging, this is the board as
    /// it would look if the item were dropped at the current target.
    pub fn view(&self) -> BoardView {
        let state = self.state_manager.state();
        match &self.drag {
            Some(session) => {
                let preview = session.preview(state);
                let focus = session.focus_in(&preview);
                view_model::build(&preview, &focus)
            }
            None => view_model::build(
                state,
                &Focus {
                    list: self.list_selection.get(),
                    card: self.card_selection.get(),
                    dragging: None,
                },
            ),
        }
    }

    /// Execute a command through the state manager and keep selections valid.
    pub(crate) fn execute(&mut self, command: impl Command) -> ExecuteOutcome {
        let outcome = self.state_manager.execute(&command);
        if outcome == ExecuteOutcome::BoardChanged {
            self.add_log(command.description());
        }
        self.sync_selection();
        outcome
    }

    /// Clamp list and card selection to the current board.
    pub(crate) fn sync_selection(&mut self) {
        let list_count = self.board().lists.len();
        self.list_selection.clamp(list_count);
        let card_count = self.focused_list().map_or(0, List::len);
        self.card_selection.clamp(card_count);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        use crossterm::event::KeyCode;

        if is_force_quit(&key) {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::EditingCard => self.handle_editing_key(key),
            AppMode::RenameList => self.handle_rename_list_key(key.code),
            AppMode::Dragging => self.handle_drag_key(key.code),
            AppMode::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.mode = AppMode::Normal;
                }
            }
        }
    }

    pub async fn run(&mut self) -> TrellisResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TrellisResult<()> {
        let mut events = EventHandler::new();
        let mut snapshots = self.state_manager.subscribe();
        let mut needs_redraw = true;

        while !self.should_quit {
            if needs_redraw || snapshots.has_changed().unwrap_or(false) {
                let _ = snapshots.borrow_and_update();
                terminal.draw(|frame| ui::render(self, frame))?;
                needs_redraw = false;
            }

            match events.next().await {
                Some(Event::Key(key)) => {
                    self.handle_key_event(key);
                    needs_redraw = true;
                }
                Some(Event::Resize) => needs_redraw = true,
                Some(Event::Tick) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

impl Loggable for App {
    fn add_log(&mut self, message: String) {
        tracing::info!("{}", message);
        self.logs.push(LogEntry::new(message));
        if self.logs.len() > MAX_LOG_ENTRIES {
            let excess = self.logs.len() - MAX_LOG_ENTRIES;
            self.logs.drain(..excess);
        }
    }

    fn get_logs(&self) -> &[LogEntry] {
        &self.logs
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
