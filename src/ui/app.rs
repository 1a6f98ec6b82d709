use crate::ai::Difficulty;
use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameMode, GameSession, GameStatus, SessionResult, CENTER_COLUMN, COLS};
use crate::stats::{Statistics, StatsSink};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Entries of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(GameMode),
    Statistics,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Play(GameMode::PlayerVsPlayer),
        MenuItem::Play(GameMode::Computer(Difficulty::Easy)),
        MenuItem::Play(GameMode::Computer(Difficulty::Medium)),
        MenuItem::Play(GameMode::Computer(Difficulty::Hard)),
        MenuItem::Statistics,
        MenuItem::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(mode) => mode.name(),
            MenuItem::Statistics => "Statistics",
            MenuItem::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Statistics,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    menu_index: usize,
    session: Option<GameSession>,
    stats: Statistics,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu,
            menu_index: 0,
            session: None,
            stats: Statistics::new(),
            selected_column: CENTER_COLUMN,
            should_quit: false,
            message: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let poll = Duration::from_millis(self.config.ui.poll_interval_ms);
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The frame above already shows the thinking message.
            if self.computer_due() {
                self.play_computer_turn();
                continue;
            }

            if event::poll(poll)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(key),
            Screen::Playing => self.handle_game_key(key),
            Screen::Statistics => self.handle_stats_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(MenuItem::ALL.len() - 1);
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(MenuItem::ALL[self.menu_index]),
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as u8 - b'1') as usize;
                self.menu_index = index;
                self.activate(MenuItem::ALL[index]);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::Play(mode) => self.start_game(mode),
            MenuItem::Statistics => self.screen = Screen::Statistics,
            MenuItem::Quit => self.should_quit = true,
        }
    }

    fn start_game(&mut self, mode: GameMode) {
        let session = match mode {
            GameMode::PlayerVsPlayer => GameSession::player_vs_player(),
            GameMode::Computer(difficulty) => {
                GameSession::versus_computer(difficulty, difficulty.build(&self.config.ai))
            }
        };
        tracing::info!(mode = mode.name(), "new game");
        self.session = Some(session);
        self.selected_column = CENTER_COLUMN;
        self.message = None;
        self.screen = Screen::Playing;
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.session = None;
                self.screen = Screen::Menu;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = (c as u8 - b'1') as usize;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.drop_piece(),
            KeyCode::Char('r') => {
                if let Some(session) = self.session.as_mut() {
                    session.restart();
                }
                self.selected_column = CENTER_COLUMN;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => self.stats.clear(),
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.screen = Screen::Menu,
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let column = self.selected_column;
        let result = session.play_column(column);
        self.after_move(result, column);
    }

    /// True when the computer should reply before the next key is read.
    pub fn computer_due(&self) -> bool {
        self.screen == Screen::Playing && self.session.as_ref().is_some_and(|s| s.is_computer_turn())
    }

    pub fn play_computer_turn(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.play_computer();
        let column = session.last_move().map_or(CENTER_COLUMN, |mv| mv.column);
        self.after_move(result, column);
    }

    fn after_move(&mut self, result: Result<GameStatus, MoveError>, column: usize) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        match result {
            Ok(GameStatus::InProgress) => {
                self.message = session
                    .is_computer_turn()
                    .then(|| "Computer is thinking...".to_string());
            }
            Ok(_) => {
                if let Some(event) = session.end_event() {
                    self.message = Some(outcome_message(event.result));
                    self.stats.record(&event);
                }
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some(format!("Column {} is full! Choose another.", column + 1));
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(MoveError::OutOfTurn) => {
                self.message = Some("Wait for the computer to move.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Menu => super::menu_view::render(frame, self.menu_index),
            Screen::Playing => {
                if let Some(session) = self.session.as_ref() {
                    super::game_view::render(frame, session, self.selected_column, self.message());
                }
            }
            Screen::Statistics => super::stats_view::render(frame, &self.stats),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

fn outcome_message(result: SessionResult) -> String {
    match result {
        SessionResult::PlayerWin(player) => format!("{} wins!", player.name()),
        SessionResult::ComputerWin => "The computer wins!".to_string(),
        SessionResult::Draw => "It's a draw!".to_string(),
    }
}
