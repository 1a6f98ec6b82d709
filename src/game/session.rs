use tracing::debug;

use crate::ai::{Difficulty, Strategy};
use crate::error::MoveError;

use super::board::{Board, Move, CAPACITY};
use super::player::Player;
use super::rules::{self, MIN_PLIES_FOR_WIN};

/// Seat the computer plays in a human-vs-computer game. The human moves first.
pub const COMPUTER_SEAT: Player = Player::Two;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    PlayerVsPlayer,
    Computer(Difficulty),
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::PlayerVsPlayer,
        GameMode::Computer(Difficulty::Easy),
        GameMode::Computer(Difficulty::Medium),
        GameMode::Computer(Difficulty::Hard),
    ];

    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::Computer(Difficulty::Easy) => "Computer (Easy)",
            GameMode::Computer(Difficulty::Medium) => "Computer (Medium)",
            GameMode::Computer(Difficulty::Hard) => "Computer (Hard)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// How a finished game ended, from the statistics point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionResult {
    PlayerWin(Player),
    ComputerWin,
    Draw,
}

/// Emitted once per finished game for the statistics collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEvent {
    pub mode: GameMode,
    pub result: SessionResult,
    pub plies: usize,
}

/// Supplies human moves.
///
/// Columns are expected to be range-checked already, but the session rejects
/// out-of-range and full columns anyway and asks again.
pub trait MoveInput {
    /// Column (0-based) that `player` wants to drop into.
    fn choose_column(&mut self, board: &Board, player: Player) -> usize;

    /// The last column was refused; the next `choose_column` call is the retry.
    fn rejected(&mut self, _column: usize, _error: &MoveError) {}
}

/// One game: owns the board, whose turn it is, and the outcome.
///
/// `InProgress` moves to `Win` or `Draw` and never leaves a terminal state;
/// [`GameSession::restart`] starts a fresh game with the same opponent.
pub struct GameSession {
    board: Board,
    mode: GameMode,
    computer: Option<Box<dyn Strategy>>,
    current_player: Player,
    moves: usize,
    status: GameStatus,
    last_move: Option<Move>,
}

impl GameSession {
    /// Two humans sharing the same input.
    pub fn player_vs_player() -> Self {
        Self::with_opponent(GameMode::PlayerVsPlayer, None)
    }

    /// Human (Player One) against `computer` playing [`COMPUTER_SEAT`].
    pub fn versus_computer(difficulty: Difficulty, computer: Box<dyn Strategy>) -> Self {
        Self::with_opponent(GameMode::Computer(difficulty), Some(computer))
    }

    fn with_opponent(mode: GameMode, computer: Option<Box<dyn Strategy>>) -> Self {
        GameSession {
            board: Board::new(),
            mode,
            computer,
            current_player: Player::One,
            moves: 0,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move, or the side that made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Plies played so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn computer_name(&self) -> Option<&str> {
        self.computer.as_ref().map(|c| c.name())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer.is_some()
            && self.current_player == COMPUTER_SEAT
            && !self.status.is_terminal()
    }

    /// Play a human move in `column`.
    ///
    /// A full or out-of-range column is refused and the session is unchanged.
    pub fn play_column(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(MoveError::OutOfTurn);
        }
        self.commit(column)
    }

    /// Let the configured strategy make its move.
    pub fn play_computer(&mut self) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.current_player != COMPUTER_SEAT {
            return Err(MoveError::OutOfTurn);
        }
        let player = self.current_player;
        let computer = self.computer.as_mut().ok_or(MoveError::OutOfTurn)?;
        let mv = computer.choose_move(&mut self.board, player);
        debug!(strategy = computer.name(), column = mv.column, "computer chose move");
        self.commit(mv.column)
    }

    /// Play one ply, asking `input` for the human move if it is a human's turn.
    ///
    /// Refused columns are reported back through [`MoveInput::rejected`] and
    /// asked for again until a legal one arrives.
    pub fn play_turn(&mut self, input: &mut dyn MoveInput) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return self.play_computer();
        }

        loop {
            let column = input.choose_column(&self.board, self.current_player);
            match self.commit(column) {
                Ok(status) => return Ok(status),
                Err(err) => {
                    debug!(column, %err, "column rejected");
                    input.rejected(column, &err);
                }
            }
        }
    }

    /// Play until the game ends and return the end-of-game event.
    pub fn run(&mut self, input: &mut dyn MoveInput) -> Result<SessionEvent, MoveError> {
        loop {
            if let Some(event) = self.end_event() {
                return Ok(event);
            }
            self.play_turn(input)?;
        }
    }

    /// Clear the board for a new game against the same opponent.
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.moves = 0;
        self.status = GameStatus::InProgress;
        self.last_move = None;
        debug!(mode = self.mode.name(), "game restarted");
    }

    /// The end-of-game event, once the game is over.
    pub fn end_event(&self) -> Option<SessionEvent> {
        let result = match self.status {
            GameStatus::InProgress => return None,
            GameStatus::Draw => SessionResult::Draw,
            GameStatus::Win(player) if self.computer.is_some() && player == COMPUTER_SEAT => {
                SessionResult::ComputerWin
            }
            GameStatus::Win(player) => SessionResult::PlayerWin(player),
        };
        Some(SessionEvent {
            mode: self.mode,
            result,
            plies: self.moves,
        })
    }

    fn commit(&mut self, column: usize) -> Result<GameStatus, MoveError> {
        let player = self.current_player;
        let mv = self.board.drop_piece(column, player)?;
        self.moves += 1;
        self.last_move = Some(mv);
        debug!(
            player = player.name(),
            row = mv.row,
            column = mv.column,
            ply = self.moves,
            "move applied"
        );

        if self.moves >= MIN_PLIES_FOR_WIN && rules::check_win(&self.board, mv, player) {
            self.status = GameStatus::Win(player);
            debug!(winner = player.name(), plies = self.moves, "game won");
        } else if self.moves == CAPACITY {
            self.status = GameStatus::Draw;
            debug!(plies = self.moves, "game drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::DRAW_SEQUENCE;
    use crate::game::{Cell, COLS, ROWS};

    /// Plays a fixed list of columns, in order.
    struct Scripted {
        columns: Vec<usize>,
        next: usize,
        rejections: Vec<(usize, MoveError)>,
    }

    impl Scripted {
        fn new(columns: &[usize]) -> Self {
            Scripted {
                columns: columns.to_vec(),
                next: 0,
                rejections: Vec::new(),
            }
        }
    }

    impl MoveInput for Scripted {
        fn choose_column(&mut self, _board: &Board, _player: Player) -> usize {
            let col = self.columns[self.next];
            self.next += 1;
            col
        }

        fn rejected(&mut self, column: usize, error: &MoveError) {
            self.rejections.push((column, error.clone()));
        }
    }

    impl Strategy for Scripted {
        fn choose_move(&mut self, board: &mut Board, _player: Player) -> Move {
            let col = self.columns[self.next];
            self.next += 1;
            Move::new(board.landing_row(col).unwrap(), col)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_initial_session() {
        let session = GameSession::player_vs_player();
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.move_count(), 0);
        assert!(session.end_event().is_none());
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_players_alternate() {
        let mut session = GameSession::player_vs_player();
        session.play_column(3).unwrap();
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.board().get(ROWS - 1, 3), Cell::Player1);
        session.play_column(3).unwrap();
        assert_eq!(session.board().get(ROWS - 2, 3), Cell::Player2);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.move_count(), 2);
        assert_eq!(session.last_move(), Some(Move::new(ROWS - 2, 3)));
    }

    #[test]
    fn test_full_column_leaves_session_unchanged() {
        let mut session = GameSession::player_vs_player();
        for _ in 0..ROWS {
            session.play_column(0).unwrap();
        }
        let board = *session.board();
        let player = session.current_player();

        assert_eq!(session.play_column(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(session.play_column(COLS), Err(MoveError::InvalidColumn(COLS)));
        assert_eq!(*session.board(), board);
        assert_eq!(session.current_player(), player);
        assert_eq!(session.move_count(), ROWS);
    }

    #[test]
    fn test_play_turn_reprompts_until_legal() {
        let mut session = GameSession::player_vs_player();
        for _ in 0..ROWS {
            session.play_column(0).unwrap();
        }

        let mut input = Scripted::new(&[0, 9, 1]);
        let status = session.play_turn(&mut input).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(
            input.rejections,
            vec![(0, MoveError::ColumnFull(0)), (9, MoveError::InvalidColumn(9))]
        );
        assert_eq!(session.board().get(ROWS - 1, 1), Cell::Player1);
    }

    #[test]
    fn test_many_rejections_do_not_grow_the_stack() {
        let mut session = GameSession::player_vs_player();
        for _ in 0..ROWS {
            session.play_column(0).unwrap();
        }
        let mut columns = vec![0; 100_000];
        columns.push(4);
        let mut input = Scripted::new(&columns);
        session.play_turn(&mut input).unwrap();
        assert_eq!(input.rejections.len(), 100_000);
        assert_eq!(session.last_move(), Some(Move::new(ROWS - 1, 4)));
    }

    #[test]
    fn test_vertical_win_ends_game() {
        let mut session = GameSession::player_vs_player();
        let mut input = Scripted::new(&[3, 2, 3, 4, 3, 2]);
        for _ in 0..6 {
            assert_eq!(session.play_turn(&mut input).unwrap(), GameStatus::InProgress);
        }
        assert_eq!(session.play_column(3).unwrap(), GameStatus::Win(Player::One));
        assert_eq!(session.move_count(), 7);
        assert_eq!(
            session.end_event(),
            Some(SessionEvent {
                mode: GameMode::PlayerVsPlayer,
                result: SessionResult::PlayerWin(Player::One),
                plies: 7,
            })
        );
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut session = GameSession::player_vs_player();
        for col in [0, 1, 0, 1, 0, 1] {
            session.play_column(col).unwrap();
        }
        session.play_column(0).unwrap();
        assert!(session.status().is_terminal());
        let board = *session.board();

        assert_eq!(session.play_column(5), Err(MoveError::GameOver));
        let mut input = Scripted::new(&[5]);
        assert_eq!(session.play_turn(&mut input), Err(MoveError::GameOver));
        assert_eq!(*session.board(), board);
    }

    #[test]
    fn test_draw_after_42nd_piece() {
        let mut session = GameSession::player_vs_player();
        let (last, rest) = DRAW_SEQUENCE.split_last().unwrap();
        for &col in rest {
            assert_eq!(session.play_column(col).unwrap(), GameStatus::InProgress);
        }
        assert_eq!(session.play_column(*last).unwrap(), GameStatus::Draw);
        assert!(rules::is_draw(session.board()));
        assert_eq!(
            session.end_event().map(|e| e.result),
            Some(SessionResult::Draw)
        );
        assert_eq!(session.end_event().map(|e| e.plies), Some(CAPACITY));
    }

    #[test]
    fn test_run_plays_to_completion() {
        let mut session = GameSession::player_vs_player();
        let mut input = Scripted::new(&DRAW_SEQUENCE);
        let event = session.run(&mut input).unwrap();
        assert_eq!(event.result, SessionResult::Draw);
        assert_eq!(event.plies, CAPACITY);
    }

    #[test]
    fn test_computer_win_is_reported_as_computer() {
        let computer = Scripted::new(&[6, 6, 6, 6]);
        let mut session = GameSession::versus_computer(Difficulty::Medium, Box::new(computer));
        let mut human = Scripted::new(&[0, 1, 0, 1]);

        let event = session.run(&mut human).unwrap();
        assert_eq!(event.mode, GameMode::Computer(Difficulty::Medium));
        assert_eq!(event.result, SessionResult::ComputerWin);
        assert_eq!(event.plies, 8);
        assert_eq!(session.status(), GameStatus::Win(COMPUTER_SEAT));
    }

    #[test]
    fn test_human_win_against_computer() {
        let computer = Scripted::new(&[6, 6, 5]);
        let mut session = GameSession::versus_computer(Difficulty::Easy, Box::new(computer));
        let mut human = Scripted::new(&[0, 1, 2, 3]);

        let event = session.run(&mut human).unwrap();
        assert_eq!(event.result, SessionResult::PlayerWin(Player::One));
        assert_eq!(session.computer_name(), Some("Scripted"));
    }

    #[test]
    fn test_turn_order_is_enforced() {
        let mut pvp = GameSession::player_vs_player();
        assert_eq!(pvp.play_computer(), Err(MoveError::OutOfTurn));

        let computer = Scripted::new(&[3]);
        let mut session = GameSession::versus_computer(Difficulty::Hard, Box::new(computer));
        assert_eq!(session.play_computer(), Err(MoveError::OutOfTurn));
        session.play_column(0).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.play_column(1), Err(MoveError::OutOfTurn));
        session.play_computer().unwrap();
        assert_eq!(session.board().get(ROWS - 1, 3), Cell::Player2);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_restart_keeps_mode() {
        let computer = Scripted::new(&[3, 3]);
        let mut session = GameSession::versus_computer(Difficulty::Easy, Box::new(computer));
        session.play_column(0).unwrap();
        session.play_computer().unwrap();
        session.restart();

        assert_eq!(*session.board(), Board::new());
        assert_eq!(session.move_count(), 0);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.mode(), GameMode::Computer(Difficulty::Easy));
        assert!(session.last_move().is_none());
    }
}
