use crate::ai::Difficulty;
use crate::game::{GameMode, Player, SessionEvent, SessionResult};

/// Receives one event per finished game.
pub trait StatsSink {
    fn record(&mut self, event: &SessionEvent);
}

/// Tallies for a single game mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ModeRecord {
    pub games: u32,
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub computer_wins: u32,
    pub draws: u32,
    pub total_plies: u64,
}

impl ModeRecord {
    /// Mean game length in plies.
    pub fn average_plies(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_plies as f32 / self.games as f32
    }
}

/// In-memory statistics for the current run, one record per game mode.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    records: [ModeRecord; GameMode::ALL.len()],
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(mode: GameMode) -> usize {
        match mode {
            GameMode::PlayerVsPlayer => 0,
            GameMode::Computer(Difficulty::Easy) => 1,
            GameMode::Computer(Difficulty::Medium) => 2,
            GameMode::Computer(Difficulty::Hard) => 3,
        }
    }

    pub fn mode(&self, mode: GameMode) -> &ModeRecord {
        &self.records[Self::slot(mode)]
    }

    /// Every mode with its record, in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (GameMode, &ModeRecord)> {
        GameMode::ALL.into_iter().zip(self.records.iter())
    }

    pub fn total_games(&self) -> u32 {
        self.records.iter().map(|r| r.games).sum()
    }

    /// Share of games in `mode` won by Player 1, the human seat against the
    /// computer.
    pub fn win_rate(&self, mode: GameMode) -> f32 {
        let record = self.mode(mode);
        if record.games == 0 {
            return 0.0;
        }
        record.player1_wins as f32 / record.games as f32
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl StatsSink for Statistics {
    fn record(&mut self, event: &SessionEvent) {
        let record = &mut self.records[Self::slot(event.mode)];
        record.games += 1;
        record.total_plies += event.plies as u64;
        match event.result {
            SessionResult::PlayerWin(Player::One) => record.player1_wins += 1,
            SessionResult::PlayerWin(Player::Two) => record.player2_wins += 1,
            SessionResult::ComputerWin => record.computer_wins += 1,
            SessionResult::Draw => record.draws += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{EasyAi, Strategy};
    use crate::game::{Board, GameSession, MoveInput};

    fn event(mode: GameMode, result: SessionResult, plies: usize) -> SessionEvent {
        SessionEvent {
            mode,
            result,
            plies,
        }
    }

    #[test]
    fn test_empty_statistics() {
        let stats = Statistics::new();
        assert_eq!(stats.total_games(), 0);
        for mode in GameMode::ALL {
            assert_eq!(*stats.mode(mode), ModeRecord::default());
            assert_eq!(stats.win_rate(mode), 0.0);
        }
    }

    #[test]
    fn test_records_are_kept_per_mode() {
        let easy = GameMode::Computer(Difficulty::Easy);
        let hard = GameMode::Computer(Difficulty::Hard);
        let mut stats = Statistics::new();
        stats.record(&event(GameMode::PlayerVsPlayer, SessionResult::PlayerWin(Player::Two), 12));
        stats.record(&event(easy, SessionResult::PlayerWin(Player::One), 9));
        stats.record(&event(easy, SessionResult::ComputerWin, 14));
        stats.record(&event(easy, SessionResult::Draw, 42));
        stats.record(&event(hard, SessionResult::ComputerWin, 20));

        let pvp = stats.mode(GameMode::PlayerVsPlayer);
        assert_eq!((pvp.games, pvp.player2_wins), (1, 1));

        let e = stats.mode(easy);
        assert_eq!(e.games, 3);
        assert_eq!(e.player1_wins, 1);
        assert_eq!(e.computer_wins, 1);
        assert_eq!(e.draws, 1);
        assert_eq!(e.total_plies, 65);

        assert_eq!(stats.mode(GameMode::Computer(Difficulty::Medium)).games, 0);
        assert_eq!(stats.mode(hard).computer_wins, 1);
        assert_eq!(stats.total_games(), 5);
        assert!((stats.win_rate(easy) - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_plies() {
        let record = ModeRecord {
            games: 2,
            total_plies: 21,
            ..ModeRecord::default()
        };
        assert!((record.average_plies() - 10.5).abs() < 1e-6);
        assert_eq!(ModeRecord::default().average_plies(), 0.0);
    }

    #[test]
    fn test_iter_follows_menu_order() {
        let modes: Vec<GameMode> = Statistics::new().iter().map(|(mode, _)| mode).collect();
        assert_eq!(modes, GameMode::ALL.to_vec());
    }

    #[test]
    fn test_clear() {
        let mut stats = Statistics::new();
        stats.record(&event(GameMode::PlayerVsPlayer, SessionResult::Draw, 42));
        stats.clear();
        assert_eq!(stats.total_games(), 0);
    }

    /// Feeds an [`EasyAi`] as the human side of a session.
    struct RandomHuman(EasyAi);

    impl MoveInput for RandomHuman {
        fn choose_column(&mut self, board: &Board, player: Player) -> usize {
            let mut scratch = *board;
            self.0.choose_move(&mut scratch, player).column
        }
    }

    #[test]
    fn test_records_finished_sessions() {
        let mut stats = Statistics::new();
        let mut human = RandomHuman(EasyAi::seeded(4));
        let mut session =
            GameSession::versus_computer(Difficulty::Easy, Box::new(EasyAi::seeded(5)));

        for _ in 0..10 {
            let event = session.run(&mut human).unwrap();
            stats.record(&event);
            session.restart();
        }

        let record = stats.mode(GameMode::Computer(Difficulty::Easy));
        assert_eq!(record.games, 10);
        assert_eq!(record.player2_wins, 0);
        assert_eq!(
            record.player1_wins + record.computer_wins + record.draws,
            10
        );
        assert!(record.total_plies >= 10 * 7);
    }
}
