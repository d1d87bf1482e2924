//! Game State Machine
//!
//! Screen-level transitions between the menu, the table and the scoreboard.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Scoreboard,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// PLAY or CONTINUE button
    Play,
    OpenScoreboard,
    Back,
    Escape,
    /// Ball dropped and the game is configured to return to the menu
    RunOver,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    state: GameState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: GameState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt a transition, returns false and stays put if the action
    /// does not apply in the current state
    pub fn transition(&mut self, action: GameAction) -> bool {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                log::debug!("{from_state:?} --{action:?}--> {next_state:?}");
                true
            }
            None => {
                log::trace!("{action:?} ignored in {from_state:?}");
                false
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<GameState> {
        match (self.state, action) {
            // From Menu
            (GameState::Menu, GameAction::Play) => Some(GameState::Playing),
            (GameState::Menu, GameAction::OpenScoreboard) => Some(GameState::Scoreboard),

            // From Playing
            (GameState::Playing, GameAction::Escape) => Some(GameState::Menu),
            (GameState::Playing, GameAction::RunOver) => Some(GameState::Menu),

            // From Scoreboard
            (GameState::Scoreboard, GameAction::Back) => Some(GameState::Menu),
            (GameState::Scoreboard, GameAction::Escape) => Some(GameState::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the table is on screen
    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Play));
        assert_eq!(fsm.state(), GameState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.transition(GameAction::Back));
        assert!(!fsm.transition(GameAction::Escape));
        assert!(!fsm.transition(GameAction::RunOver));
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_scoreboard_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::OpenScoreboard);
        assert_eq!(fsm.state(), GameState::Scoreboard);
        assert!(!fsm.transition(GameAction::Play));
        assert_eq!(fsm.state(), GameState::Scoreboard);
        fsm.transition(GameAction::Back);
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Play);
        fsm.transition(GameAction::Escape);
        assert_eq!(fsm.state(), GameState::Menu);

        fsm.transition(GameAction::OpenScoreboard);
        fsm.transition(GameAction::Escape);
        assert_eq!(fsm.state(), GameState::Menu);
    }

    #[test]
    fn test_clicks_ignored_while_playing() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Play);
        assert!(!fsm.transition(GameAction::Play));
        assert!(!fsm.transition(GameAction::OpenScoreboard));
        assert!(!fsm.transition(GameAction::Back));
        assert!(fsm.is_playing());
    }
}
