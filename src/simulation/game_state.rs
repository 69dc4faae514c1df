//! Game state tracking for the farming game
//!
//! This module tracks the player's money and harvest statistics. The farm
//! grid itself never touches money; rewards are credited here by the world
//! when a harvest succeeds.

/// Game state that tracks player progress and resources
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player's current money
    pub money: i64,

    /// Total crops harvested
    pub harvests_completed: usize,

    /// Tool uses that changed a cell
    pub actions_applied: usize,

    /// Tool uses that did nothing (wrong stage for that tool)
    pub actions_rejected: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(super::config::STARTING_MONEY)
    }
}

impl GameState {
    /// Create a new game state with the given starting money
    pub fn new(starting_money: i64) -> Self {
        Self {
            money: starting_money,
            harvests_completed: 0,
            actions_applied: 0,
            actions_rejected: 0,
        }
    }

    /// Add money from revenue
    pub fn earn(&mut self, amount: i64) {
        self.money += amount;
    }

    /// Record a harvest and award its revenue
    pub fn complete_harvest(&mut self, reward: i64) {
        self.harvests_completed += 1;
        self.earn(reward);
    }

    /// Count a tool use
    pub fn record_action(&mut self, success: bool) {
        if success {
            self.actions_applied += 1;
        } else {
            self.actions_rejected += 1;
        }
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Money: ${} | Harvests: {} | Actions: {} applied, {} ignored",
            self.money, self.harvests_completed, self.actions_applied, self.actions_rejected
        )
    }
}
