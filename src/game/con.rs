use tracing::info;

use crate::options::GameOptions;
use crate::player::Player;
use crate::result::ConResult;
use crate::scoring::points_for_tricks;

use super::state::{GameState, Phase};

impl GameState {
    /// Scores a finished con and adds the points to the cumulative scores.
    ///
    /// Ends the game when either score reaches the target. Dealing the next
    /// con is left to the caller.
    pub(crate) fn complete_con(&mut self, options: &GameOptions) -> ConResult {
        let points = Player::BOTH.map(|player| points_for_tricks(self.tricks_won[player.index()]));
        for player in Player::BOTH {
            self.scores[player.index()] += points[player.index()];
        }

        let con = ConResult {
            number: self.con_number,
            dealer: self.dealer,
            tricks: self.tricks_won,
            points,
            scores: self.scores,
        };
        self.con_history.push(con);

        info!(
            con = con.number,
            p1_tricks = con.tricks[0],
            p2_tricks = con.tricks[1],
            p1_score = con.scores[0],
            p2_score = con.scores[1],
            "con complete"
        );

        if self.scores.iter().any(|&score| score >= options.target_score) {
            self.phase = Phase::GameOver;
            info!(winner = ?self.winner(), "game over");
        }

        con
    }
}
