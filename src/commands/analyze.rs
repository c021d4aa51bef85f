//! Post-game review
//!
//! Replays a game turn by turn and compares each guess with what the solver
//! would have played from the same position.

use crate::core::{Word, WordEval, prune_words};
use crate::game::Game;
use crate::solver::{Solver, Strategy};
use anyhow::{Result, bail};

/// Review of one turn
#[derive(Debug, Clone)]
pub struct TurnAnalysis {
    pub clue: WordEval,
    /// Candidates before the guess, in list order
    pub before: Vec<Word>,
    /// Candidates left after the guess
    pub after: usize,
    /// What the solver would have played, if it had a move
    pub pick: Option<Word>,
    /// Candidates the solver's pick would have left against the real answer
    pub pick_after: Vec<Word>,
}

impl TurnAnalysis {
    /// Share of the pool this guess eliminated, in percent
    #[must_use]
    pub fn removed_percent(&self) -> f64 {
        if self.before.is_empty() {
            return 0.0;
        }
        (1.0 - self.after as f64 / self.before.len() as f64) * 100.0
    }

    #[must_use]
    pub fn matched_pick(&self) -> bool {
        self.pick == Some(self.clue.word())
    }
}

/// Review of a whole game
#[derive(Debug, Clone)]
pub struct GameAnalysis {
    pub answer: Word,
    pub turns: Vec<TurnAnalysis>,
}

/// Walk the clues of `game` against the solver's own choices
#[must_use]
pub fn analyze_game<S: Strategy>(game: &Game, solver: &Solver<S>) -> GameAnalysis {
    let answer = game.answer();
    let mut before = solver.answers().to_vec();
    let mut turns = Vec::with_capacity(game.clues().len());

    for (turn, &clue) in game.clues().iter().enumerate() {
        let after = prune_words(&before, &[clue]);
        let pick = solver.next_guess(&game.clues()[..turn]);
        let pick_after = pick.map_or_else(Vec::new, |pick| {
            prune_words(&before, &[WordEval::from_guess(pick, &answer)])
        });

        turns.push(TurnAnalysis {
            clue,
            after: after.len(),
            before,
            pick,
            pick_after,
        });
        before = after;
    }

    GameAnalysis { answer, turns }
}

/// Replay `guesses` against `answer` and review the result
///
/// # Errors
///
/// Returns an error if any word is invalid, a guess is not in the guess list,
/// or guesses continue after the game is over.
pub fn analyze_guesses<S: Strategy>(
    answer: &str,
    guesses: &[String],
    solver: &Solver<S>,
) -> Result<GameAnalysis> {
    let answer = Word::new(answer)?;
    let mut game = Game::with_clues(answer, Vec::new(), solver.guesses());

    for text in guesses {
        let guess = Word::new(text)?;
        if !game.running() {
            bail!("the game was already over before '{guess}'");
        }
        if game.make_guess(guess).is_none() {
            bail!("'{guess}' is not in the guess list");
        }
    }

    Ok(analyze_game(&game, solver))
}
