//! Display functions for command results

use super::formatters::{create_progress_bar, format_clue, guesses_noun, word_list};
use crate::adversary::SearchPath;
use crate::commands::{GameAnalysis, SimulationSummary, SolveResult, TurnAnalysis};
use crate::core::{Word, WordEval};
use crate::game::MAX_GUESSES;
use colored::Colorize;
use std::time::Duration;

const ORDINALS: [&str; MAX_GUESSES] = ["first", "second", "third", "fourth", "fifth", "sixth"];

/// Print a stack of coloured guesses
pub fn print_board(clues: &[WordEval]) {
    for clue in clues {
        println!("  {}", format_clue(clue));
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.answer.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            format_clue(&step.clue),
            step.clue.feedback().to_emoji()
        );
        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let count = result.steps.len();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {count} {}!", guesses_noun(count))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {count} {}", guesses_noun(count))
                .red()
                .bold()
        );
    }
}

/// Print simulation statistics
pub fn print_simulation_summary(summary: &SimulationSummary) {
    let report = &summary.report;
    let total = report.total();

    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {total}");
    if total == 0 {
        return;
    }
    println!(
        "  Solved:              {} {}",
        report.wins(),
        format!("({:.1}%)", report.wins() as f64 / total as f64 * 100.0).green()
    );
    let failed = report.failures().len();
    if failed > 0 {
        println!(
            "  Failed:              {failed} {}",
            format!("({:.1}%)", failed as f64 / total as f64 * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", report.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        summary.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        summary.total_time.as_millis() as f64 / total as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let histogram = report.histogram();
    let max_count = histogram.iter().map(|&(_, count)| count).max().unwrap_or(1);
    for (score, count) in histogram {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        let label = if score > MAX_GUESSES {
            "failed".to_string()
        } else {
            format!("{score} {:<7}", guesses_noun(score))
        };
        let pct = count as f64 / total as f64 * 100.0;
        println!("  {label:>9}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    let hardest = summary.hardest(5);
    if !hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 guesses)".yellow().bold());
        for (word, guesses) in hardest {
            println!("  {} ({guesses} guesses)", word.to_string().to_uppercase().yellow());
        }
    }

    if !report.failures().is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        println!("  {}", word_list(report.failures(), 20));
    }

    println!("\n🎯 First Guess Usage");
    let mut first: Vec<(Word, usize)> = summary
        .first_guesses
        .iter()
        .map(|(&word, &count)| (word, count))
        .collect();
    first.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.chars().cmp(b.0.chars())));
    for (word, count) in first.iter().take(5) {
        println!(
            "  {}: {count} times ({:.1}%)",
            word.to_string().to_uppercase(),
            *count as f64 / total as f64 * 100.0
        );
    }
}

fn print_turn(number: usize, turn: &TurnAnalysis, answer: Word) {
    let ordinal = ORDINALS.get(number).copied().unwrap_or("next");
    let guess = turn.clue.word();
    let prev_count = turn.before.len();

    println!("{}", format_clue(&turn.clue));
    if turn.clue.correct() {
        println!("The {ordinal} guess \"{guess}\" was correct!");
        match prev_count {
            1 => println!("That was the only remaining word!"),
            2..10 => println!("The remaining words were {}", word_list(&turn.before, 10)),
            _ => println!("That was a lucky guess out of {prev_count}!"),
        }
        return;
    }

    println!("The {ordinal} guess was \"{guess}\".");
    match prev_count {
        1 => println!(
            "Before this guess, the only possible answer was \"{}\"",
            turn.before[0]
        ),
        2..10 => println!(
            "Before this guess, the remaining words were {}",
            word_list(&turn.before, 10)
        ),
        _ => {}
    }
    if prev_count > 1 {
        if prev_count == turn.after {
            println!("{}", "This had no change on the possibility space.".yellow());
        } else {
            println!(
                "This decreased the number of possible answers from {prev_count} to {}.",
                turn.after
            );
            println!("This removed {:.2}% of the options.", turn.removed_percent());
        }
    }

    match turn.pick {
        None => println!("{}", "The solver had no move from here.".red()),
        Some(_) if turn.matched_pick() => {
            println!("{}", "This is the same word as the solver!".green());
        }
        Some(pick) if pick == answer => {
            println!("The solver picked \"{pick}\". This is the answer.");
        }
        Some(pick) => {
            println!("The solver picked \"{pick}\".");
            println!(
                "Picking \"{pick}\" would have dropped the count to {} instead of {}.",
                turn.pick_after.len(),
                turn.after
            );
            if turn.pick_after.len() < 10 {
                println!("After \"{pick}\", the answer would be one of {}", word_list(&turn.pick_after, 10));
            }
        }
    }
}

/// Print a turn-by-turn game review
pub fn print_game_analysis(analysis: &GameAnalysis) {
    println!(
        "\nAnalyzing this game for answer {}:\n",
        analysis.answer.to_string().to_uppercase().bright_yellow().bold()
    );
    for (number, turn) in analysis.turns.iter().enumerate() {
        print_turn(number, turn, analysis.answer);
        println!();
    }
}

/// Print the result of the opening precompute
pub fn print_opening(word: Word, score: usize, answers: usize, elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING PRECOMPUTE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n  Best opening: {}",
        word.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("  Score:        {score}");
    if answers > 0 {
        println!(
            "  Mean removed: {:.1} of {answers} answers",
            score as f64 / answers as f64
        );
    }
    println!("  Time taken:   {:.2}s", elapsed.as_secs_f64());
}

/// Print winning Absurdle paths
pub fn print_paths(paths: &[SearchPath], elapsed: Duration) {
    if paths.is_empty() {
        println!("{}", "No winning path found within the search limits.".red());
        return;
    }
    for (i, path) in paths.iter().enumerate() {
        let count = path.clues().len();
        println!(
            "\n{} {} in {count} {}",
            "Path".bright_cyan().bold(),
            i + 1,
            guesses_noun(count)
        );
        print_board(path.clues());
    }
    println!("\n  Search time: {:.2}s", elapsed.as_secs_f64());
}
