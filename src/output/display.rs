//! Display functions for command results

use super::formatters::{
    CELL_WIDTH, CubeState, create_progress_bar, cube_cell, cube_state, face_path,
};
use crate::commands::{GameStats, GenerateResult, SolveResult, SurveyStatistics};
use crate::core::{Index, LatticePoint, PlayedWord, Puzzle};
use colored::Colorize;

/// Print a puzzle layer by layer, top layer first
///
/// Each cell lists the top, left and right tiles of one cube. Cubes that
/// reach `removal_threshold` are highlighted; removed cubes are blank.
pub fn print_puzzle(puzzle: &Puzzle, removal_threshold: u32) {
    let header: String = Index::ALL
        .iter()
        .map(|x| format!("{:<CELL_WIDTH$}", format!("x={}", x.value())))
        .collect::<Vec<_>>()
        .join(" ");

    for y in Index::ALL.into_iter().rev() {
        println!("\n{} {}", format!("y={}", y.value()).bright_cyan().bold(), header.dimmed());
        for z in Index::ALL {
            let row: Vec<String> = Index::ALL
                .into_iter()
                .map(|x| {
                    let cube = puzzle.cube(LatticePoint::from_indices(x, y, z));
                    let cell = cube_cell(cube);
                    match cube_state(cube, removal_threshold) {
                        CubeState::Removed => cell.dimmed().to_string(),
                        CubeState::Removable => cell.yellow().to_string(),
                        CubeState::Used => cell.cyan().to_string(),
                        CubeState::Fresh => cell.bright_white().bold().to_string(),
                    }
                })
                .collect();
            println!("{} {}", format!("z={}", z.value()).dimmed(), row.join(" "));
        }
    }
    println!();
}

/// Print a generated puzzle and its grade
pub fn print_generate_result(result: &GenerateResult, removal_threshold: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE".bright_cyan().bold(),
        format!("#{}", result.seed).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    print_puzzle(&result.generated.puzzle, removal_threshold);

    let status = if result.met_threshold {
        "✅ meets word threshold".green()
    } else {
        "⚠️  best of budget".yellow()
    };
    println!(
        "Words: {}  Attempts: {}  Time: {:.2?}  {status}",
        result.generated.word_count.to_string().bright_yellow().bold(),
        result.generated.attempts,
        result.duration
    );
}

/// Print the words found on a puzzle
pub fn print_solve_result(result: &SolveResult, removal_threshold: u32, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving puzzle {}",
        format!("#{}", result.seed).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        print_puzzle(&result.puzzle, removal_threshold);
    }

    let best = result.words.first().map_or(0, |w| w.score);
    for (i, found) in result.words.iter().enumerate() {
        let bar = create_progress_bar(f64::from(found.score), f64::from(best), 20);
        print!(
            "{:>4}. {:<12} {:>5} {}",
            i + 1,
            found.word.bright_white().bold(),
            found.score.to_string().bright_yellow(),
            bar.green()
        );
        if verbose {
            print!("  {}", face_path(&found.faces).dimmed());
        }
        println!();
    }

    println!(
        "\n{} words ({} shown), {} points available, found in {:.2?}",
        result.total_words.to_string().bright_yellow().bold(),
        result.words.len(),
        result.total_score.to_string().bright_yellow().bold(),
        result.duration
    );
}

fn print_word_line(label: &str, word: Option<&PlayedWord>) {
    if let Some(word) = word {
        println!(
            "  {label:<16} {} ({} pts)",
            word.word.bright_white().bold(),
            word.score
        );
    }
}

/// Print the summary of a replayed game
pub fn print_game_stats(stats: &GameStats, removal_threshold: u32) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GAME REPLAY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_puzzle(&stats.final_puzzle, removal_threshold);

    println!("  Mode:            {}", stats.mode);
    println!("  Moves:           {}", stats.total_moves);
    println!("  Words played:    {}", stats.words_played);
    println!("  Cubes removed:   {}", stats.cubes_removed);
    println!(
        "  Total score:     {}",
        stats.total_score.to_string().bright_yellow().bold()
    );
    if stats.player_scores.iter().any(|&s| s != 0) {
        println!(
            "  Player scores:   {} / {}",
            stats.player_scores[0], stats.player_scores[1]
        );
    }
    print_word_line("Longest word:", stats.longest_word.as_ref());
    print_word_line("Best word:", stats.highest_scoring_word.as_ref());

    if !stats.words.is_empty() {
        println!("\n  Words:");
        for word in &stats.words {
            let player = word
                .player_index
                .map(|p| format!(" [{p}]"))
                .unwrap_or_default();
            println!("    • {:<12} {:>4}{player}", word.word, word.score);
        }
    }

    println!();
    if stats.state_matches {
        println!("{}", "✅ Saved state matches the move log".green().bold());
    } else {
        println!(
            "{}",
            "⚠️  Saved state differs from the move log".yellow().bold()
        );
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let rate = if stats.total_puzzles == 0 {
        0.0
    } else {
        stats.met_threshold as f64 / stats.total_puzzles as f64 * 100.0
    };
    println!("  Puzzles:         {}", stats.total_puzzles);
    println!(
        "  Met threshold:   {} ({rate:.1}%)",
        stats.met_threshold.to_string().green()
    );
    println!(
        "  Words/puzzle:    min {}, avg {:.1}, max {}",
        stats.min_words, stats.average_words, stats.max_words
    );
    println!("  Avg attempts:    {:.2}", stats.average_attempts);
    if let Some(richest) = stats.richest_seed {
        println!("  Richest seed:    {} ({} words)", richest.seed, richest.word_count);
    }
    if let Some(poorest) = stats.poorest_seed {
        println!("  Poorest seed:    {} ({} words)", poorest.seed, poorest.word_count);
    }

    println!("\n  Attempts distribution:");
    let mut attempts: Vec<_> = stats.attempt_distribution.iter().collect();
    attempts.sort_unstable();
    let most = attempts.iter().map(|&(_, &n)| n).max().unwrap_or(0);
    for (tries, count) in attempts {
        let bar = create_progress_bar(*count as f64, most as f64, 30);
        println!("    {tries:>3}: {} {count}", bar.cyan());
    }

    println!("\n  Total time:      {:.2?}", stats.total_time);
}
