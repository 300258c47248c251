use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::draft::{team_name, DraftResults};
use crate::tiers::ManagerGrade;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Width left for free text once `fixed_width` columns are printed
fn available_width(term_width: Option<usize>, fixed_width: usize) -> Option<usize> {
    term_width.map(|width| {
        if width > fixed_width + 10 {
            width - fixed_width
        } else {
            // Very narrow terminal
            20
        }
    })
}

/// Format a tier list score with two decimals
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

fn format_tally(tally: u32) -> String {
    match tally {
        0 => String::new(),
        1 => "1 standout week".to_string(),
        n => format!("{} standout weeks", n),
    }
}

/// Format the tier list as a ranked table: Rank, Score, Manager, Standouts
/// No headers (minimal format, same as the draft board)
pub fn format_tier_table(grades: &[ManagerGrade], use_colors: bool) -> String {
    tier_table(grades, use_colors, get_terminal_width())
}

fn tier_table(grades: &[ManagerGrade], use_colors: bool, term_width: Option<usize>) -> String {
    if grades.is_empty() {
        return "No managers found.".to_string();
    }

    let index_width = 3;
    let score_width = 9;
    let separator = "  ";
    let name_width = grades
        .iter()
        .map(|g| g.manager.chars().count())
        .max()
        .unwrap_or(0);

    grades
        .iter()
        .enumerate()
        .map(|(idx, grade)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!("{:>width$}", format_score(grade.score), width = score_width);
            let tally = format_tally(grade.standout_tally);

            let fixed_width = index_width + 1 + score_width + separator.len() * 2 + tally.len();
            let (manager, pad) = match available_width(term_width, fixed_width) {
                Some(width) => (truncate_text(&grade.manager, width), name_width.min(width)),
                None => (grade.manager.clone(), name_width),
            };
            let manager = format!("{:<width$}", manager, width = pad);

            if use_colors {
                let score_colored = if grade.score < 0.0 {
                    score_padded.red().bold().to_string()
                } else {
                    score_padded.bold().to_string()
                };
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_colored,
                    separator,
                    manager,
                    separator,
                    tally.yellow()
                )
                .trim_end()
                .to_string()
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, manager, separator, tally
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the tier list as tab-separated values for scripting
/// Columns: manager, score, base, boost, win/loss, standout, tally (no headers, no colors)
pub fn format_tier_tsv(grades: &[ManagerGrade]) -> String {
    grades
        .iter()
        .map(|g| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                g.manager,
                format_score(g.score),
                format_score(g.base_scoring),
                g.boost_scoring,
                g.win_loss_scoring,
                format_score(g.standout_scoring),
                g.standout_tally
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the draft board as one line per team: "Team_N: pick, pick, ..."
/// My team is marked and, with colors, highlighted.
pub fn format_draft_board(results: &DraftResults, use_colors: bool) -> String {
    if results.rosters().is_empty() {
        return "No teams drafted.".to_string();
    }

    let term_width = get_terminal_width();
    let label_width = team_name(results.rosters().len() - 1).len() + 1;

    results
        .rosters()
        .iter()
        .enumerate()
        .map(|(team, picks)| {
            let mine = team == results.my_team();
            let label = format!("{:<width$}", format!("{}:", team_name(team)), width = label_width);
            let marker = if mine { " (you)" } else { "" };

            let picks = if picks.is_empty() {
                "-".to_string()
            } else {
                picks.join(", ")
            };
            let picks = match available_width(term_width, label_width + 1 + marker.len()) {
                Some(width) => truncate_text(&picks, width),
                None => picks,
            };

            if use_colors && mine {
                format!("{} {}{}", label.green().bold(), picks.bold(), marker.green())
            } else if use_colors {
                format!("{} {}", label.cyan(), picks)
            } else {
                format!("{} {}{}", label, picks, marker)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// "My Team: pick, pick, ..." summary line
pub fn format_my_team(results: &DraftResults) -> String {
    if results.my_picks().is_empty() {
        return "My Team: (no picks)".to_string();
    }
    format!("My Team: {}", results.my_picks().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftEngine, DraftEvent, DraftOrderKind, DraftSettings, KeeperAssignments};

    fn grade(manager: &str, score: f64, tally: u32) -> ManagerGrade {
        ManagerGrade {
            manager: manager.to_string(),
            score,
            base_scoring: 400.0,
            boost_scoring: 100.0,
            win_loss_scoring: -50.0,
            standout_scoring: 12.5,
            standout_tally: tally,
        }
    }

    fn sample_results() -> DraftResults {
        let settings = DraftSettings {
            team_count: 2,
            rounds: 2,
            draft_position: 2,
            order: DraftOrderKind::Snake,
        };
        let players = ["A", "B", "C", "D"].iter().map(|s| s.to_string());
        DraftEngine::new(settings, KeeperAssignments::new(), players)
            .simulate(&mut |_: &DraftEvent<'_>| {})
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(980.0), "980.00");
        assert_eq!(format_score(-260.0), "-260.00");
        assert_eq!(format_score(408.6), "408.60");
    }

    #[test]
    fn test_format_tier_table_empty() {
        assert_eq!(format_tier_table(&[], false), "No managers found.");
    }

    #[test]
    fn test_format_tier_table_rows() {
        let grades = vec![grade("Ace", 980.0, 4), grade("Bottom", -260.0, 0)];
        let output = format_tier_table(&grades, false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].contains("980.00"));
        assert!(lines[0].contains("Ace"));
        assert!(lines[0].ends_with("4 standout weeks"));
        assert!(lines[1].starts_with(" 2."));
        assert!(lines[1].contains("-260.00"));
        assert!(lines[1].ends_with("Bottom"));
    }

    #[test]
    fn test_tier_table_fits_narrow_terminal() {
        let long_name = "Commissioner Of The Longest Team Name In The League";
        let grades = vec![grade(long_name, 980.0, 0), grade("Ace", 512.5, 1)];
        let output = tier_table(&grades, false, Some(60));

        for line in output.lines() {
            assert!(line.chars().count() <= 60, "too wide: {:?}", line);
        }
        assert!(output.contains("..."));
        assert!(output.lines().nth(1).unwrap().ends_with("1 standout week"));
    }

    #[test]
    fn test_format_tier_tsv() {
        let output = format_tier_tsv(&[grade("Ace", 980.0, 1)]);
        assert_eq!(output, "Ace\t980.00\t400.00\t100\t-50\t12.50\t1");
    }

    #[test]
    fn test_format_tally() {
        assert_eq!(format_tally(0), "");
        assert_eq!(format_tally(1), "1 standout week");
        assert_eq!(format_tally(3), "3 standout weeks");
    }

    #[test]
    fn test_format_draft_board() {
        let output = format_draft_board(&sample_results(), false);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Team_1: A, D"));
        assert!(lines[1].starts_with("Team_2: B, C"));
        assert!(lines[1].ends_with("(you)"));
    }

    #[test]
    fn test_format_my_team() {
        assert_eq!(format_my_team(&sample_results()), "My Team: B, C");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Short", 10), "Short");
        assert_eq!(truncate_text("Christian McCaffrey", 10), "Christi...");
        assert_eq!(truncate_text("Christian", 2), "Ch");
    }
}
