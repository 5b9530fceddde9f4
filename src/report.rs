//! Console rendering of effective point totals.

use crate::data_fetcher::player_names::PlayerNames;
use crate::error::AppError;
use crate::points::{EffectivePoints, PlayerId};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub player_id: PlayerId,
    pub name: Option<String>,
    pub effective_points: u32,
}

/// Entries ordered by points (highest first), then player id.
pub fn build_entries(points: &EffectivePoints, names: &PlayerNames) -> Vec<ReportEntry> {
    points
        .sorted()
        .into_iter()
        .map(|(player_id, effective_points)| ReportEntry {
            player_id,
            name: names.get(player_id).map(str::to_string),
            effective_points,
        })
        .collect()
}

/// Plain text, one player per line.
pub fn format_plain(points: &EffectivePoints, names: &PlayerNames) -> String {
    let entries = build_entries(points, names);
    let name_width = entries
        .iter()
        .map(|e| names.display_name(e.player_id).chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in &entries {
        out.push_str(&format!(
            "{:<10} {:<name_width$} {:>5}\n",
            entry.player_id,
            names.display_name(entry.player_id),
            entry.effective_points,
        ));
    }
    out
}

pub fn format_json(points: &EffectivePoints, names: &PlayerNames) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&build_entries(points, names))?)
}

/// Prints the final totals to stdout.
pub fn print_report(
    points: &EffectivePoints,
    names: &PlayerNames,
    as_json: bool,
) -> Result<(), AppError> {
    if as_json {
        println!("{}", format_json(points, names)?);
    } else if points.is_empty() {
        println!("No effective points recorded.");
    } else {
        print!("{}", format_plain(points, names));
    }
    Ok(())
}

/// Dumps the totals gathered before an aborted run to stderr.
pub fn print_partial(points: &EffectivePoints, names: &PlayerNames) {
    eprintln!(
        "Totals before the failure ({} players, {} points):",
        points.len(),
        points.total()
    );
    eprint!("{}", format_plain(points, names));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (EffectivePoints, PlayerNames) {
        let points: EffectivePoints = [8478402, 8478402, 8477934].into_iter().collect();
        let mut names = PlayerNames::new();
        names.insert(8478402, "Connor McDavid");
        (points, names)
    }

    #[test]
    fn test_entries_are_sorted_with_names() {
        let (points, names) = sample();
        let entries = build_entries(&points, &names);
        assert_eq!(
            entries,
            vec![
                ReportEntry {
                    player_id: 8478402,
                    name: Some("Connor McDavid".to_string()),
                    effective_points: 2,
                },
                ReportEntry {
                    player_id: 8477934,
                    name: None,
                    effective_points: 1,
                },
            ]
        );
    }

    #[test]
    fn test_plain_output_uses_fallback_names() {
        let (points, names) = sample();
        let text = format_plain(&points, &names);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("8478402"));
        assert!(lines[0].contains("Connor McDavid"));
        assert!(lines[0].trim_end().ends_with('2'));
        assert!(lines[1].contains("Player 8477934"));
    }

    #[test]
    fn test_json_output() {
        let (points, names) = sample();
        let json = format_json(&points, &names).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["player_id"], 8478402);
        assert_eq!(value[0]["effective_points"], 2);
        assert!(value[1]["name"].is_null());
    }

    #[test]
    fn test_empty_plain_output() {
        assert_eq!(
            format_plain(&EffectivePoints::new(), &PlayerNames::new()),
            ""
        );
    }
}
