//! Season aggregation properties

use pretty_assertions::assert_eq;
use scorecard::core::compute_summary;
use scorecard::types::{GameRecord, TeamRecord};
use scorecard::ScorecardError;

fn game(opponent: &str, location: &str, result: &str, gf: i64, ga: i64) -> GameRecord {
    GameRecord::new(None, opponent, location, result, gf, ga)
}

fn season() -> Vec<GameRecord> {
    vec![
        game("Army", "Home", "W", 14, 6),
        game("Navy", "Away", "L", 5, 11),
        game("Duke", "Home", "L", 9, 10),
        game("Yale", "Neutral", "W", 12, 4),
        game("Penn", "Away", "W", 8, 7),
        game("Cornell", "home", "L", 2, 13),
        game("Brown", "Away", "T", 6, 6),
        game("Rutgers", "Home", "W", 11, 3),
    ]
}

#[test]
fn test_games_played_equals_row_count() {
    let games = season();
    let bundle = compute_summary(&games).unwrap();
    assert_eq!(bundle.games_played, games.len());
    assert_eq!(bundle.overall.games, games.len());
}

#[test]
fn test_overall_counts_skip_non_standard_results() {
    let bundle = compute_summary(&season()).unwrap();
    assert_eq!(bundle.overall.wins, 4);
    assert_eq!(bundle.overall.losses, 3);
    // The tie counts towards games but neither total
    assert!(bundle.overall.wins + bundle.overall.losses < bundle.games_played);
}

#[test]
fn test_home_away_exact_match_only() {
    let bundle = compute_summary(&season()).unwrap();

    assert_eq!(
        bundle.home,
        TeamRecord {
            wins: 2,
            losses: 1,
            games: 3
        }
    );
    assert_eq!(
        bundle.away,
        TeamRecord {
            wins: 1,
            losses: 1,
            games: 3
        }
    );
    // "Neutral" and lowercase "home" fall outside both splits
    assert_eq!(bundle.home.games + bundle.away.games, bundle.games_played - 2);
}

#[test]
fn test_wins_sorted_non_increasing() {
    let bundle = compute_summary(&season()).unwrap();
    let diffs: Vec<i64> = bundle.wins_by_margin.iter().map(|g| g.goal_diff()).collect();

    assert_eq!(diffs, vec![8, 8, 8, 1]);
    assert!(diffs.windows(2).all(|w| w[0] >= w[1]));

    // Equal margins keep source order
    let names: Vec<&str> = bundle.wins_by_margin.iter().map(|g| g.opponent()).collect();
    assert_eq!(names, vec!["Army", "Yale", "Rutgers", "Penn"]);
}

#[test]
fn test_losses_sorted_non_decreasing_with_margin() {
    let bundle = compute_summary(&season()).unwrap();
    let diffs: Vec<i64> = bundle
        .losses_by_margin
        .iter()
        .map(|l| l.game.goal_diff())
        .collect();

    assert_eq!(diffs, vec![-11, -6, -1]);
    assert!(diffs.windows(2).all(|w| w[0] <= w[1]));
    for loss in &bundle.losses_by_margin {
        assert_eq!(loss.margin, -loss.game.goal_diff());
        assert!(loss.game.is_loss());
    }
}

#[test]
fn test_extremes_are_global() {
    let games = season();
    let bundle = compute_summary(&games).unwrap();

    let max = games.iter().map(|g| g.goal_diff()).max().unwrap();
    let min = games.iter().map(|g| g.goal_diff()).min().unwrap();
    assert_eq!(bundle.biggest_win.goal_diff(), max);
    assert_eq!(bundle.toughest_loss.goal_diff(), min);

    // Tie at +8 resolves to the first occurrence
    assert_eq!(bundle.biggest_win.opponent(), "Army");
    assert_eq!(bundle.toughest_loss.opponent(), "Cornell");
}

#[test]
fn test_extremes_ignore_result_flags() {
    // A mislabelled blowout is still the biggest "win"
    let games = vec![
        game("A", "Home", "W", 5, 4),
        game("B", "Home", "", 20, 1),
        game("C", "Away", "?", 0, 15),
        game("D", "Away", "L", 3, 6),
    ];
    let bundle = compute_summary(&games).unwrap();
    assert_eq!(bundle.biggest_win.opponent(), "B");
    assert_eq!(bundle.toughest_loss.opponent(), "C");
    assert_eq!(bundle.wins_by_margin.len(), 1);
    assert_eq!(bundle.losses_by_margin.len(), 1);
}

#[test]
fn test_three_game_scenario() {
    let games = vec![
        game("Army", "Home", "W", 10, 5),
        game("Navy", "Away", "L", 3, 9),
        game("Duke", "Away", "W", 7, 2),
    ];
    let bundle = compute_summary(&games).unwrap();

    assert_eq!(bundle.games_played, 3);
    assert_eq!(bundle.overall.to_string(), "2-1");
    assert_eq!(bundle.home.games, 1);
    assert_eq!(bundle.away.games, 2);
    assert_eq!(bundle.biggest_win, games[0]);
    assert_eq!(bundle.toughest_loss, games[1]);
    assert_eq!(bundle.toughest_loss.goal_diff(), -6);
}

#[test]
fn test_averages_full_precision() {
    let games = vec![
        game("A", "Home", "W", 10, 5),
        game("B", "Away", "L", 3, 9),
        game("C", "Away", "W", 7, 2),
    ];
    let bundle = compute_summary(&games).unwrap();

    assert_eq!(bundle.averages.goals_for, 20.0 / 3.0);
    assert_eq!(bundle.averages.goals_against, 16.0 / 3.0);
    assert_eq!(bundle.averages.goal_diff, 4.0 / 3.0);
}

#[test]
fn test_deterministic() {
    let games = season();
    assert_eq!(
        compute_summary(&games).unwrap(),
        compute_summary(&games).unwrap()
    );
}

#[test]
fn test_empty_input_fails() {
    assert!(matches!(
        compute_summary(&[]),
        Err(ScorecardError::EmptyDataset)
    ));
}
