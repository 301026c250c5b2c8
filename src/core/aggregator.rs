//! Season aggregation - game records → summary bundle

use crate::error::{ScorecardError, ScorecardResult};
use crate::types::{Averages, GameRecord, LossMargin, SummaryBundle, TeamRecord};
use tracing::debug;

/// Compute every statistic the report needs in one pass over `games`.
///
/// Row order matters: sorts are stable and extremal ties go to the earliest
/// game, so identical input always yields an identical bundle.
pub fn compute_summary(games: &[GameRecord]) -> ScorecardResult<SummaryBundle> {
    let (biggest_win, toughest_loss) = extremes(games).ok_or(ScorecardError::EmptyDataset)?;

    let overall = TeamRecord::tally(games);
    let home = TeamRecord::tally(games.iter().filter(|g| g.is_home()));
    let away = TeamRecord::tally(games.iter().filter(|g| g.is_away()));

    let averages = averages(games);

    let mut wins_by_margin: Vec<GameRecord> =
        games.iter().filter(|g| g.is_win()).cloned().collect();
    wins_by_margin.sort_by(|a, b| b.goal_diff().cmp(&a.goal_diff()));

    let mut losses: Vec<&GameRecord> = games.iter().filter(|g| g.is_loss()).collect();
    losses.sort_by_key(|g| g.goal_diff());
    let losses_by_margin = losses
        .into_iter()
        .cloned()
        .map(LossMargin::new)
        .collect();

    debug!(
        games = games.len(),
        wins = overall.wins,
        losses = overall.losses,
        home_games = home.games,
        away_games = away.games,
        "season aggregated"
    );

    Ok(SummaryBundle {
        games_played: games.len(),
        overall,
        home,
        away,
        averages,
        wins_by_margin,
        losses_by_margin,
        biggest_win: biggest_win.clone(),
        toughest_loss: toughest_loss.clone(),
    })
}

/// First game with the highest and first game with the lowest goal
/// difference, across all games regardless of result.
fn extremes(games: &[GameRecord]) -> Option<(&GameRecord, &GameRecord)> {
    let first = games.first()?;
    Some(
        games
            .iter()
            .skip(1)
            .fold((first, first), |(max, min), game| {
                let max = if game.goal_diff() > max.goal_diff() {
                    game
                } else {
                    max
                };
                let min = if game.goal_diff() < min.goal_diff() {
                    game
                } else {
                    min
                };
                (max, min)
            }),
    )
}

fn averages(games: &[GameRecord]) -> Averages {
    let n = games.len() as f64;
    // i128 so that no i64 column total can overflow
    let mean = |f: fn(&GameRecord) -> i64| {
        games.iter().map(|g| i128::from(f(g))).sum::<i128>() as f64 / n
    };

    Averages {
        goals_for: mean(GameRecord::goals_for),
        goals_against: mean(GameRecord::goals_against),
        goal_diff: mean(GameRecord::goal_diff),
    }
}
