use chrono::NaiveDate;
use std::fmt;

/// Columns every game log must provide, in canonical order
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Date",
    "Opponent",
    "Location",
    "Result",
    "Goals_For",
    "Goals_Against",
];

/// Location value that puts a game in the home split
pub const HOME: &str = "Home";

/// Location value that puts a game in the away split
pub const AWAY: &str = "Away";

//==============================================================================
// Game Records
//==============================================================================

/// One validated game row plus its derived fields
///
/// `win`, `loss` and `goal_diff` are computed once in [`GameRecord::new`]
/// and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    date: Option<NaiveDate>,
    opponent: String,
    location: String,
    result: String,
    goals_for: i64,
    goals_against: i64,
    win: bool,
    loss: bool,
    goal_diff: i64,
}

impl GameRecord {
    /// Build a record and derive Win, Loss and Goal_Diff.
    ///
    /// Win and Loss are independent prefix checks: a result such as "T"
    /// (or a lowercase "w") counts as neither. The loader bounds goal counts
    /// to `i32`; Goal_Diff saturates for anything wider.
    pub fn new(
        date: Option<NaiveDate>,
        opponent: impl Into<String>,
        location: impl Into<String>,
        result: impl Into<String>,
        goals_for: i64,
        goals_against: i64,
    ) -> Self {
        let result = result.into();
        let win = result.starts_with('W');
        let loss = result.starts_with('L');
        Self {
            date,
            opponent: opponent.into(),
            location: location.into(),
            result,
            goals_for,
            goals_against,
            win,
            loss,
            goal_diff: goals_for.saturating_sub(goals_against),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn goals_for(&self) -> i64 {
        self.goals_for
    }

    pub fn goals_against(&self) -> i64 {
        self.goals_against
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    pub fn is_loss(&self) -> bool {
        self.loss
    }

    pub fn goal_diff(&self) -> i64 {
        self.goal_diff
    }

    /// Exact, case-sensitive match on "Home"
    pub fn is_home(&self) -> bool {
        self.location == HOME
    }

    /// Exact, case-sensitive match on "Away"
    pub fn is_away(&self) -> bool {
        self.location == AWAY
    }
}

//==============================================================================
// Summary Bundle
//==============================================================================

/// Win/loss/games counts for one slice of the season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub wins: usize,
    pub losses: usize,
    pub games: usize,
}

impl TeamRecord {
    /// Tally a set of games
    pub fn tally<'a, I>(games: I) -> Self
    where
        I: IntoIterator<Item = &'a GameRecord>,
    {
        games.into_iter().fold(Self::default(), |mut acc, game| {
            acc.games += 1;
            acc.wins += usize::from(game.is_win());
            acc.losses += usize::from(game.is_loss());
            acc
        })
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Season scoring means, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub goals_for: f64,
    pub goals_against: f64,
    pub goal_diff: f64,
}

/// A loss paired with its positive margin (`-goal_diff`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossMargin {
    pub game: GameRecord,
    pub margin: i64,
}

impl LossMargin {
    pub fn new(game: GameRecord) -> Self {
        let margin = game.goal_diff().saturating_neg();
        Self { game, margin }
    }
}

/// Everything the report needs, computed in one pass
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBundle {
    pub games_played: usize,
    pub overall: TeamRecord,
    pub home: TeamRecord,
    pub away: TeamRecord,
    pub averages: Averages,
    /// Wins, largest margin first
    pub wins_by_margin: Vec<GameRecord>,
    /// Losses, most lopsided first
    pub losses_by_margin: Vec<LossMargin>,
    /// First game with the season's highest goal difference
    pub biggest_win: GameRecord,
    /// First game with the season's lowest goal difference
    pub toughest_loss: GameRecord,
}
