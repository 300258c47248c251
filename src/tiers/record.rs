use serde::{Deserialize, Serialize};

/// One of the four weeks in a quarterly period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Week {
    One,
    Two,
    Three,
    Four,
}

impl Week {
    pub const ALL: [Week; 4] = [Week::One, Week::Two, Week::Three, Week::Four];

    /// Column header for this week in the manager data file
    pub fn column(self) -> &'static str {
        match self {
            Week::One => "week_one",
            Week::Two => "week_two",
            Week::Three => "week_three",
            Week::Four => "week_four",
        }
    }

    fn index(self) -> usize {
        match self {
            Week::One => 0,
            Week::Two => 1,
            Week::Three => 2,
            Week::Four => 3,
        }
    }
}

/// A manager's results over the quarter, as read from the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerRecord {
    pub manager: String,
    pub weeks: [f64; 4],
    pub wins: u32,
    pub losses: u32,
    /// League-reported total; carried through but not used for grading
    pub score: f64,
}

impl ManagerRecord {
    pub fn week(&self, week: Week) -> f64 {
        self.weeks[week.index()]
    }
}

/// A manager's graded quarter; one row of the tier list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerGrade {
    pub manager: String,
    pub score: f64,
    pub base_scoring: f64,
    pub boost_scoring: f64,
    pub win_loss_scoring: f64,
    pub standout_scoring: f64,
    pub standout_tally: u32,
}
