//! Test fixtures for report rendering
//!
//! Finishers and team scores small enough that the expected report can be
//! written out line by line.

use crate::app::models::{Finisher, RaceTime, TeamScore};


/// Five finishers from a conference meet; the last one did not score
pub fn create_finishers() -> Vec<Finisher> {
    let rows: [(u32, &str, Option<&str>, &str, f64, Option<u32>); 5] = [
        (1, "Reynolds, Francis", None, "Puget Sound", 1500.71, Some(1)),
        (2, "Castillo, Leo", Some("JR"), "Willamette", 1521.38, Some(2)),
        (3, "Parker, Matt", Some("SR"), "Willamette", 1524.27, Some(3)),
        (4, "Redfield, Stefan", Some("SO"), "Willamette", 1535.76, Some(4)),
        (5, "Dickman, Karl", Some("FR"), "Lewis & Clark", 1539.35, None),
    ];

    rows.into_iter()
        .map(|(place, name, year, team, seconds, points)| {
            let mut finisher = Finisher::new(name, RaceTime::from_seconds(seconds))
                .with_place(place)
                .with_team(team);
            if let Some(year) = year {
                finisher = finisher.with_year(year);
            }
            if let Some(points) = points {
                finisher = finisher.with_points(points);
            }
            finisher
        })
        .collect()
}

/// Scoring runners of one team, carrying only their points
pub fn create_scorers(team: &str, points: &[u32]) -> Vec<Finisher> {
    points
        .iter()
        .map(|&p| {
            Finisher::new("Runner, Some", RaceTime::ZERO)
                .with_team(team)
                .with_points(p)
        })
        .collect()
}

/// A seven-runner team with both averages and a five-runner team with one
pub fn create_team_scores<'a>(seven: &'a [Finisher], five: &'a [Finisher]) -> Vec<TeamScore<'a>> {
    vec![
        TeamScore::new("Willamette")
            .with_place(1)
            .with_score(25)
            .with_finishers(seven.iter().collect())
            .with_top_five(RaceTime::from_seconds(1530.0))
            .with_top_seven(RaceTime::from_seconds(1545.5)),
        TeamScore::new("Whitworth")
            .with_place(2)
            .with_score(30)
            .with_finishers(five.iter().collect())
            .with_top_five(RaceTime::from_seconds(1540.12)),
    ]
}

pub const RESULTS_LINES: [&str; 9] = [
    "                    8000 m run CC",
    "======================================================",
    "  Name              Year School        Finals   Points",
    "======================================================",
    "1 Reynolds, Francis      Puget Sound   25:00.71    1",
    "2 Castillo, Leo     JR   Willamette    25:21.38    2",
    "3 Parker, Matt      SR   Willamette    25:24.27    3",
    "4 Redfield, Stefan  SO   Willamette    25:35.76    4",
    "5 Dickman, Karl     FR   Lewis & Clark 25:39.35",
];

pub const SCORES_LINES: [&str; 9] = [
    "                             Team Scores",
    "=====================================================================",
    "Rank Team                    Total    1    2    3    4    5   *6   *7",
    "=====================================================================",
    "   1 Willamette                 25    1    3    5    7    9   11   13",
    "       Top 5 Avg:  25:30.00",
    "       Top 7 Avg:  25:45.50",
    "   2 Whitworth                  30    2    4    6    8   10",
    "       Top 5 Avg:  25:40.12",
];
