//! Test utilities and fixtures for result listing parser testing
//!
//! This module provides listings in the layouts HyTek has printed over the
//! years, plus helpers shared across the parser test modules.

use crate::app::models::Finisher;
use crate::app::services::results_parser::ResultsParser;

mod stats_tests;

/// Conference listing: "Last, First", no bib or year, points only for scorers
pub fn create_conference_listing() -> String {
    r#"
1 Reynolds, Francis            Puget Sound           25:00.71    1
2 Castillo, Leo                Willamette            25:21.38    2
3 Parker, Matt                 Willamette            25:24.27    3
4 Redfield, Stefan             Willamette            25:35.76    4
5 Dickman, Karl                Lewis & Clark         25:39.35    5
6 Fisher, Shawn                Linfield College      25:47.41    6
7 McIsaac, Chris               Linfield College      25:53.22    7
8 Rebol, Nick                  Willamette            25:55.10    8
9 Jenkins, Aaron               Whitworth             25:58.83    9
10 Dudley, Tyler                Whitworth             26:00.72   10
11 Rand, Cory                   Whitman College       26:03.20   11
12 Roberts, John                Lewis & Clark         26:09.10   12
"#
    .to_string()
}

/// Regional listing: bib, "First Last" and class year on every row
pub fn create_regional_listing() -> String {
    r#"
1 #278 Jackson Brainerd     SO Colorado College      25:26.65    1
2 #323 Eric Kleinsasser     SO Occidental            25:26.81    2
3 #345 Francis Reynolds     SR Puget Sound           25:46.49
4 #276 Kramer Straube       JR Claremont-Mudd-S      25:49.09    3
5 #384 Matt Parker          JR Willamette            25:51.52    4
6 #272 Brian Kopczynski     JR Claremont-Mudd-S      25:51.63    5
7 #310 Shawn Fisher         SR Linfield              25:56.21    6
8 #387 Stefan Redfield      JR Willamette            26:00.05    7
9 #275 Florian Scheulen     SR Claremont-Mudd-S      26:01.07    8
10 #250 Ray Ostrander        JR Cal Lutheran          26:02.39    9
"#
    .to_string()
}

/// Listing whose rows mix every optional column in and out
pub fn create_mixed_listing() -> String {
    r#"
    1 #278 Jackson Brainerd     SO Colorado College      25:26.65    1
    2 Castillo, Leo                Willamette            25:21.38    2
    3 #345 Francis Reynolds        Puget Sound           25:46.49

    4 Allen-Slaba, Nathaniel    Jr Pacific Lutheran      29:35.21
    5 #215 Heather O'Moore      SR Whitman               23:55.62   31
    6 #177 Amanda Basham        SO Pacific (Ore.)        24:04.89   36
    7 #229 Jo E Mayer           SR Whitworth             23:41.36   20
"#
    .to_string()
}

/// Parse a listing that is known to be well formed
pub fn load_fixture(text: &str) -> Vec<Finisher> {
    ResultsParser::new().load(text).unwrap()
}
