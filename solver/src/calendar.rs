use crate::constants::{CALENDAR_DAYS, CALENDAR_WEEKS, MAX_LEVEL};
use crate::error::{Result, SolverError};
use crate::util::PseudoRandom;
use crate::{Cell, Grid};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One day of a contribution calendar, as handed over by the fetcher.
/// `x` is the week column and `y` the weekday row (Sunday = 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub x: i16,
    pub y: i16,
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl ContributionDay {
    pub fn cell(&self) -> Cell {
        Cell::new(self.x, self.y, self.level)
    }
}

impl Grid {
    /// Builds the board for a calendar, sized to the records it contains.
    pub fn from_calendar(days: &[ContributionDay]) -> Result<Grid> {
        if let Some(day) = days.iter().find(|day| day.level > MAX_LEVEL) {
            return Err(SolverError::InvalidCell {
                x: day.x,
                y: day.y,
                level: day.level,
                max: MAX_LEVEL,
            });
        }

        let cells: Vec<Cell> = days.iter().map(ContributionDay::cell).collect();
        Grid::from_cells(&cells)
    }
}

/// A year of made-up contributions laid out like the real calendar, starting
/// on `first_day` and filling 53 week columns. Same seed, same calendar.
pub fn synthetic_year(seed: u64, first_day: NaiveDate) -> Result<Vec<ContributionDay>> {
    let mut rng = PseudoRandom::new(seed);
    let days_per_week = CALENDAR_DAYS as i64;
    let offset = first_day.weekday().num_days_from_sunday() as i64;
    let total = CALENDAR_WEEKS as i64 * days_per_week - offset;

    (0..total)
        .map(|i| -> Result<ContributionDay> {
            let slot = i + offset;
            let date = first_day
                .checked_add_signed(Duration::days(i))
                .ok_or_else(|| {
                    SolverError::InvalidConfig(format!(
                        "a calendar starting on {} runs past the last supported date",
                        first_day
                    ))
                })?;
            let level = random_level(&mut rng);
            let count = match level {
                0 => 0,
                level => level as u32 * 3 + rng.next_below(3),
            };
            Ok(ContributionDay {
                x: (slot / days_per_week) as i16,
                y: (slot % days_per_week) as i16,
                date,
                count,
                level,
            })
        })
        .collect()
}

fn random_level(rng: &mut PseudoRandom) -> u8 {
    match rng.next_below(100) {
        0..=39 => 0,
        40..=64 => 1,
        65..=81 => 2,
        82..=92 => 3,
        _ => 4,
    }
}
