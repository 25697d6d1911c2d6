use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use serde::Deserialize;
use solver::{ContributionDay, Grid, SolverConfig};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Calendars arrive either as a bare array of days or wrapped in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CalendarFile {
    Days(Vec<ContributionDay>),
    Wrapped { days: Vec<ContributionDay> },
}

impl CalendarFile {
    fn into_days(self) -> Vec<ContributionDay> {
        match self {
            CalendarFile::Days(days) | CalendarFile::Wrapped { days } => days,
        }
    }
}

pub struct CalendarReader;

impl CalendarReader {
    /// Reads a calendar JSON file, gunzipping it first if it ends in `.gz`.
    pub fn load_days(path: &Path) -> Result<Vec<ContributionDay>> {
        let file =
            File::open(path).with_context(|| format!("Failed to open calendar file: {:?}", path))?;
        let reader: Box<dyn Read> = if path.extension() == Some(OsStr::new("gz")) {
            Box::new(GzDecoder::new(file))
        } else {
            Box::new(file)
        };

        let calendar: CalendarFile = serde_json::from_reader(BufReader::new(reader))
            .with_context(|| format!("Failed to parse calendar file: {:?}", path))?;
        let days = calendar.into_days();
        debug!("Loaded {} calendar days from {:?}", days.len(), path);
        Ok(days)
    }

    pub fn load_grid(path: &Path) -> Result<Grid> {
        let days = Self::load_days(path)?;
        Grid::from_calendar(&days)
            .with_context(|| format!("Calendar {:?} does not form a valid grid", path))
    }

    pub fn load_config(path: &Path) -> Result<SolverConfig> {
        let file =
            File::open(path).with_context(|| format!("Failed to open config file: {:?}", path))?;
        let config: SolverConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse solver config: {:?}", path))?;
        config.validate().context("Invalid solver config")?;
        Ok(config)
    }
}
