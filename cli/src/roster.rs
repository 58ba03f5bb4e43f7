//! Roster loading for the simulator.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use wrr_scheduler::Candidate;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid roster json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate ue id {0} in roster")]
    DuplicateId(u16),
}

/// On-disk roster: `{ "ues": [ { "id": 1001, "weight": 1, "active": true }, ... ] }`.
#[derive(Debug, Deserialize)]
struct RosterFile {
    ues: Vec<Candidate>,
}

/// Low, medium and high priority UEs.
pub fn demo_roster() -> Vec<Candidate> {
    vec![
        Candidate::active(1001, 1),
        Candidate::active(1002, 2),
        Candidate::active(1003, 4),
    ]
}

pub fn parse_roster(json: &str) -> Result<Vec<Candidate>, RosterError> {
    let file: RosterFile = serde_json::from_str(json)?;
    validate(&file.ues)?;
    Ok(file.ues)
}

pub fn load_roster(path: &Path) -> Result<Vec<Candidate>, RosterError> {
    let json = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_roster(&json)
}

fn validate(ues: &[Candidate]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(ues.len());
    for ue in ues {
        if !seen.insert(ue.id) {
            return Err(RosterError::DuplicateId(ue.id));
        }
    }
    Ok(())
}
