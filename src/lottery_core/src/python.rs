use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::DEFAULT_N_SIMULATIONS;
use crate::constants::{LOTTERY_DRAWS, LOTTERY_FIELD_SIZE};
use crate::error::LotteryError;
use crate::lottery::{DraftResult, LotterySimulator};
use crate::odds::{estimate_pick_odds, PickDistribution};
use crate::standings::{rank_for_lottery, RankedTeam};
use crate::team::{load_season_records, SeasonRecord};

fn to_py_err(err: LotteryError) -> PyErr {
    match err {
        LotteryError::Io(e) => PyIOError::new_err(format!("Failed to open file: {}", e)),
        other => PyValueError::new_err(other.to_string()),
    }
}

#[pyclass(name = "SeasonRecord")]
#[derive(Clone)]
pub struct PySeasonRecord {
    inner: SeasonRecord,
}

#[pymethods]
impl PySeasonRecord {
    #[new]
    #[pyo3(signature = (team_id, display_name, wins = None, losses = None))]
    fn new(team_id: String, display_name: String, wins: Option<u32>, losses: Option<u32>) -> Self {
        PySeasonRecord {
            inner: SeasonRecord::new(team_id, display_name, wins, losses),
        }
    }

    #[getter]
    fn team_id(&self) -> String {
        self.inner.team_id.clone()
    }

    #[getter]
    fn display_name(&self) -> String {
        self.inner.display_name.clone()
    }

    #[getter]
    fn wins(&self) -> Option<u32> {
        self.inner.wins
    }

    #[getter]
    fn losses(&self) -> Option<u32> {
        self.inner.losses
    }

    fn __repr__(&self) -> String {
        format!(
            "SeasonRecord({:?}, {:?}, {:?}, {:?})",
            self.inner.team_id, self.inner.display_name, self.inner.wins, self.inner.losses
        )
    }
}

#[pyclass(name = "RankedTeam")]
#[derive(Clone)]
pub struct PyRankedTeam {
    inner: RankedTeam,
}

#[pymethods]
impl PyRankedTeam {
    #[getter]
    fn team_id(&self) -> String {
        self.inner.team.team_id.clone()
    }

    #[getter]
    fn display_name(&self) -> String {
        self.inner.team.display_name.clone()
    }

    #[getter]
    fn wins(&self) -> u32 {
        self.inner.team.wins
    }

    #[getter]
    fn losses(&self) -> u32 {
        self.inner.team.losses
    }

    #[getter]
    fn win_pct(&self) -> f64 {
        self.inner.team.win_pct()
    }

    #[getter]
    fn lottery_rank(&self) -> usize {
        self.inner.lottery_rank
    }

    #[getter]
    fn pick_odds(&self) -> Vec<f64> {
        self.inner.pick_odds.to_vec()
    }

    #[getter]
    fn top4_odds(&self) -> f64 {
        self.inner.top4_odds
    }

    #[getter]
    fn num1_odds(&self) -> f64 {
        self.inner.num1_odds
    }

    #[getter]
    fn games_back(&self) -> Option<f64> {
        self.inner.games_back
    }

    fn games_back_display(&self) -> String {
        self.inner.games_back_display()
    }

    fn __repr__(&self) -> String {
        format!(
            "RankedTeam({}, {}, rank={}, gb={})",
            self.inner.team.display_name,
            self.inner.team.record(),
            self.inner.lottery_rank,
            self.inner.games_back_display()
        )
    }
}

#[pyclass(name = "DraftResult")]
#[derive(Clone)]
pub struct PyDraftResult {
    inner: DraftResult,
}

#[pymethods]
impl PyDraftResult {
    #[getter]
    fn team(&self) -> PyRankedTeam {
        PyRankedTeam {
            inner: self.inner.team.clone(),
        }
    }

    #[getter]
    fn draft_pick(&self) -> usize {
        self.inner.draft_pick
    }

    fn movement(&self) -> i64 {
        self.inner.movement()
    }

    fn __repr__(&self) -> String {
        format!(
            "DraftResult(pick={}, {}, movement={})",
            self.inner.draft_pick,
            self.inner.team.team.display_name,
            self.inner.movement()
        )
    }
}

#[pyclass(name = "PickDistribution")]
#[derive(Clone)]
pub struct PyPickDistribution {
    inner: PickDistribution,
}

#[pymethods]
impl PyPickDistribution {
    #[getter]
    fn team(&self) -> PyRankedTeam {
        PyRankedTeam {
            inner: self.inner.team.clone(),
        }
    }

    #[getter]
    fn pick_pct(&self) -> Vec<f64> {
        self.inner.pick_pct.clone()
    }

    #[getter]
    fn n_simulations(&self) -> usize {
        self.inner.n_simulations
    }

    #[pyo3(signature = (pick, confidence = 0.95))]
    fn margin_of_error(&self, pick: usize, confidence: f64) -> f64 {
        self.inner.margin_of_error(pick, confidence)
    }

    fn compare_to_table(&self) -> f64 {
        self.inner.compare_to_table()
    }
}

/// Rank season records into the lottery field.
#[pyfunction]
#[pyo3(name = "rank_for_lottery")]
fn py_rank_for_lottery(records: Vec<PySeasonRecord>) -> Vec<PyRankedTeam> {
    let records: Vec<SeasonRecord> = records.into_iter().map(|r| r.inner).collect();
    rank_for_lottery(&records)
        .into_iter()
        .map(|inner| PyRankedTeam { inner })
        .collect()
}

/// Simulate one draft lottery, optionally seeded.
#[pyfunction]
#[pyo3(name = "simulate_lottery", signature = (teams, seed = None))]
fn py_simulate_lottery(teams: Vec<PyRankedTeam>, seed: Option<u64>) -> Vec<PyDraftResult> {
    let simulator = LotterySimulator::new(teams.into_iter().map(|t| t.inner).collect());
    simulator
        .simulate(seed)
        .into_iter()
        .map(|inner| PyDraftResult { inner })
        .collect()
}

/// Monte Carlo pick distributions. Releases the GIL while simulating.
#[pyfunction]
#[pyo3(
    name = "estimate_pick_odds",
    signature = (teams, n_simulations = DEFAULT_N_SIMULATIONS, seed = None)
)]
fn py_estimate_pick_odds(
    py: Python<'_>,
    teams: Vec<PyRankedTeam>,
    n_simulations: usize,
    seed: Option<u64>,
) -> Vec<PyPickDistribution> {
    let teams: Vec<RankedTeam> = teams.into_iter().map(|t| t.inner).collect();
    py.allow_threads(|| estimate_pick_odds(&teams, n_simulations, seed))
        .into_iter()
        .map(|inner| PyPickDistribution { inner })
        .collect()
}

/// Read a JSON season-record table.
#[pyfunction]
#[pyo3(name = "load_season_records")]
fn py_load_season_records(path: &str) -> PyResult<Vec<PySeasonRecord>> {
    let records = load_season_records(path).map_err(to_py_err)?;
    Ok(records.into_iter().map(|inner| PySeasonRecord { inner }).collect())
}

/// Python module definition
#[pymodule]
fn lottery_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<PySeasonRecord>()?;
    m.add_class::<PyRankedTeam>()?;
    m.add_class::<PyDraftResult>()?;
    m.add_class::<PyPickDistribution>()?;

    // Functions
    m.add_function(wrap_pyfunction!(py_rank_for_lottery, m)?)?;
    m.add_function(wrap_pyfunction!(py_simulate_lottery, m)?)?;
    m.add_function(wrap_pyfunction!(py_estimate_pick_odds, m)?)?;
    m.add_function(wrap_pyfunction!(py_load_season_records, m)?)?;

    // Constants
    m.add("LOTTERY_FIELD_SIZE", LOTTERY_FIELD_SIZE)?;
    m.add("LOTTERY_DRAWS", LOTTERY_DRAWS)?;

    Ok(())
}
