use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

// JSON-streng inn / JSON-streng ut, samme kontrakt som Rust-API-et.
// Frontenden skal slippe å bry seg om pyo3-typer.

#[pyfunction]
#[pyo3(signature = (plan_json, cfg_json = None))]
pub fn flatten_plan_json(
    _py: Python<'_>,
    plan_json: &str,
    cfg_json: Option<&str>,
) -> PyResult<String> {
    crate::flatten_plan_json(plan_json, cfg_json).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
pub fn lap_bars_json(_py: Python<'_>, laps_json: &str) -> PyResult<String> {
    crate::lap_bars_json(laps_json).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn pacegraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(flatten_plan_json, m)?)?;
    m.add_function(wrap_pyfunction!(lap_bars_json, m)?)?;
    Ok(())
}
