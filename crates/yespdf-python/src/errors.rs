use pyo3::PyErr;
use pyo3::exceptions::PyRuntimeError;

use yespdf::EngineError;

/// Convert an `EngineError` into a Python exception.
pub fn engine_error_to_py(e: EngineError) -> PyErr {
    PyRuntimeError::new_err(e.to_string())
}
