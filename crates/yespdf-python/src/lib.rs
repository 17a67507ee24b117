use pyo3::prelude::*;

mod document;
mod errors;

/// The native extension module for the `yespdf` Python package.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<document::PyYesPdf>()?;
    Ok(())
}
