use pyo3::prelude::*;

use yespdf::{LineMode, LineSequence, YesPdf};

use crate::errors::engine_error_to_py;

/// Read-only view of a PDF path.
///
/// Every property is recomputed on access; nothing is cached between calls.
///
/// Example::
///
///     doc = ypdf("report.pdf")
///     if doc.ispdf:
///         print(doc.numpages, doc.name)
///         for i, line in doc.splittext(index=True) or []:
///             print(i, line)
///
#[pyclass(name = "ypdf", frozen)]
pub struct PyYesPdf {
    inner: YesPdf,
}

#[pymethods]
impl PyYesPdf {
    #[new]
    #[pyo3(signature = (document=None))]
    fn new(document: Option<String>) -> Self {
        Self {
            inner: yespdf::from_config(document),
        }
    }

    /// The bound path, or `None`.
    #[getter]
    fn document(&self) -> Option<&str> {
        self.inner.path()
    }

    /// `True` if the path ends with `.pdf`.
    #[getter]
    fn ispdf(&self) -> bool {
        self.inner.is_pdf()
    }

    /// Number of pages; `0` when no document is bound.
    #[getter]
    fn numpages(&self) -> PyResult<usize> {
        self.inner.page_count().map_err(engine_error_to_py)
    }

    /// Base name of the document path, or `None`.
    #[getter]
    fn name(&self) -> Option<&str> {
        self.inner.base_name()
    }

    /// Absolute document path, or `None`.
    #[getter]
    fn fullname(&self) -> PyResult<Option<String>> {
        let path = self.inner.absolute_path()?;
        Ok(path.map(|p| p.to_string_lossy().into_owned()))
    }

    /// Text of every page separated by form feeds, or `None` if empty.
    #[getter]
    fn text(&self) -> PyResult<Option<String>> {
        self.inner.full_text().map_err(engine_error_to_py)
    }

    /// Lines of the document text.
    ///
    /// Returns a list of strings, or a list of `(index, line)` tuples when
    /// `index` is true. Returns `None` when the document has no text.
    #[pyo3(signature = (index=None))]
    fn splittext(&self, py: Python<'_>, index: Option<bool>) -> PyResult<Option<PyObject>> {
        let mode = if index.unwrap_or(false) {
            LineMode::Indexed
        } else {
            LineMode::Plain
        };
        let Some(sequence) = self
            .inner
            .line_sequence(mode)
            .map_err(engine_error_to_py)?
        else {
            return Ok(None);
        };
        let object = match sequence {
            LineSequence::Lines(lines) => lines.into_pyobject(py)?.into_any().unbind(),
            LineSequence::IndexedLines(lines) => lines.into_pyobject(py)?.into_any().unbind(),
        };
        Ok(Some(object))
    }

    fn __repr__(&self) -> String {
        match self.inner.path() {
            Some(path) => format!("ypdf(document={path:?})"),
            None => "ypdf(document=None)".to_string(),
        }
    }
}
