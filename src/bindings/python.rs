// Python facade for the `_core` extension module. Built only with the `python` feature.

use crate::compose::{self, CompositionError};
use crate::display;
use crate::store::{BuildError, Diagram};
use crate::validation;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

fn build_err(e: BuildError) -> PyErr { PyValueError::new_err(e.to_string()) }
fn compose_err(e: CompositionError) -> PyErr { PyValueError::new_err(e.to_string()) }
fn json_err(e: serde_json::Error) -> PyErr { PyRuntimeError::new_err(e.to_string()) }

#[pyclass(name = "Diagram", frozen)]
#[derive(Debug, Clone)]
pub struct PyDiagram {
    inner: Diagram,
}

#[pymethods]
impl PyDiagram {
    #[staticmethod]
    pub fn from_json(json: &str) -> PyResult<Self> {
        Diagram::from_json_str(json).map(|inner| Self { inner }).map_err(build_err)
    }

    #[getter]
    pub fn mission_id(&self) -> &str { self.inner.mission_id() }

    /// The validation report as JSON.
    pub fn validate(&self) -> PyResult<String> {
        validation::validate(&self.inner).to_json().map_err(json_err)
    }

    pub fn render(&self) -> String { display::render(&self.inner) }

    pub fn summary(&self) -> PyResult<String> {
        serde_json::to_string(&display::summarize(&self.inner)).map_err(json_err)
    }

    pub fn to_json(&self) -> PyResult<String> { self.inner.to_json().map_err(json_err) }

    fn __repr__(&self) -> String { format!("<Diagram {}>", display::summarize(&self.inner)) }
}

/// Serial composition; `None` when no output of `a` matches an input of `b`.
#[pyfunction]
#[pyo3(name = "compose")]
fn py_compose(a: &PyDiagram, b: &PyDiagram) -> PyResult<Option<PyDiagram>> {
    compose::compose(&a.inner, &b.inner)
        .map(|d| d.map(|inner| PyDiagram { inner }))
        .map_err(compose_err)
}

#[pyfunction]
#[pyo3(name = "compose_parallel")]
fn py_compose_parallel(a: &PyDiagram, b: &PyDiagram) -> PyResult<PyDiagram> {
    compose::compose_parallel(&a.inner, &b.inner)
        .map(|inner| PyDiagram { inner })
        .map_err(compose_err)
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDiagram>()?;
    m.add_function(wrap_pyfunction!(py_compose, m)?)?;
    m.add_function(wrap_pyfunction!(py_compose_parallel, m)?)?;
    Ok(())
}
