//! Success/error protocol shared by every pipeline stage.
//!
//! A [`Datasource`] does the I/O and may fail with a [`DatasourceError`]. A
//! [`UseCase`] wraps a datasource and is the only place those failures are
//! caught: it always answers with an [`Outcome`], never an `Err`.

use crate::error::{DatasourceResult, FailureKind};
use crate::logs::log_error;

/// Either the payload of a successful operation or its failure kind. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T, E> {
    Success(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Error(_) => None,
        }
    }

    pub fn error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Error(err) => Some(err),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }

    /// Convert to a `Result`, for callers that propagate with `?`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(err) => Err(err),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Error(err),
        }
    }
}

/// Input of one operation, bundled with the failure kind to report if it fails.
pub trait Parameters {
    type Error: FailureKind;

    fn error(&self) -> &Self::Error;
}

/// The I/O stage of a pipeline.
pub trait Datasource<P> {
    type Data;

    fn fetch(&self, parameters: &P) -> DatasourceResult<Self::Data>;
}

/// The business stage of a pipeline.
pub trait UseCase<P: Parameters> {
    type Output;

    fn call(&self, parameters: &P) -> Outcome<Self::Output, P::Error>;
}

/// Run `datasource`, folding a failure into the parameters' failure kind.
pub fn result_datasource<P, D>(datasource: &D, parameters: &P) -> Outcome<D::Data, P::Error>
where
    P: Parameters,
    D: Datasource<P>,
{
    match datasource.fetch(parameters) {
        Ok(data) => Outcome::Success(data),
        Err(e) => {
            let failure = parameters.error().caused_by(&e);
            log_error(failure.to_string());
            Outcome::Error(failure)
        }
    }
}
