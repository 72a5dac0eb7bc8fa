use std::collections::TryReserveError;

use miette::{Diagnostic, ErrReport};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error(transparent)]
    Allocation(AllocationError),
    #[error(transparent)]
    Empty(EmptyStackError),
}

impl StackError {
    pub fn into_err_report(self) -> ErrReport {
        self.into()
    }
}

impl Into<ErrReport> for StackError {
    fn into(self) -> ErrReport {
        match self {
            StackError::Allocation(e) => ErrReport::from(e),
            StackError::Empty(e) => ErrReport::from(e),
        }
    }
}

impl From<AllocationError> for StackError {
    fn from(error: AllocationError) -> Self {
        StackError::Allocation(error)
    }
}

impl From<EmptyStackError> for StackError {
    fn from(error: EmptyStackError) -> Self {
        StackError::Empty(error)
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("allocation-failed")]
#[diagnostic(
    code(stack::allocation),
    help("[{}] Could not resize backing buffer to {} elements", self.dbg_line, self.requested),
)]
pub struct AllocationError {
    pub dbg_line: String,
    pub requested: usize,
    #[source]
    pub source: Option<TryReserveError>,
}

impl AllocationError {
    pub fn new(dbg_line: String, requested: usize) -> Self {
        Self {
            dbg_line,
            requested,
            source: None,
        }
    }

    pub fn with_source(mut self, source: TryReserveError) -> Self {
        self.source = Some(source);
        self
    }
}

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("empty-stack")]
#[diagnostic(
    code(stack::empty),
    help("[{}] Cannot {} from an empty stack", self.dbg_line, self.operation),
)]
pub struct EmptyStackError {
    pub dbg_line: String,
    pub operation: &'static str,
}
