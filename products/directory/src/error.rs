use thiserror::Error;

use crate::store::EmployeeId;

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("employee {0} not found")]
    UnknownEmployee(EmployeeId),
    #[error("employee {0} is hidden by the current filter")]
    EmployeeHidden(EmployeeId),
    #[error("overlay already open for employee {0}")]
    OverlayAlreadyOpen(EmployeeId),
    #[error("overlay is closed")]
    OverlayClosed,
    #[error("employee directory unavailable")]
    Unavailable,
}
