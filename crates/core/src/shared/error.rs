use thiserror::Error;

/// Errors raised by the filtering engine.
///
/// Both filters are total over non-empty grids, so these only cover
/// configuration mistakes and a worker thread dying mid-run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),
    #[error("cannot filter an empty {width}x{height} grid")]
    EmptyGrid { width: usize, height: usize },
    #[error("worker {worker} panicked")]
    WorkerPanicked { worker: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            FilterError::InvalidWorkerCount(0).to_string(),
            "worker count must be at least 1, got 0"
        );
        assert_eq!(
            FilterError::EmptyGrid {
                width: 0,
                height: 3
            }
            .to_string(),
            "cannot filter an empty 0x3 grid"
        );
        assert_eq!(
            FilterError::WorkerPanicked { worker: 2 }.to_string(),
            "worker 2 panicked"
        );
    }
}
