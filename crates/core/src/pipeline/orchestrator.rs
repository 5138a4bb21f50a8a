use std::thread;
use std::time::Instant;

use crate::filtering::domain::image_filter::ImageFilter;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::pipeline::work_decomposer::WorkDecomposer;
use crate::shared::error::FilterError;
use crate::shared::pixel_grid::PixelGrid;

/// Where a filter run currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrchestratorState {
    Idle,
    Dispatching,
    AwaitingJoin,
    PunchingHoles,
    Done,
}

/// Runs one filter over a grid with a fixed fan-out of worker threads.
///
/// Layout: `dispatch N workers → join all → finishing pass (cheese only)`
///
/// Each worker borrows the input grid immutably and owns a disjoint column
/// view of the output grid, so the parallel phase needs no locks. The output
/// is handed back only once every worker has joined and the finishing pass
/// is done.
pub struct Orchestrator {
    decomposer: WorkDecomposer,
    state: OrchestratorState,
}

impl Orchestrator {
    pub fn new(worker_count: usize) -> Result<Self, FilterError> {
        Ok(Self {
            decomposer: WorkDecomposer::new(worker_count)?,
            state: OrchestratorState::Idle,
        })
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn worker_count(&self) -> usize {
        self.decomposer.worker_count()
    }

    pub fn run(
        &mut self,
        filter: &mut dyn ImageFilter,
        input: &PixelGrid,
        logger: &mut dyn PipelineLogger,
    ) -> Result<PixelGrid, FilterError> {
        if input.is_empty() {
            return Err(FilterError::EmptyGrid {
                width: input.width(),
                height: input.height(),
            });
        }

        let result = self.run_phases(filter, input, logger);
        if result.is_err() {
            self.transition(OrchestratorState::Idle);
        }
        result
    }

    fn run_phases(
        &mut self,
        filter: &mut dyn ImageFilter,
        input: &PixelGrid,
        logger: &mut dyn PipelineLogger,
    ) -> Result<PixelGrid, FilterError> {
        let chunks = self.decomposer.decompose(input.width());
        let total = chunks.len();
        let mut output = PixelGrid::new(input.width(), input.height());

        self.transition(OrchestratorState::Dispatching);
        let started = Instant::now();
        let shared: &dyn ImageFilter = &*filter;
        let mut first_error = None;

        thread::scope(|scope| {
            let handles: Vec<_> = chunks
                .iter()
                .zip(output.column_views_mut(&chunks))
                .map(|(chunk, view)| {
                    log::debug!(
                        "Dispatching {} worker for columns {:?} (reads {:?})",
                        shared.name(),
                        chunk.output_range(),
                        chunk.read_range()
                    );
                    scope.spawn(move || shared.apply_chunk(input, chunk, view))
                })
                .collect();

            self.transition(OrchestratorState::AwaitingJoin);
            for (worker, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && first_error.is_none() {
                    first_error = Some(FilterError::WorkerPanicked { worker });
                }
                logger.progress(worker + 1, total);
            }
        });

        if let Some(err) = first_error {
            return Err(err);
        }
        logger.timing("workers", started.elapsed().as_secs_f64() * 1000.0);

        if filter.has_finishing_pass() {
            self.transition(OrchestratorState::PunchingHoles);
            let started = Instant::now();
            filter.finish(&mut output);
            logger.timing("finish", started.elapsed().as_secs_f64() * 1000.0);
        }

        self.transition(OrchestratorState::Done);
        Ok(output)
    }

    fn transition(&mut self, next: OrchestratorState) {
        log::debug!("Orchestrator {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
