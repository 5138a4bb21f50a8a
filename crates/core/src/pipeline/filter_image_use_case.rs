use std::path::Path;
use std::time::Instant;

use crate::bitmap::domain::grid_reader::GridReader;
use crate::bitmap::domain::grid_writer::GridWriter;
use crate::filtering::domain::image_filter::ImageFilter;
use crate::pipeline::orchestrator::Orchestrator;
use crate::pipeline::pipeline_logger::PipelineLogger;

/// Single-image pipeline: read → filter (N workers) → write.
pub struct FilterImageUseCase {
    reader: Box<dyn GridReader>,
    writer: Box<dyn GridWriter>,
    filter: Box<dyn ImageFilter>,
    orchestrator: Orchestrator,
    logger: Box<dyn PipelineLogger>,
}

impl FilterImageUseCase {
    pub fn new(
        reader: Box<dyn GridReader>,
        writer: Box<dyn GridWriter>,
        filter: Box<dyn ImageFilter>,
        orchestrator: Orchestrator,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            reader,
            writer,
            filter,
            orchestrator,
            logger,
        }
    }

    pub fn execute(
        &mut self,
        input_path: &Path,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let started = Instant::now();
        let input = self.reader.read(input_path)?;
        self.logger
            .timing("read", started.elapsed().as_secs_f64() * 1000.0);
        self.logger
            .metric("pixels", (input.width() * input.height()) as f64);
        self.logger.info(&format!(
            "Applying {} to {}x{} image with {} workers",
            self.filter.name(),
            input.width(),
            input.height(),
            self.orchestrator.worker_count()
        ));

        let output = self
            .orchestrator
            .run(self.filter.as_mut(), &input, self.logger.as_mut())?;
        drop(input);

        let started = Instant::now();
        self.writer.write(output_path, &output)?;
        self.logger
            .timing("write", started.elapsed().as_secs_f64() * 1000.0);
        self.logger.summary();

        Ok(())
    }
}
