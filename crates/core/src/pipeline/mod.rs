pub mod filter_image_use_case;
pub mod orchestrator;
pub mod pipeline_logger;
pub mod work_decomposer;
