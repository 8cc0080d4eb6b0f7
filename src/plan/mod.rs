pub mod frame_plan;
pub mod text_measure;
