pub mod error;
pub mod label_list;
pub mod pipeline;
pub mod pixel_tensor_encoder;
pub mod ranked_result;
pub mod temporal_smoother;
pub mod top_k_selector;
