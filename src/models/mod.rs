pub mod requests;
pub mod responses;

pub use requests::{GenerateRequest, SpeedInput, SynthesisRequest};
pub use responses::{AudioDataResponse, HealthResponse, VoicesResponse};
