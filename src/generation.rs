//! Payload generation: plan, status and the executor that runs a request off
//! the caller's thread. Builders and assembly stay in `payload`.

pub mod executor;
pub mod plan;
pub mod status;

pub use executor::{GenerationHandle, Generator, GeneratorSettings};
pub use plan::{GenerationPlan, GenerationRequest};
pub use status::{GenerationState, GenerationStatus, StatusTone};
