pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod transform;

pub use error::{EtlError, Result};
pub use extract::{ExchangeClient, ExchangeResponse};
pub use load::ApiClient;
pub use pipeline::{run, RunOutcome};
