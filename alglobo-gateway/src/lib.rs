pub mod app_config;
pub mod transport;
pub mod http;
pub mod outcome;
pub mod batch;
pub mod mock;

pub use transport::{GatewayError, ReservationTransport};
pub use http::HttpTransport;
pub use outcome::{BatchResult, Outcome};
pub use batch::BatchGateway;
pub use mock::MockTransport;
