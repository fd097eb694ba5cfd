mod init;
mod spans;
mod trace_id;

pub use init::init_logger;
pub use spans::{record_deposit_address, swap_span};
pub use trace_id::TraceId;
