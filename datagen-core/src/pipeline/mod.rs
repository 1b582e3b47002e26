//! Pipeline module driving a generator into an output destination.

#[cfg(feature = "async")]
mod r#async;
mod sync;

#[cfg(feature = "async")]
pub use r#async::generate_async;
pub use sync::{generate, generate_to_vec};
