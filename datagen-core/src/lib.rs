//! # datagen-core
//!
//! Streaming generator of synthetic data with tunable compressibility.
//!
//! The generator interleaves freshly sampled literal bytes with back-references
//! copied from a bounded history window, so that the share of repeated content
//! follows the requested probability. Output is a pure function of the
//! [`GeneratorOptions`]: the same size, compressibility, literal skew and seed
//! always produce the same bytes.
//!
//! ```no_run
//! use datagen_core::{options::GeneratorOptions, pipeline::generate};
//!
//! let options = GeneratorOptions::default()
//!     .with_size(1 << 20)
//!     .with_compressibility(0.5)
//!     .with_seed(7);
//! let summary = generate(std::io::stdout().lock(), &options)?;
//! eprintln!("{} bytes", summary.bytes_written);
//! # Ok::<(), datagen_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod literal;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod rng;
pub mod sink;
pub mod window;

pub use config::GenerationSummary;
pub use error::{Error, Result};
pub use generator::{Generator, State};
pub use options::GeneratorOptions;
#[cfg(feature = "async")]
pub use pipeline::generate_async;
pub use pipeline::{generate, generate_to_vec};
