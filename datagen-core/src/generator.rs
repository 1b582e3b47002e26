//! Generation state machine: decide, emit, advance.

use std::num::NonZeroUsize;

use crate::config::GenerationSummary;
use crate::error::Result;
use crate::literal::LiteralTable;
use crate::model::{Decision, DecisionModel};
use crate::options::GeneratorOptions;
use crate::rng::Rng32;
use crate::sink::BlockSink;
use crate::window::HistoryWindow;

/// Lifecycle of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Parameters set, nothing produced yet.
    Initialized,
    /// Producing blocks.
    Generating,
    /// Every requested byte was produced.
    Done,
    /// The destination rejected a write; no further bytes are produced.
    Failed,
}

/// Decision that is still being emitted, possibly across block boundaries.
#[derive(Debug, Clone, Copy)]
enum Run {
    Literal { remaining: u64 },
    Match { offset: u32, remaining: u64 },
}

/// Owns all mutable state of one generation run.
///
/// The generator produces output in blocks: [`Generator::fill_block`] appends
/// bytes to a [`BlockSink`] until the block is full or the requested size is
/// reached. A decision whose run does not fit into the current block resumes
/// in the next one, so block boundaries never change the generated bytes.
#[derive(Debug)]
pub struct Generator {
    rng: Rng32,
    model: DecisionModel,
    literals: LiteralTable,
    history: HistoryWindow,
    run: Option<Run>,
    produced: u64,
    total: u64,
    block_capacity: NonZeroUsize,
    state: State,
    summary: GenerationSummary,
}

impl Generator {
    /// Creates a generator in the [`State::Initialized`] state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidOption`] if the block size is zero.
    pub fn new(options: &GeneratorOptions) -> Result<Self> {
        let block_capacity = options.block_capacity()?;

        log::debug!(
            "generator: size={} compressibility={:.2} literal_skew={:.2} seed={}",
            options.size(),
            options.compressibility(),
            options.literal_skew(),
            options.seed()
        );

        Ok(Self {
            rng: Rng32::new(options.seed()),
            model: DecisionModel::new(options.compressibility()),
            literals: LiteralTable::new(options.literal_skew()),
            history: HistoryWindow::new(),
            run: None,
            produced: 0,
            total: options.size(),
            block_capacity,
            state: State::Initialized,
            summary: GenerationSummary::default(),
        })
    }

    /// Creates an empty block sized for this generator.
    pub fn new_sink(&self) -> BlockSink {
        BlockSink::with_capacity(self.block_capacity.get())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Bytes produced so far.
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Bytes still to be produced.
    pub fn remaining(&self) -> u64 {
        self.total - self.produced
    }

    /// Returns `true` once every requested byte was produced.
    pub fn is_exhausted(&self) -> bool {
        self.produced == self.total
    }

    /// Statistics of the bytes produced so far.
    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary {
            bytes_written: self.produced,
            ..self.summary
        }
    }

    /// Appends generated bytes to `sink` until it is full or the run is complete.
    ///
    /// Returns the number of bytes appended; `0` means there is nothing left to
    /// produce (or the run already ended). The call that produces the last
    /// requested byte moves the generator to [`State::Done`].
    pub fn fill_block(&mut self, sink: &mut BlockSink) -> usize {
        if matches!(self.state, State::Done | State::Failed) {
            return 0;
        }
        self.state = State::Generating;

        let start = sink.len();
        while !sink.is_full() && self.produced < self.total {
            let run = match self.run.take() {
                Some(run) => run,
                None => self.next_run(),
            };

            let emitted = match run {
                Run::Literal { remaining } => {
                    let count = budget(remaining, sink);
                    for _ in 0..count {
                        let byte = self.literals.sample(&mut self.rng);
                        self.history.push(byte);
                        sink.push(byte);
                    }
                    self.run = (remaining > count as u64).then_some(Run::Literal {
                        remaining: remaining - count as u64,
                    });
                    count
                }
                Run::Match { offset, remaining } => {
                    let wanted = budget(remaining, sink);
                    let count = self.history.emit_match(offset, wanted, sink);
                    self.run = (remaining > count as u64).then_some(Run::Match {
                        offset,
                        remaining: remaining - count as u64,
                    });
                    count
                }
            };
            self.produced += emitted as u64;
        }

        if self.is_exhausted() {
            self.state = State::Done;
        }

        let appended = sink.len() - start;
        log::trace!("generator: block of {appended} bytes, {} produced", self.produced);
        appended
    }

    /// Marks the run as aborted by a destination failure.
    pub(crate) fn fail(&mut self) {
        self.state = State::Failed;
        self.run = None;
    }

    /// Draws the next decision and truncates it to the bytes still requested.
    fn next_run(&mut self) -> Run {
        let decision = self.model.decide(&mut self.rng, self.produced);
        let length = u64::from(decision.len()).min(self.remaining());

        match decision {
            Decision::Literal { .. } => {
                self.summary.literal_decisions += 1;
                self.summary.literal_bytes += length;
                Run::Literal { remaining: length }
            }
            Decision::Match { offset, .. } => {
                self.summary.match_decisions += 1;
                self.summary.match_bytes += length;
                Run::Match {
                    offset,
                    remaining: length,
                }
            }
        }
    }
}

/// Number of bytes of a run that fit into the sink.
#[allow(clippy::cast_possible_truncation)]
fn budget(remaining: u64, sink: &BlockSink) -> usize {
    remaining.min(sink.spare() as u64) as usize
}
