use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel, StepPoller};
use crate::core::chaos_game::description::ChaosGameDescription;
use crate::core::chaos_game::ports::point_sink::PointSink;
use crate::core::data::vector2d::Vector2D;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ChaosGameError {
    Weights(WeightedError),
}

impl fmt::Display for ChaosGameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weights(err) => write!(f, "invalid transform weights: {}", err),
        }
    }
}

impl Error for ChaosGameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Weights(err) => Some(err),
        }
    }
}

impl From<WeightedError> for ChaosGameError {
    fn from(err: WeightedError) -> Self {
        Self::Weights(err)
    }
}

/// Outcome of a batch of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub plotted: u64,
    pub dropped: u64,
}

impl RunSummary {
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.plotted + self.dropped
    }
}

/// Sequential chaos-game driver.
///
/// Each step picks one transform of the description at random, weighted by its
/// selection weight, and replaces the current point with that transform's image.
/// Steps depend on the previous point, so a game only runs on one thread.
#[derive(Debug)]
pub struct ChaosGame<R: Rng = StdRng> {
    description: ChaosGameDescription,
    selector: WeightedIndex<f64>,
    rng: R,
    current_point: Vector2D,
}

impl ChaosGame<StdRng> {
    pub fn seeded(description: ChaosGameDescription, seed: u64) -> Result<Self, ChaosGameError> {
        Self::new(description, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(description: ChaosGameDescription) -> Result<Self, ChaosGameError> {
        Self::new(description, StdRng::from_entropy())
    }
}

impl<R: Rng> ChaosGame<R> {
    pub fn new(description: ChaosGameDescription, rng: R) -> Result<Self, ChaosGameError> {
        let selector = WeightedIndex::new(description.weights())?;

        Ok(Self {
            description,
            selector,
            rng,
            current_point: Vector2D::new(0.0, 0.0),
        })
    }

    #[must_use]
    pub fn description(&self) -> &ChaosGameDescription {
        &self.description
    }

    #[must_use]
    pub fn current_point(&self) -> Vector2D {
        self.current_point
    }

    pub fn reset(&mut self) {
        self.current_point = Vector2D::new(0.0, 0.0);
    }

    pub fn step(&mut self) -> Vector2D {
        let index = self.selector.sample(&mut self.rng);
        let transform = &self.description.transforms()[index].transform;

        self.current_point = transform.transform(self.current_point);
        self.current_point
    }

    pub fn run_steps<S: PointSink>(&mut self, steps: u64, sink: &mut S) -> RunSummary {
        match self.run_steps_cancelable_impl(steps, sink, &NeverCancel) {
            Ok(summary) => summary,
            Err(_) => {
                // NeverCancel never cancels, so this branch is unreachable
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    }

    /// Like [`Self::run_steps`], but polls `cancel` every
    /// [`CANCEL_CHECK_INTERVAL_STEPS`](crate::CANCEL_CHECK_INTERVAL_STEPS)
    /// steps. Points plotted before cancellation stay in the sink.
    pub fn run_steps_cancelable<S: PointSink, C: CancelToken>(
        &mut self,
        steps: u64,
        sink: &mut S,
        cancel: &C,
    ) -> Result<RunSummary, Cancelled> {
        self.run_steps_cancelable_impl(steps, sink, cancel)
    }

    fn run_steps_cancelable_impl<S: PointSink, C: CancelToken>(
        &mut self,
        steps: u64,
        sink: &mut S,
        cancel: &C,
    ) -> Result<RunSummary, Cancelled> {
        let poller = StepPoller::every_check_interval(cancel);
        let mut summary = RunSummary::default();

        for step in 0..steps {
            poller.check(step)?;

            let point = self.step();

            if sink.plot(point) {
                summary.plotted += 1;
            } else {
                summary.dropped += 1;
            }
        }

        Ok(summary)
    }
}
