pub mod bernoulli;
pub mod gaussian;
pub mod multinomial;

use candle_core::{Device, Result, Tensor};
use enum_dispatch::enum_dispatch;

pub use bernoulli::BernoulliLayer;
pub use gaussian::GaussianLayer;
pub use multinomial::MultinomialLayer;

/// One layer of stochastic units in an RBM/DBM.
#[enum_dispatch]
pub trait UnitLayer {
    fn n_units(&self) -> usize;

    /// Randomly initialize unit states according to the layer distribution.
    fn init(&self, device: &Device) -> Result<Tensor>;

    /// Expected value of the units. `x` is the total input received (bias included),
    /// `b` the bias on its own.
    fn activation(&self, x: &Tensor, b: &Tensor) -> Result<Tensor>;

    /// Host side randomness one sampling step consumes, one batch at a time.
    fn make_rand(&self, batch_size: usize, device: &Device) -> Result<Tensor>;

    /// Concrete unit states from the activations and the output of `make_rand`.
    fn sample(&self, rand: &Tensor, means: &Tensor) -> Result<Tensor>;
}

#[enum_dispatch(UnitLayer)]
#[derive(Clone, Debug)]
pub enum UnitLayerKind {
    Bernoulli(BernoulliLayer),
    Multinomial(MultinomialLayer),
    Gaussian(GaussianLayer),
}
