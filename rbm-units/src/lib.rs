pub mod layers;
pub mod rng;

pub use layers::{BernoulliLayer, GaussianLayer, MultinomialLayer, UnitLayer, UnitLayerKind};
