use super::UnitLayer;
use crate::rng;
use candle_core::{DType, Device, Result, Tensor};
use candle_nn::ops::sigmoid;

#[derive(Clone, Debug)]
pub struct BernoulliLayer {
    n_units: usize,
    dtype: DType,
}

impl BernoulliLayer {
    pub fn new(n_units: usize) -> Self {
        Self {
            n_units,
            dtype: DType::F32,
        }
    }

    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }
}

impl UnitLayer for BernoulliLayer {
    fn n_units(&self) -> usize {
        self.n_units
    }

    fn init(&self, device: &Device) -> Result<Tensor> {
        Tensor::rand(0f32, 1., self.n_units, device)?.to_dtype(self.dtype)
    }

    fn activation(&self, x: &Tensor, _b: &Tensor) -> Result<Tensor> {
        sigmoid(x)
    }

    fn make_rand(&self, batch_size: usize, device: &Device) -> Result<Tensor> {
        let draws = rng::uniform(batch_size * self.n_units);
        Tensor::from_vec(draws, (batch_size, self.n_units), device)?.to_dtype(self.dtype)
    }

    fn sample(&self, rand: &Tensor, means: &Tensor) -> Result<Tensor> {
        rand.broadcast_lt(means)?.to_dtype(self.dtype)
    }
}
