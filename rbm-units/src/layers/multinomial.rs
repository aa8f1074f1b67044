use super::UnitLayer;
use crate::rng;
use candle_core::{D, DType, Device, Result, Tensor};
use candle_nn::ops::softmax;

/// One categorical group: the `n_units` states are mutually exclusive and a
/// sampled configuration is a one-hot row.
#[derive(Clone, Debug)]
pub struct MultinomialLayer {
    n_units: usize,
    dtype: DType,
}

impl MultinomialLayer {
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

impl UnitLayer for MultinomialLayer {
    fn n_units(&self) -> usize {
        self.n_units
    }

    fn init(&self, device: &Device) -> Result<Tensor> {
        let t = Tensor::rand(0f32, 1., self.n_units, device)?;
        let t = t.broadcast_div(&t.sum_all()?)?;
        t.to_dtype(self.dtype)
    }

    fn activation(&self, x: &Tensor, _b: &Tensor) -> Result<Tensor> {
        softmax(x, D::Minus1)
    }

    // A single uniform draw per row, inverted through the cdf in `sample`.
    fn make_rand(&self, batch_size: usize, device: &Device) -> Result<Tensor> {
        let draws = rng::uniform(batch_size);
        Tensor::from_vec(draws, (batch_size, 1), device)?.to_dtype(self.dtype)
    }

    fn sample(&self, rand: &Tensor, means: &Tensor) -> Result<Tensor> {
        let cumprobs = means.cumsum(D::Minus1)?;
        let hits = cumprobs.broadcast_ge(rand)?;
        let picked = hits.argmax(D::Minus1)?.to_vec1::<u32>()?;
        let (batch_size, n_units) = cumprobs.dims2()?;
        // TODO: there is a one_hot function in candle. Should we use it?
        let mut states = vec![0f32; batch_size * n_units];
        for (row, unit) in picked.into_iter().enumerate() {
            states[row * n_units + unit as usize] = 1.;
        }
        Tensor::from_vec(states, (batch_size, n_units), means.device())?.to_dtype(self.dtype)
    }
}
