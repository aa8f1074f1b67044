use super::UnitLayer;
use crate::rng;
use candle_core::{DType, Device, Result, Tensor, bail};

/// Linear units with a fixed, per unit standard deviation.
#[derive(Clone, Debug)]
pub struct GaussianLayer {
    n_units: usize,
    sigma: Vec<f32>,
    dtype: DType,
}

impl GaussianLayer {
    /// Same standard deviation for every unit.
    pub fn new(n_units: usize, sigma: f32) -> Self {
        Self {
            n_units,
            sigma: vec![sigma; n_units],
            dtype: DType::F32,
        }
    }

    /// One standard deviation per unit.
    pub fn with_sigmas(sigma: Vec<f32>) -> Result<Self> {
        if sigma.is_empty() {
            bail!("gaussian layer needs at least one unit")
        }
        Ok(Self {
            n_units: sigma.len(),
            sigma,
            dtype: DType::F32,
        })
    }

    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    fn sigma_tensor(&self, device: &Device, dtype: DType) -> Result<Tensor> {
        Tensor::from_slice(&self.sigma, self.n_units, device)?.to_dtype(dtype)
    }
}

impl UnitLayer for GaussianLayer {
    fn n_units(&self) -> usize {
        self.n_units
    }

    fn init(&self, device: &Device) -> Result<Tensor> {
        let sigma = self.sigma_tensor(device, DType::F32)?;
        Tensor::randn(0f32, 1., self.n_units, device)?
            .broadcast_mul(&sigma)?
            .to_dtype(self.dtype)
    }

    // Interpolates between the total input and the bias: unit variance leaves
    // the input untouched, zero variance pins the mean to the bias.
    fn activation(&self, x: &Tensor, b: &Tensor) -> Result<Tensor> {
        let sigma = self.sigma_tensor(x.device(), x.dtype())?;
        let scaled_input = x.broadcast_mul(&sigma)?;
        let scaled_bias = b.broadcast_mul(&sigma.affine(-1., 1.)?)?;
        scaled_input.broadcast_add(&scaled_bias)
    }

    fn make_rand(&self, batch_size: usize, device: &Device) -> Result<Tensor> {
        let draws = rng::standard_normal(batch_size * self.n_units);
        Tensor::from_vec(draws, (batch_size, self.n_units), device)?.to_dtype(self.dtype)
    }

    fn sample(&self, rand: &Tensor, means: &Tensor) -> Result<Tensor> {
        let sigma = self.sigma_tensor(means.device(), means.dtype())?;
        means
            .broadcast_add(&rand.broadcast_mul(&sigma)?)?
            .to_dtype(self.dtype)
    }
}
