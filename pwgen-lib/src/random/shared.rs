use std::sync::Mutex;

use rand::RngCore;

use crate::error::GeneratorError;
use crate::password::{Password, PasswordLength};

/// One random source shared between threads, each draw holds the lock for
/// the whole password.
pub struct SharedGenerator<R> {
    rng: Mutex<R>,
}

impl<R: RngCore> SharedGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn generate(&self, length: PasswordLength) -> Result<Password, GeneratorError> {
        let mut rng = self.rng.lock()?;
        super::generate(length, &mut *rng)
    }

    pub fn into_inner(self) -> Result<R, GeneratorError> {
        Ok(self.rng.into_inner()?)
    }
}
