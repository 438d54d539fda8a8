//! # Score Activation

use serde::{Deserialize, Serialize};

/// Maps raw model outputs to scores comparable with thresholds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Independent logistic per label; for multi-label logits.
    #[default]
    Sigmoid,

    /// Pass scores through; for engines which already emit probabilities.
    Identity,
}

impl Activation {
    /// Apply to one value.
    pub fn apply(
        &self,
        x: f32,
    ) -> f32 {
        match self {
            Self::Sigmoid => sigmoid(x),
            Self::Identity => x,
        }
    }

    /// Apply in place to every value.
    pub fn apply_all(
        &self,
        xs: &mut [f32],
    ) {
        if *self == Self::Identity {
            return;
        }
        xs.iter_mut().for_each(|x| *x = self.apply(*x));
    }
}

/// The logistic function; stable for large magnitudes.
pub fn sigmoid(x: f32) -> f32 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.880_797).abs() < 1e-5);
        assert!((sigmoid(-2.0) - 0.119_203).abs() < 1e-5);
        assert_eq!(sigmoid(100.0), 1.0);
        assert_eq!(sigmoid(-200.0), 0.0);
        assert!(sigmoid(f32::NAN).is_nan());
    }

    #[test]
    fn test_apply_all() {
        let mut xs = [0.0, 0.7];
        Activation::Identity.apply_all(&mut xs);
        assert_eq!(xs, [0.0, 0.7]);

        Activation::Sigmoid.apply_all(&mut xs);
        assert_eq!(xs[0], 0.5);
        assert!(xs[1] > 0.66 && xs[1] < 0.67);
    }
}
