use crate::classifier::error::ClassifierError;

/// Cascade of first-order low-pass filters, one bank of per-label values per stage.
///
/// Stage 0 chases the raw scores, every later stage chases the stage before it
/// (after that stage has been updated for the current frame).
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    stages: Vec<Vec<f32>>,
    factor: f32,
}

impl TemporalSmoother {
    pub fn new(num_labels: usize, num_stages: usize, factor: f32) -> Result<Self, ClassifierError> {
        if num_stages == 0 {
            return Err(ClassifierError::InvalidConfig(
                "filter needs at least one stage".to_string(),
            ));
        }
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ClassifierError::InvalidConfig(format!(
                "filter factor must be in (0, 1], got {}",
                factor
            )));
        }

        Ok(Self {
            stages: vec![vec![0.0; num_labels]; num_stages],
            factor,
        })
    }

    pub fn num_labels(&self) -> usize {
        self.stages[0].len()
    }

    /// Feeds one frame of raw scores through the cascade and overwrites
    /// `scores` with the output of the last stage. A slice of the wrong
    /// length is rejected before any stage is touched.
    pub fn smooth(&mut self, scores: &mut [f32]) -> Result<(), ClassifierError> {
        if scores.len() != self.num_labels() {
            return Err(ClassifierError::ScoreLengthMismatch {
                expected: self.num_labels(),
                actual: scores.len(),
            });
        }
        let factor = self.factor;

        for (filtered, &raw) in self.stages[0].iter_mut().zip(scores.iter()) {
            *filtered += factor * (raw - *filtered);
        }

        for i in 1..self.stages.len() {
            let (previous, rest) = self.stages.split_at_mut(i);
            let source = &previous[i - 1];
            for (filtered, &input) in rest[0].iter_mut().zip(source.iter()) {
                *filtered += factor * (input - *filtered);
            }
        }

        if let Some(last) = self.stages.last() {
            scores.copy_from_slice(last);
        }
        Ok(())
    }

    #[cfg(test)]
    fn output(&self) -> &[f32] {
        self.stages.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_from_rest() {
        let mut smoother = TemporalSmoother::new(2, 3, 0.4).unwrap();
        let mut scores = [1.0, 0.5];

        smoother.smooth(&mut scores).unwrap();

        // Each stage scales the previous one by the factor on the first frame.
        let expected = 0.4f32 * 0.4 * 0.4;
        assert!((scores[0] - expected).abs() < 1e-6);
        assert!((scores[1] - expected * 0.5).abs() < 1e-6);
        assert_eq!(smoother.output(), &scores);
    }

    #[test]
    fn test_repeated_input_moves_closer_but_not_equal() {
        let mut smoother = TemporalSmoother::new(3, 3, 0.4).unwrap();
        let raw = [0.9, 0.05, 0.05];

        let mut first = raw;
        smoother.smooth(&mut first).unwrap();
        let mut second = raw;
        smoother.smooth(&mut second).unwrap();

        for j in 0..raw.len() {
            assert!((raw[j] - second[j]).abs() < (raw[j] - first[j]).abs());
            assert_ne!(second[j], raw[j]);
        }
    }

    #[test]
    fn test_constant_input_converges() {
        for stages in 1..=4 {
            let mut smoother = TemporalSmoother::new(2, stages, 0.4).unwrap();
            let raw = [0.7, 0.2];
            let mut scores = [0.0; 2];

            for _ in 0..200 {
                scores.copy_from_slice(&raw);
                smoother.smooth(&mut scores).unwrap();
            }

            assert!((scores[0] - 0.7).abs() < 1e-4, "stages={}", stages);
            assert!((scores[1] - 0.2).abs() < 1e-4, "stages={}", stages);
        }
    }

    #[test]
    fn test_factor_one_passes_input_through() {
        let mut smoother = TemporalSmoother::new(2, 3, 1.0).unwrap();
        let mut scores = [0.3, 0.6];

        smoother.smooth(&mut scores).unwrap();

        assert_eq!(scores, [0.3, 0.6]);
    }

    #[test]
    fn test_later_stages_lag_earlier_ones() {
        let mut smoother = TemporalSmoother::new(1, 3, 0.4).unwrap();
        let mut scores = [1.0];

        smoother.smooth(&mut scores).unwrap();
        scores = [1.0];
        smoother.smooth(&mut scores).unwrap();

        let values: Vec<f32> = smoother.stages.iter().map(|s| s[0]).collect();
        assert!(values[0] > values[1]);
        assert!(values[1] > values[2]);
    }

    #[test]
    fn test_wrong_length_is_rejected_without_touching_state() {
        let mut smoother = TemporalSmoother::new(3, 3, 0.4).unwrap();
        let mut short = [0.5; 2];

        let result = smoother.smooth(&mut short);

        assert!(matches!(
            result,
            Err(ClassifierError::ScoreLengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
        assert_eq!(short, [0.5; 2]);
        assert_eq!(smoother.output(), &[0.0; 3]);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(TemporalSmoother::new(3, 0, 0.4).is_err());
        assert!(TemporalSmoother::new(3, 3, 0.0).is_err());
        assert!(TemporalSmoother::new(3, 3, 1.5).is_err());
        assert!(TemporalSmoother::new(3, 3, f32::NAN).is_err());
    }
}
