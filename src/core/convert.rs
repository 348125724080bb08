use crate::core::parameter::Parameter;

/// Constant-parameter shorthand: `akp(440.0)` is a connected parameter fixed
/// at 440.0 on both channels.
pub fn akp(value: f32) -> Parameter {
    Parameter::constant(value)
}

impl From<f32> for Parameter {
    fn from(value: f32) -> Self {
        Parameter::constant(value)
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::constant(value as f32)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::constant(value as f32)
    }
}

/// The ratio between a pitch offset in semitones and 1.0: `2^(semitones/12)`.
///
/// Twelve semitones is one octave, a ratio of 2.
pub fn midi_ratio(semitones: f32) -> f32 {
    libm::powf(2.0, semitones * (1.0 / 12.0))
}

/// Double-precision variant of [`midi_ratio`].
pub fn midi_ratio_f64(semitones: f64) -> f64 {
    libm::pow(2.0, semitones * (1.0 / 12.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_akp_is_constant() {
        let param = akp(3.0);
        assert_eq!(param.left_output(), 3.0);
        assert_eq!(param.right_output(), 3.0);
        assert!(param.is_connected());
    }

    #[test]
    fn test_conversions_route_through_constant() {
        let from_int = Parameter::from(7);
        assert_eq!(from_int.left_output(), 7.0);
        assert!(from_int.is_connected());

        let from_double = Parameter::from(0.5f64);
        assert_eq!(from_double.left_output(), 0.5);
        assert!(from_double.is_connected());

        let from_float = Parameter::from(2.5f32);
        assert_eq!(from_float.right_output(), 2.5);
    }

    #[test]
    fn test_midi_ratio_octave() {
        assert!((midi_ratio(12.0) - 2.0).abs() < 1e-6);
        assert!((midi_ratio(-12.0) - 0.5).abs() < 1e-6);
        assert!((midi_ratio(0.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_midi_ratio_f64_octave() {
        assert!((midi_ratio_f64(12.0) - 2.0).abs() < 1e-9);
    }
}
