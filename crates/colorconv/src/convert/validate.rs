use crate::error::ColorParseError;
use crate::Float;

/// A validator checks any number of components at once.
pub type Validator = fn(&[Float]) -> Result<(), ColorParseError>;

/// Check that all values fall into the given inclusive range.
///
/// The bounds may be given in either order. Not-a-number compares false with
/// everything and hence passes this check; use [`validate_nan`] first.
pub fn validate_range(low: Float, high: Float, values: &[Float]) -> Result<(), ColorParseError> {
    let min = low.min(high);
    let max = low.max(high);

    if values.iter().any(|&n| min > n || n > max) {
        Err(ColorParseError::InvalidRange)
    } else {
        Ok(())
    }
}

/// Check that all values are hues `0..=360`.
pub fn validate_hue(values: &[Float]) -> Result<(), ColorParseError> {
    validate_range(0.0, 360.0, values)
}

/// Check that all values are percentages `0..=100`.
pub fn validate_percent(values: &[Float]) -> Result<(), ColorParseError> {
    validate_range(0.0, 100.0, values)
}

/// Check that all values are bytes `0..=255`.
///
/// Values need not be integral; however, 255.001 is out of range.
pub fn validate_8bit(values: &[Float]) -> Result<(), ColorParseError> {
    validate_range(0.0, 255.0, values)
}

/// Check that no value is not-a-number.
pub fn validate_nan(values: &[Float]) -> Result<(), ColorParseError> {
    if values.iter().any(|n| n.is_nan()) {
        Err(ColorParseError::NaN)
    } else {
        Ok(())
    }
}

/// Find the first failing check and the values it rejected.
fn first_failure<'a>(
    checks: &[(Validator, &'a [Float])],
) -> Result<(), (&'a [Float], ColorParseError)> {
    checks
        .iter()
        .try_for_each(|&(validate, values)| validate(values).map_err(|error| (values, error)))
}

/// Run the validators on their values in order.
///
/// This function stops at and returns the first failure. Since not-a-number
/// passes every range check, conversions list [`validate_nan`] first.
pub fn validate_all(checks: &[(Validator, &[Float])]) -> Result<(), ColorParseError> {
    first_failure(checks).map_err(|(values, error)| {
        log::debug!("rejecting components {:?}: {}", values, error);
        error
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ranges() {
        let cases: [(Validator, &[Float], Result<(), ColorParseError>); 9] = [
            (validate_hue, &[0.0, 180.0, 360.0], Ok(())),
            (validate_hue, &[361.0], Err(ColorParseError::InvalidRange)),
            (validate_hue, &[-1.0], Err(ColorParseError::InvalidRange)),
            (validate_percent, &[0.0, 100.0], Ok(())),
            (validate_percent, &[100.5], Err(ColorParseError::InvalidRange)),
            (validate_8bit, &[0.0, 255.0], Ok(())),
            (validate_8bit, &[256.0], Err(ColorParseError::InvalidRange)),
            (validate_8bit, &[255.001], Err(ColorParseError::InvalidRange)),
            // An empty batch is trivially valid.
            (validate_8bit, &[], Ok(())),
        ];

        for (validate, values, expected) in cases {
            assert_eq!(validate(values), expected, "validating {:?}", values);
        }

        // Reversed bounds are normalized.
        assert_eq!(
            validate_range(10.0, 0.0, &[5.0]),
            Ok(()),
            "5 lies within 10..=0"
        );
        assert_eq!(
            validate_range(10.0, 0.0, &[11.0]),
            Err(ColorParseError::InvalidRange),
            "11 lies outside 10..=0"
        );
    }

    #[test]
    fn test_nan() {
        let cases: [(Validator, &[Float], Result<(), ColorParseError>); 4] = [
            (validate_nan, &[0.0, 1.0, Float::INFINITY], Ok(())),
            (validate_nan, &[0.0, Float::NAN], Err(ColorParseError::NaN)),
            // Not-a-number slips through range checks.
            (validate_8bit, &[Float::NAN], Ok(())),
            (validate_8bit, &[Float::INFINITY], Err(ColorParseError::InvalidRange)),
        ];

        for (validate, values, expected) in cases {
            assert_eq!(validate(values), expected, "validating {:?}", values);
        }
    }

    #[test]
    fn test_all() {
        let values = [Float::NAN, 300.0, 0.0];
        let nan_first: [(Validator, &[Float]); 2] =
            [(validate_nan, &values), (validate_8bit, &values)];
        assert_eq!(
            validate_all(&nan_first),
            Err(ColorParseError::NaN),
            "not-a-number checked first"
        );

        let range_first: [(Validator, &[Float]); 2] =
            [(validate_8bit, &values), (validate_nan, &values)];
        assert_eq!(
            validate_all(&range_first),
            Err(ColorParseError::InvalidRange),
            "range checked first"
        );

        let hue = [360.0];
        let percent = [0.0, 100.0];
        let hsl: [(Validator, &[Float]); 2] = [(validate_hue, &hue), (validate_percent, &percent)];
        assert_eq!(validate_all(&hsl), Ok(()), "valid HSL components");
        assert_eq!(validate_all(&[]), Ok(()), "no checks at all");
    }

    #[test]
    fn test_first_failure() {
        let all = [120.0, 50.0, 101.0];
        let hue = [120.0];
        let percent = [50.0, 101.0];
        let checks: [(Validator, &[Float]); 3] = [
            (validate_nan, &all),
            (validate_hue, &hue),
            (validate_percent, &percent),
        ];

        // Only the rejected check's values are reported.
        assert_eq!(
            first_failure(&checks),
            Err((&percent[..], ColorParseError::InvalidRange)),
            "percentages are out of range"
        );

        let valid: [(Validator, &[Float]); 1] = [(validate_hue, &hue)];
        assert_eq!(first_failure(&valid), Ok(()), "hue is in range");
    }
}
