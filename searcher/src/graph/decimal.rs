use std::fmt;

/// Prints a length or heuristic rounded to six decimal places, without
/// trailing zeros, so `0.1 + 0.2` reads as `0.3` and `4.0` as `4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = format!("{:.6}", self.0);
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        // Rounding can leave a bare sign behind, e.g. -0.0000001.
        if text == "-0" {
            return write!(f, "0");
        }
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trims() {
        assert_eq!(Decimal(4.0).to_string(), "4");
        assert_eq!(Decimal(9.5).to_string(), "9.5");
        assert_eq!(Decimal(0.1 + 0.2).to_string(), "0.3");
        assert_eq!(Decimal(100.0).to_string(), "100");
        assert_eq!(Decimal(-2.25).to_string(), "-2.25");
        assert_eq!(Decimal(1.0 / 3.0).to_string(), "0.333333");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(Decimal(0.0).to_string(), "0");
        assert_eq!(Decimal(-0.0).to_string(), "0");
        assert_eq!(Decimal(-0.0000001).to_string(), "0");
    }

    #[test]
    fn infinite() {
        assert_eq!(Decimal(f64::INFINITY).to_string(), "inf");
    }
}
