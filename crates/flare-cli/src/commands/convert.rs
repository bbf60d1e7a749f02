//! Color conversion command
//!
//! Converts one color triple between any two supported spaces and prints
//! the result.

use anyhow::{ensure, Result};
use flare_color::convert;
use tracing::debug;

use crate::ConvertArgs;

pub fn run(args: ConvertArgs) -> Result<()> {
    println!("{}", convert_line(&args)?);
    Ok(())
}

fn convert_line(args: &ConvertArgs) -> Result<String> {
    ensure!(args.values.len() == 3, "expected 3 components, got {}", args.values.len());
    let input = [args.values[0], args.values[1], args.values[2]];
    let out = convert(input, args.from, args.to);
    debug!(from = %args.from, to = %args.to, ?input, ?out, "convert");
    Ok(format!("{:.6} {:.6} {:.6}", out[0], out[1], out[2]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flare_core::ColorSpaceId;

    fn args(from: &str, to: &str, values: [f32; 3]) -> ConvertArgs {
        ConvertArgs {
            from: from.parse().unwrap(),
            to: to.parse().unwrap(),
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_srgb_to_hsv() {
        let line = convert_line(&args("srgb", "hsv", [0.0, 0.0, 1.0])).unwrap();
        assert_eq!(line, "0.666667 1.000000 1.000000");
    }

    #[test]
    fn test_identity() {
        let a = args("lab", "lab", [50.0, -20.0, 10.0]);
        assert_eq!(a.from, ColorSpaceId::Lab);
        assert_eq!(convert_line(&a).unwrap(), "50.000000 -20.000000 10.000000");
    }

    #[test]
    fn test_wrong_arity() {
        let mut a = args("srgb", "xyz", [0.0; 3]);
        a.values.pop();
        assert!(convert_line(&a).is_err());
    }
}
