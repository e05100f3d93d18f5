//! Split the color tokens of the command line into a conversion request.

use anyhow::{bail, Result};
use metrochrome::Space;

/// What the color tokens ask for.
#[derive(Debug, PartialEq)]
pub enum Request {
    /// Print the help screen.
    Help,
    /// Convert the values given in one space to another.
    Convert {
        from: Space,
        values: Vec<String>,
        to: Space,
    },
}

/// Parse `<IN_FLAG> <VALUES>... <OUT_FLAG>`, e.g. `-rgb 0 0 0 -cmyk`.
pub fn parse(tokens: &[String]) -> Result<Request> {
    if let [only] = tokens {
        if only == "-help" {
            return Ok(Request::Help);
        }
    }

    let Some((first, rest)) = tokens.split_first() else {
        bail!("expected an input color space flag");
    };
    let Some(from) = Space::from_flag(first) else {
        bail!("{first:?} is not a color space flag");
    };

    let arity = from.arity();
    if rest.len() != arity + 1 {
        bail!(
            "{from} takes {arity} value{} followed by an output color space flag",
            if arity == 1 { "" } else { "s" }
        );
    }

    let Some((last, values)) = rest.split_last() else {
        bail!("expected an output color space flag");
    };
    let Some(to) = Space::from_flag(last) else {
        bail!("{last:?} is not a color space flag");
    };

    Ok(Request::Convert {
        from,
        values: values.to_vec(),
        to,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn help() {
        assert_eq!(parse(&tokens("-help")).unwrap(), Request::Help);
    }

    #[test]
    fn conversions() {
        assert_eq!(
            parse(&tokens("-rgb 0 0 0 -cmyk")).unwrap(),
            Request::Convert {
                from: Space::Rgb,
                values: tokens("0 0 0"),
                to: Space::Cmyk,
            }
        );
        assert_eq!(
            parse(&tokens("-rgbh #FFFFFF --rgb")).unwrap(),
            Request::Convert {
                from: Space::RgbHex,
                values: tokens("#FFFFFF"),
                to: Space::Rgb,
            }
        );
        assert_eq!(
            parse(&tokens("--cmyk-ratio 0 1 0.955 0.827 -hsl")).unwrap(),
            Request::Convert {
                from: Space::CmykRatio,
                values: tokens("0 1 0.955 0.827"),
                to: Space::Hsl,
            }
        );
    }

    #[test]
    fn negative_values_are_left_for_validation() {
        assert_eq!(
            parse(&tokens("-cmyk -1 0 0 0 -rgb")).unwrap(),
            Request::Convert {
                from: Space::Cmyk,
                values: tokens("-1 0 0 0"),
                to: Space::Rgb,
            }
        );
    }

    #[test]
    fn malformed_requests() {
        for line in [
            "",
            "0 0 0 -cmyk",
            "-lab 0 0 0 -rgb",
            "-rgb 0 0 -cmyk",
            "-rgb 0 0 0 0 -cmyk",
            "-rgb 0 0 0",
            "-rgb 0 0 0 cmyk",
            "-temp 6500 -nope",
        ] {
            assert!(parse(&tokens(line)).is_err(), "{line:?}");
        }
    }
}
