use platesim_core::NoiseKind;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("invalid scale {0:?}: expected a positive number")]
    InvalidScale(String),
    #[error("unexpected argument {0:?} (usage: islands [--perlin] [scale])")]
    UnexpectedArgument(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IslandArgs {
    pub scale: f64,
    pub noise: NoiseKind,
}

/// Parse `[--perlin] [scale]` (program name already skipped).
pub fn parse_island_args<I, S>(args: I, default_scale: f64) -> Result<IslandArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = IslandArgs {
        scale: default_scale,
        noise: NoiseKind::Uniform,
    };
    let mut seen_scale = false;
    for arg in args {
        let arg = arg.as_ref();
        if arg == "--perlin" {
            parsed.noise = NoiseKind::Perlin;
        } else if arg.starts_with("--") || seen_scale {
            return Err(CliError::UnexpectedArgument(arg.to_string()));
        } else {
            parsed.scale = parse_scale(arg)?;
            seen_scale = true;
        }
    }
    Ok(parsed)
}

pub fn parse_scale(raw: &str) -> Result<f64, CliError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CliError::InvalidScale(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_use_defaults() {
        let args = parse_island_args(Vec::<String>::new(), 100.0).unwrap();
        assert_eq!(
            args,
            IslandArgs {
                scale: 100.0,
                noise: NoiseKind::Uniform
            }
        );
    }

    #[test]
    fn parses_scale_and_flag_in_any_order() {
        let a = parse_island_args(["2.5", "--perlin"], 100.0).unwrap();
        let b = parse_island_args(["--perlin", " 2.5 "], 100.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.scale, 2.5);
        assert_eq!(a.noise, NoiseKind::Perlin);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["big", "-3", "inf", "0", ""] {
            assert_eq!(
                parse_island_args([bad], 100.0),
                Err(CliError::InvalidScale(bad.into())),
                "{bad:?}"
            );
        }
        assert_eq!(
            parse_island_args(["3", "4"], 100.0),
            Err(CliError::UnexpectedArgument("4".into()))
        );
        assert_eq!(
            parse_island_args(["--fast"], 100.0),
            Err(CliError::UnexpectedArgument("--fast".into()))
        );
    }

    #[test]
    fn error_message_names_the_input() {
        let err = parse_scale("abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid scale \"abc\": expected a positive number");
    }
}
