use std::fmt;

use crate::{Error, Result};

/// A channel name, always prefixed with `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel(String);

impl Channel {
    /// Normalizes a user-supplied name, adding the `#` prefix when missing.
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() || name == "#" {
            return Err(Error::MissingChannel);
        }

        if name.starts_with('#') {
            Ok(Self(name.to_string()))
        } else {
            Ok(Self(format!("#{name}")))
        }
    }

    /// Like [`Channel::parse`], treating an absent flag as missing.
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        arg.map_or(Err(Error::MissingChannel), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("general", "#general")]
    #[case("#general", "#general")]
    #[case("  random ", "#random")]
    fn normalizes_prefix(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Channel::parse(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("#")]
    fn rejects_empty_names(#[case] input: &str) {
        assert!(matches!(Channel::parse(input), Err(Error::MissingChannel)));
    }

    #[test]
    fn absent_flag_is_missing_channel() {
        assert!(matches!(Channel::from_arg(None), Err(Error::MissingChannel)));
    }
}
