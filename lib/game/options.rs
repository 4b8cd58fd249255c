use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::{num::NonZeroUsize, str::FromStr};

/// Configuration for a [`Game`](`crate::game::Game`).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename = "options", default)]
pub struct Options {
    /// Whether legal moves are remembered per square until the position changes.
    pub memoize: bool,

    /// The maximum number of moves that can be taken back, or unbounded if `None`.
    ///
    /// The last move can always be taken back.
    #[cfg_attr(test, strategy(proptest::strategy::Strategy::prop_map(
        proptest::option::of(1usize..=8),
        |n| n.and_then(NonZeroUsize::new),
    )))]
    pub history: Option<NonZeroUsize>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            memoize: true,
            history: None,
        }
    }
}

impl Display for Options {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game options")]
pub struct ParseOptionsError(ron::de::SpannedError);

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prop_assume;
    use std::num::NonZeroUsize;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_options_is_an_identity(o: Options) {
        assert_eq!(o.to_string().parse(), Ok(o));
    }

    #[proptest]
    fn omitted_fields_take_default_values() {
        assert_eq!("options()".parse(), Ok(Options::default()));
        assert_eq!(
            "options(history: Some(3))".parse(),
            Ok(Options {
                history: NonZeroUsize::new(3),
                ..Options::default()
            })
        );
    }

    #[proptest]
    fn parsing_options_fails_for_an_empty_history() {
        assert!("options(history: Some(0))".parse::<Options>().is_err());
    }

    #[proptest]
    fn parsing_options_fails_for_unknown_fields(#[strategy("[a-z]{1,8}")] f: String) {
        prop_assume!(f != "memoize" && f != "history");
        assert!(format!("options({f}: true)").parse::<Options>().is_err());
    }

    #[proptest]
    fn parsing_options_fails_for_invalid_syntax(#[strategy("[^()]*")] s: String) {
        assert!(format!("options({s}").parse::<Options>().is_err());
    }
}
