use crate::kind::Kind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Merge arguments were neither all mappings nor all sequences.
    #[error("INVALID_ARGUMENT_KIND: cannot merge {}", format_kinds(.0))]
    InvalidArgumentKind(Vec<Kind>),

    #[error("NOT_PAIR: entry at index {0} is not a [key, value] pair")]
    NotPair(usize),

    #[error("INVALID_KEY: {0} cannot be used as a mapping key")]
    InvalidKey(Kind),

    #[error("NOT_JSON: {0} has no JSON representation")]
    NotJson(Kind),
}

pub type Result<T> = std::result::Result<T, Error>;

fn format_kinds(kinds: &[Kind]) -> String {
    let names: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    format!("[{}]", names.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_kind_message() {
        let err = Error::InvalidArgumentKind(vec![Kind::Mapping, Kind::Sequence]);
        assert_eq!(
            err.to_string(),
            "INVALID_ARGUMENT_KIND: cannot merge [mapping, sequence]"
        );
    }

    #[test]
    fn test_not_pair_message() {
        assert!(Error::NotPair(3).to_string().contains("index 3"));
    }
}
