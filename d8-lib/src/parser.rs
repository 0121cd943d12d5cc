use crate::error::Error;
use crate::error::Result;
use pest::iterators::Pairs;
use pest_derive::Parser;

/// Pest parser
#[derive(Parser)]
#[grammar = "d8.pest"]
pub struct Parser;

impl Parser {
    /// First token matched by `rule` anywhere under `pairs`
    pub(crate) fn find_token(pairs: Pairs<Rule>, rule: Rule) -> Option<String> {
        pairs
            .flatten()
            .find(|pair| pair.as_rule() == rule)
            .map(|pair| pair.as_str().to_owned())
    }

    pub(crate) fn die_count(token: &str) -> Result<u64> {
        token
            .parse()
            .map_err(|_| Error::InvalidDieCount(token.to_owned()))
    }

    /// A die needs at least one side, so `0` is rejected along with overflow
    pub(crate) fn die_sides(token: &str) -> Result<u64> {
        match token.parse() {
            Ok(0) | Err(_) => Err(Error::InvalidDieType(token.to_owned())),
            Ok(sides) => Ok(sides),
        }
    }

    /// The token keeps its sign prefix, both for parsing and error display
    pub(crate) fn modifier(token: &str) -> Result<i64> {
        token
            .parse()
            .map_err(|_| Error::InvalidModifier(token.to_owned()))
    }
}
