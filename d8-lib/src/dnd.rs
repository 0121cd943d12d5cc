use crate::error::Result;
use crate::parser;
use crate::parser::Rule;
use pest::Parser;

/// Mark a roll as advantage or disadvantage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Advantage,
    Disadvantage,
    Not,
}

/// Parsed DnD roll intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub die_type: u64,
    pub die_count: u64,
    pub modifier: i64,
    /// Apply the modifier to every die instead of once to the total
    pub multimodifier: bool,
    pub special: Special,
    pub display_running_total: bool,
}

impl Default for Roll {
    fn default() -> Self {
        Roll {
            die_type: 20,
            die_count: 1,
            modifier: 0,
            multimodifier: false,
            special: Special::Not,
            display_running_total: true,
        }
    }
}

impl Roll {
    fn coin() -> Self {
        Roll {
            die_type: crate::dice::COIN_SIDES,
            display_running_total: false,
            ..Roll::default()
        }
    }

    fn special(special: Special, modifier: i64) -> Self {
        Roll {
            special,
            modifier,
            ..Roll::default()
        }
    }
}

/// Outcome of trying one sub-grammar against a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed {
    /// The grammar didn't apply, the next one may try
    NoMatch,
    Roll(Roll),
}

/// Sub-grammars in the order they are tried
const PARSERS: [fn(&str) -> Result<Parsed>; 5] = [
    parse_coin,
    parse_advantage,
    parse_disadvantage,
    parse_single_die,
    parse_dice,
];

/// Fold a trimmed line over the sub-grammars, stopping at the first that applies
pub fn parse_line(input: &str) -> Result<Parsed> {
    let input = input.trim();
    for parse in PARSERS {
        match parse(input)? {
            Parsed::NoMatch => continue,
            matched => return Ok(matched),
        }
    }
    Ok(Parsed::NoMatch)
}

pub fn parse_coin(input: &str) -> Result<Parsed> {
    match parser::Parser::parse(Rule::coin, input) {
        Ok(_) => Ok(Parsed::Roll(Roll::coin())),
        Err(_) => Ok(Parsed::NoMatch),
    }
}

pub fn parse_advantage(input: &str) -> Result<Parsed> {
    parse_special(input, Rule::advantage, Special::Advantage)
}

pub fn parse_disadvantage(input: &str) -> Result<Parsed> {
    parse_special(input, Rule::disadvantage, Special::Disadvantage)
}

/// Keyword optionally followed by a signed modifier; a matched keyword with a
/// token that fails integer parsing is an error, not a fall-through
fn parse_special(input: &str, rule: Rule, special: Special) -> Result<Parsed> {
    let Ok(pairs) = parser::Parser::parse(rule, input) else {
        return Ok(Parsed::NoMatch);
    };
    let modifier = match parser::Parser::find_token(pairs, Rule::rest) {
        Some(token) => parser::Parser::modifier(&token)?,
        None => 0,
    };
    Ok(Parsed::Roll(Roll::special(special, modifier)))
}

/// `d<sides>` exactly; a leading count defers to the full grammar
pub fn parse_single_die(input: &str) -> Result<Parsed> {
    let Ok(pairs) = parser::Parser::parse(Rule::single_die, input) else {
        return Ok(Parsed::NoMatch);
    };
    let token = parser::Parser::find_token(pairs, Rule::sides).unwrap();
    Ok(Parsed::Roll(Roll {
        die_type: parser::Parser::die_sides(&token)?,
        ..Roll::default()
    }))
}

/// Full form `[count]d<sides>[modifier][a]`, validated count, sides, modifier
pub fn parse_dice(input: &str) -> Result<Parsed> {
    let Ok(mut pairs) = parser::Parser::parse(Rule::dice, input) else {
        return Ok(Parsed::NoMatch);
    };
    let mut roll = Roll::default();
    for pair in pairs.next().unwrap().into_inner() {
        match pair.as_rule() {
            Rule::count => roll.die_count = parser::Parser::die_count(pair.as_str())?,
            Rule::sides => roll.die_type = parser::Parser::die_sides(pair.as_str())?,
            Rule::modifier => roll.modifier = parser::Parser::modifier(pair.as_str())?,
            Rule::multi => roll.multimodifier = true,
            Rule::EOI => (),
            _ => unreachable!("{:?}", pair),
        }
    }
    Ok(Parsed::Roll(roll))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const OVERSIZED: &str = "1000000000000000000000000";

    #[test]
    fn coin_test() {
        let coin = Roll {
            die_type: 2,
            display_running_total: false,
            ..Roll::default()
        };
        assert_eq!(Ok(Parsed::Roll(coin)), parse_coin("coin"));
        assert_eq!(Ok(Parsed::NoMatch), parse_coin("scoin"));
        assert_eq!(Ok(Parsed::NoMatch), parse_coin("coins"));
    }

    #[test]
    fn advantage_test() {
        assert_eq!(
            Ok(Parsed::Roll(Roll::special(Special::Advantage, 0))),
            parse_advantage("advantage")
        );
        assert_eq!(
            Ok(Parsed::Roll(Roll::special(Special::Advantage, 5))),
            parse_advantage("advantage +5")
        );
        assert_eq!(
            Ok(Parsed::Roll(Roll::special(Special::Advantage, 5))),
            parse_advantage("advantage 5")
        );
        assert_eq!(
            Err(Error::InvalidModifier(OVERSIZED.to_owned())),
            parse_advantage(&format!("advantage {OVERSIZED}"))
        );
        assert_eq!(Ok(Parsed::NoMatch), parse_advantage("d20"));
    }

    #[test]
    fn disadvantage_test() {
        assert_eq!(
            Ok(Parsed::Roll(Roll::special(Special::Disadvantage, 0))),
            parse_disadvantage("disadvantage")
        );
        assert_eq!(
            Ok(Parsed::Roll(Roll::special(Special::Disadvantage, 5))),
            parse_disadvantage("disadvantage +5")
        );
        assert_eq!(
            Err(Error::InvalidModifier(OVERSIZED.to_owned())),
            parse_disadvantage(&format!("disadvantage {OVERSIZED}"))
        );
        assert_eq!(Ok(Parsed::NoMatch), parse_disadvantage("d20"));
    }

    #[test]
    fn single_die_test() {
        assert_eq!(Ok(Parsed::Roll(Roll::default())), parse_single_die("d20"));
        assert_eq!(
            Err(Error::InvalidDieType(OVERSIZED.to_owned())),
            parse_single_die(&format!("d{OVERSIZED}"))
        );
        assert_eq!(
            Err(Error::InvalidDieType("0".to_owned())),
            parse_single_die("d0")
        );
        assert_eq!(Ok(Parsed::NoMatch), parse_single_die("3d20"));
    }

    #[test]
    fn dice_test() {
        let no_modifier = Roll {
            die_type: 20,
            die_count: 3,
            ..Roll::default()
        };
        let modifier = Roll {
            modifier: 5,
            ..no_modifier
        };
        let multimodifier = Roll {
            multimodifier: true,
            ..modifier
        };
        assert_eq!(Ok(Parsed::Roll(no_modifier)), parse_dice("3d20"));
        assert_eq!(Ok(Parsed::Roll(modifier)), parse_dice("3d20+5"));
        assert_eq!(Ok(Parsed::Roll(multimodifier)), parse_dice("3d20+5a"));
        assert_eq!(Ok(Parsed::NoMatch), parse_dice("abc"));
    }

    #[test]
    fn dice_negative_modifier_test() {
        let negative = Roll {
            die_type: 6,
            die_count: 2,
            modifier: -1,
            ..Roll::default()
        };
        assert_eq!(Ok(Parsed::Roll(negative)), parse_dice("2d6-1"));
    }

    #[test]
    fn dice_error_precedence_test() {
        assert_eq!(
            Err(Error::InvalidDieCount(OVERSIZED.to_owned())),
            parse_dice(&format!("{OVERSIZED}d{OVERSIZED}"))
        );
        assert_eq!(
            Err(Error::InvalidDieType(OVERSIZED.to_owned())),
            parse_dice(&format!("2d{OVERSIZED}"))
        );
        assert_eq!(
            Err(Error::InvalidModifier(format!("+{OVERSIZED}"))),
            parse_dice(&format!("2d20+{OVERSIZED}"))
        );
    }

    #[test]
    fn parse_line_test() {
        // the single-die grammar wins over the full form for `d20`
        assert_eq!(Ok(Parsed::Roll(Roll::default())), parse_line("d20"));
        assert_eq!(Ok(Parsed::Roll(Roll::default())), parse_line("  d20  "));
        assert_eq!(Ok(Parsed::NoMatch), parse_line("adv"));
        assert_eq!(Ok(Parsed::NoMatch), parse_line("abc"));
    }
}
