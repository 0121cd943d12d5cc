use crate::error::Error;
use crate::error::Result;
use crate::parser;
use crate::parser::Rule;
use pest::Parser;

/// Die sizes climbed on each explosion
const LADDER: [u64; 6] = [4, 6, 8, 10, 12, 20];

/// Parsed Kids on Bikes roll intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roll {
    pub die_type: u64,
}

impl Default for Roll {
    fn default() -> Self {
        Roll {
            die_type: LADDER[0],
        }
    }
}

impl Roll {
    /// Advance to the next larger die in the ladder; past the ceiling this is
    /// a no-op. Returns the die size now in play.
    pub fn graduate_die(&mut self) -> u64 {
        self.die_type = LADDER
            .iter()
            .copied()
            .find(|&sides| sides > self.die_type)
            .unwrap_or(self.die_type);
        self.die_type
    }
}

/// Parse an explosion-notation line: a bare die size, nothing else
pub fn parse_line(input: &str) -> Result<Roll> {
    let Ok(pairs) = parser::Parser::parse(Rule::explosion, input.trim()) else {
        return Err(Error::InvalidRollType);
    };
    let token = parser::Parser::find_token(pairs, Rule::sides).unwrap();
    Ok(Roll {
        die_type: parser::Parser::die_sides(&token)?,
    })
}
