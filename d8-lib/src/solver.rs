use crate::dnd;
use crate::error::Error;
use crate::error::Result;
use crate::kob;
use crate::roll;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..1 + sides)
    }
}

/// Rolling system a session can switch between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum System {
    Dnd,
    Explosion,
}

impl System {
    /// Match a system from free text: full name, or first letter in either case
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim() {
            "DnD" | "d" | "D" => Some(System::Dnd),
            "explosion" | "e" | "E" => Some(System::Explosion),
            _ => None,
        }
    }
}

impl std::fmt::Display for System {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            System::Dnd => write!(f, "DnD"),
            System::Explosion => write!(f, "explosion"),
        }
    }
}

/// Represent a dispatcher that routes lines to the active system's grammar
#[derive(Clone, Debug)]
pub struct Solver {
    system: System,
}

impl Solver {
    pub fn new(system: System) -> Self {
        Solver { system }
    }

    /// Active rolling system
    pub fn system(&self) -> System {
        self.system
    }

    /// Switch the active system from free text
    pub fn select(&mut self, input: &str) -> Result<System> {
        self.system = System::from_input(input)
            .ok_or_else(|| Error::UnknownCommand(input.trim().to_owned()))?;
        Ok(self.system)
    }

    /// Parse a line with the active system's grammar. A line no DnD
    /// sub-grammar applies to is not a valid roll type.
    pub fn parse(&self, line: &str) -> Result<roll::Kind> {
        match self.system {
            System::Dnd => match dnd::parse_line(line)? {
                dnd::Parsed::Roll(roll) => Ok(roll::Kind::Dnd(roll)),
                dnd::Parsed::NoMatch => Err(Error::InvalidRollType),
            },
            System::Explosion => Ok(roll::Kind::Explosion(kob::parse_line(line)?)),
        }
    }

    /// Roll a line using the default Rng source
    pub fn solve(&self, line: &str) -> Result<String> {
        self.solve_with(line, &mut rand::thread_rng())
    }

    /// Roll a line using the provided Rng
    pub fn solve_with<R: Rng>(&self, line: &str, generator: &mut R) -> Result<String> {
        self.solve_with_source(line, &mut RandomSource { generator })
    }

    /// Roll a line using the provided source
    pub fn solve_with_source<S: roll::Source>(&self, line: &str, source: &mut S) -> Result<String> {
        Ok(self.parse(line)?.perform(source))
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(System::Dnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_from_input_test() {
        assert_eq!(Some(System::Dnd), System::from_input("DnD"));
        assert_eq!(Some(System::Dnd), System::from_input("d"));
        assert_eq!(Some(System::Dnd), System::from_input("D"));
        assert_eq!(Some(System::Explosion), System::from_input("explosion"));
        assert_eq!(Some(System::Explosion), System::from_input("e"));
        assert_eq!(Some(System::Explosion), System::from_input("E"));
        // full names only match verbatim
        assert_eq!(None, System::from_input("dnd"));
        assert_eq!(None, System::from_input("Explosion"));
        assert_eq!(None, System::from_input("kob"));
    }

    #[test]
    fn select_test() {
        let mut solver = Solver::default();
        assert_eq!(System::Dnd, solver.system());
        assert_eq!(Ok(System::Explosion), solver.select("e"));
        assert_eq!(System::Explosion, solver.system());
        let error = solver.select("x").unwrap_err();
        assert_eq!(Error::UnknownCommand("x".to_owned()), error);
        assert_eq!("unrecognized command: x", error.to_string());
        // a failed switch leaves the session where it was
        assert_eq!(System::Explosion, solver.system());
    }

    #[test]
    fn parse_routes_by_system_test() {
        let solver = Solver::default();
        assert!(matches!(
            solver.parse("d20"),
            Ok(crate::roll::Kind::Dnd(_))
        ));
        assert_eq!(Err(Error::InvalidRollType), solver.parse("4").map(|_| ()));

        let solver = Solver::new(System::Explosion);
        assert!(matches!(
            solver.parse("4"),
            Ok(crate::roll::Kind::Explosion(_))
        ));
        assert_eq!(
            Err(Error::InvalidRollType),
            solver.parse("d20").map(|_| ())
        );
    }
}
