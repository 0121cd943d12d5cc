use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const D8_AUTHOR: &str = crate_authors!();
const D8_VERSION: &str = crate_version!();
const D8_ABOUT: &str = crate_description!();
const D8_FLAG_DND_SHORT: char = 'd';
const D8_FLAG_DND_HELP: &str = "Roll once using DnD notation and exit";
const D8_FLAG_KOB_SHORT: char = 'k';
const D8_FLAG_KOB_HELP: &str = "Roll once using Kids on Bikes notation and exit";
const D8_FLAG_DEBUG_HELP: &str = "Enable Debug logging";

#[derive(Parser, Debug)]
#[command(author = D8_AUTHOR, version = D8_VERSION, about = D8_ABOUT)]
pub struct Args {
    #[arg(short = D8_FLAG_DND_SHORT, value_name = "ROLL", help = D8_FLAG_DND_HELP, conflicts_with = "kob")]
    pub dnd: Option<String>,

    #[arg(short = D8_FLAG_KOB_SHORT, value_name = "ROLL", help = D8_FLAG_KOB_HELP)]
    pub kob: Option<String>,

    #[arg(long, help = D8_FLAG_DEBUG_HELP, action)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_self_check_test() {
        Args::command().debug_assert();
    }

    #[test]
    fn one_shot_flags_test() {
        let args = Args::try_parse_from(["d8", "-d", "3d20+5"]).unwrap();
        assert_eq!(Some("3d20+5".to_owned()), args.dnd);
        assert_eq!(None, args.kob);

        let args = Args::try_parse_from(["d8", "-k", "4"]).unwrap();
        assert_eq!(Some("4".to_owned()), args.kob);

        // the two systems are mutually exclusive in one-shot mode
        assert!(Args::try_parse_from(["d8", "-d", "coin", "-k", "4"]).is_err());
        // a roll flag without roll text is an argument error
        assert!(Args::try_parse_from(["d8", "-d"]).is_err());
        // unknown flags are rejected
        assert!(Args::try_parse_from(["d8", "-x"]).is_err());
        // stray positionals are rejected
        assert!(Args::try_parse_from(["d8", "coin"]).is_err());
    }
}
