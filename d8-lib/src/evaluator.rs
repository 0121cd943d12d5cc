use crate::dice;
use crate::dnd;
use crate::kob;
use crate::roll;
use itertools::Itertools;

/// Represent an evaluator
pub(crate) struct Evaluator;

impl Evaluator {
    /// Compute the display string for a parsed intent
    pub(crate) fn eval<S: roll::Source>(kind: &roll::Kind, source: &mut S) -> String {
        match kind {
            roll::Kind::Dnd(roll) => Self::eval_dnd(roll, source),
            roll::Kind::Explosion(roll) => Self::eval_explosion(*roll, source),
        }
    }

    fn eval_dnd<S: roll::Source>(roll: &dnd::Roll, source: &mut S) -> String {
        match roll.special {
            dnd::Special::Not => Self::eval_dice(roll, source),
            _ => Self::eval_special(roll, source),
        }
    }

    /// Throw the pair and keep the better or worse die, modifier applied once
    fn eval_special<S: roll::Source>(roll: &dnd::Roll, source: &mut S) -> String {
        let first = source.throw(roll.die_type);
        let second = source.throw(roll.die_type);
        let (label, kept) = match roll.special {
            dnd::Special::Advantage => ("Advantage", first.max(second)),
            _ => ("Disadvantage", first.min(second)),
        };
        format!(
            "{label} result: {}",
            dice::format_die(roll.die_type, kept, roll.modifier)
        )
    }

    /// N independent throws. Without the multimodifier the modifier shows on
    /// the first die's segment and counts once in the total; with it, every
    /// segment and every summand carries it.
    fn eval_dice<S: roll::Source>(roll: &dnd::Roll, source: &mut S) -> String {
        let throws: Vec<u64> = (0..roll.die_count)
            .map(|_| source.throw(roll.die_type))
            .collect();
        let segments = throws
            .iter()
            .enumerate()
            .map(|(nth, &value)| {
                if roll.multimodifier || nth == 0 {
                    dice::format_die(roll.die_type, value, roll.modifier)
                } else {
                    dice::format_die(roll.die_type, value, 0)
                }
            })
            .join(", ");
        if !roll.display_running_total {
            return segments;
        }
        let raw: i64 = throws.iter().map(|&value| value as i64).sum();
        let total = if roll.multimodifier {
            raw + roll.modifier * roll.die_count as i64
        } else {
            raw + roll.modifier
        };
        format!("{segments}\nFor a total roll value of: {total}")
    }

    /// Chain throws, graduating the die on each maximum. The d20 keeps
    /// exploding into fresh d20s.
    fn eval_explosion<S: roll::Source>(mut roll: kob::Roll, source: &mut S) -> String {
        let mut segments = Vec::new();
        let mut total: i64 = 0;
        loop {
            let value = source.throw(roll.die_type);
            total += value as i64;
            let segment = dice::format_die(roll.die_type, value, 0);
            if value < roll.die_type {
                segments.push(segment);
                break;
            }
            segments.push(format!("{segment} EXPLOSION"));
            roll.graduate_die();
        }
        format!(
            "{}\nFor a total roll value of: {total}",
            segments.iter().join(", ")
        )
    }
}
