/// Sides on the coin die
pub const COIN_SIDES: u64 = 2;

/// Render one die outcome as `(R)`, or `(R) + M = [V]` with a modifier set.
/// A two-sided die is a coin and shows its face instead of a number.
pub fn format_die(die_type: u64, value: u64, modifier: i64) -> String {
    if die_type == COIN_SIDES {
        return match value {
            1 => "(H)".to_owned(),
            _ => "(T)".to_owned(),
        };
    }
    if modifier == 0 {
        format!("({value})")
    } else {
        format!("({value}) + {modifier} = [{}]", value as i64 + modifier)
    }
}
