/// Notation guide rendered through termimad
pub(crate) const HELP_TEXT: &str = r#"# D8

Die rolls are denoted by `(R)`, actual values (including bonuses) by `[V]`.

## Session commands

|:-:|:-|
|**command**|**effect**|
|:-:|:-|
|`help`|show this guide|
|`switch <system>`|change the rolling system: `DnD` or `explosion` (`d`/`e` for short)|
|`exit`|leave the session|
|-

## DnD notation

|:-:|:-|
|`d20`|roll one twenty-sided die|
|`3d20`|roll three of them|
|`3d20+5`|add 5 to the total (`-5` subtracts)|
|`3d20+5a`|add 5 to every die instead|
|`advantage +3`|roll two d20, keep the best, add 3|
|`disadvantage`|roll two d20, keep the worst|
|`coin`|flip a coin: `(H)` or `(T)`|
|-

## Explosion notation (Kids on Bikes)

Enter a bare die size, e.g. `4`. Rolling the maximum *explodes*: the die
graduates along `4 → 6 → 8 → 10 → 12 → 20` and is thrown again, and a
maxed d20 keeps exploding into fresh d20s.
"#;
