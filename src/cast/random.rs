//! Random cast: seeded from the current instant alone.

use crate::clock::Clock;
use crate::model::Seeds;

use super::{Moment, Translation};

pub(super) fn translate(clock: &dyn Clock) -> Translation {
    let now = Moment::now(clock);
    let upper = now.year + now.month + now.day;
    let lower = now.hour * 60 + now.minute + now.second;
    let changing = upper + lower + now.millisecond;

    Translation {
        seeds: Seeds {
            upper,
            lower,
            changing,
        },
        method: "随机起卦（心动起卦）".to_string(),
        trace: vec![
            format!("上卦取数：{} + {} + {} = {upper}", now.year, now.month, now.day),
            format!(
                "下卦取数：{} × 60 + {} + {} = {lower}",
                now.hour, now.minute, now.second
            ),
            format!(
                "动爻取数：{upper} + {lower} + {}（毫秒） = {changing}",
                now.millisecond
            ),
        ],
        time: now.timestamp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cast::testing::{clock, zoned};
    use crate::clock::FixedClock;

    #[test]
    fn seeds_come_from_the_instant() {
        let t = translate(&clock());
        // 2024-03-15 14:27:08.250.
        assert_eq!(
            t.seeds,
            Seeds {
                upper: 2042,
                lower: 14 * 60 + 27 + 8,
                changing: 2042 + 875 + 250
            }
        );
    }

    #[test]
    fn the_same_instant_gives_the_same_seeds() {
        let a = translate(&clock());
        let b = translate(&clock());
        assert_eq!(a, b);
    }

    #[test]
    fn milliseconds_move_the_changing_seed() {
        let later = FixedClock::new(zoned(2024, 3, 15, 14, 27, 8, 251));
        assert_eq!(
            translate(&later).seeds.changing,
            translate(&clock()).seeds.changing + 1
        );
    }
}
