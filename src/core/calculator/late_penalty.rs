use crate::config::LateCounterPolicy;
use crate::models::DayClassification;
use chrono::NaiveDate;

/// Dates on which the cumulative late counter triggers a full-day cut.
///
/// `days` must be in date order. `threshold == 0` disables the rule.
pub fn late_day_cuts(
    days: &[DayClassification],
    threshold: u32,
    policy: LateCounterPolicy,
) -> Vec<NaiveDate> {
    if threshold == 0 {
        return Vec::new();
    }

    let mut counter = 0u32;
    let mut cuts = Vec::new();

    for day in days.iter().filter(|d| d.counts_as_late) {
        counter += 1;

        match policy {
            LateCounterPolicy::Reset => {
                if counter == threshold {
                    cuts.push(day.date);
                    counter = 0;
                }
            }
            LateCounterPolicy::Accumulate => {
                if counter >= threshold {
                    cuts.push(day.date);
                }
            }
        }
    }

    cuts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayStatus;

    fn lates(n: u32) -> Vec<DayClassification> {
        (1..=n)
            .map(|day| {
                let mut c = DayClassification::free(
                    NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                    DayStatus::Late,
                );
                c.counts_as_late = true;
                c
            })
            .collect()
    }

    fn day_numbers(v: Vec<NaiveDate>) -> Vec<u32> {
        v.iter().map(|d| chrono::Datelike::day(d)).collect()
    }

    #[test]
    fn reset_cuts_every_nth_late() {
        let cuts = late_day_cuts(&lates(7), 3, LateCounterPolicy::Reset);
        assert_eq!(day_numbers(cuts), vec![3, 6]);
    }

    #[test]
    fn accumulate_cuts_from_nth_late_onward() {
        let cuts = late_day_cuts(&lates(5), 3, LateCounterPolicy::Accumulate);
        assert_eq!(day_numbers(cuts), vec![3, 4, 5]);
    }

    #[test]
    fn below_threshold_no_cut() {
        assert!(late_day_cuts(&lates(2), 3, LateCounterPolicy::Reset).is_empty());
        assert!(late_day_cuts(&lates(2), 3, LateCounterPolicy::Accumulate).is_empty());
    }

    #[test]
    fn zero_threshold_disables_the_rule() {
        assert!(late_day_cuts(&lates(10), 0, LateCounterPolicy::Accumulate).is_empty());
    }

    #[test]
    fn only_counted_days_advance_the_counter() {
        let mut days = lates(4);
        days[1].counts_as_late = false;
        let cuts = late_day_cuts(&days, 3, LateCounterPolicy::Reset);
        assert_eq!(day_numbers(cuts), vec![4]);
    }
}
