//! Calendar scale for the year axis.
//!
//! Dates are whole days (`NaiveDate`); positions are proportional to days
//! elapsed since the start of the domain. Ticks fall on calendar
//! boundaries: days, Sundays, months, quarters or years, whichever
//! interval puts the tick count closest to the one requested.

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use super::linear::tick_step;

/// Builds a date the way `new Date(year, month_index, day)` does in a
/// browser: month 12 rolls into the next year, day 0 is the last day of
/// the previous month.
///
/// `js_date(1900, 0, 0)` is 1899-12-31 and `js_date(1900, 12, 0)` is
/// 1900-12-31. Returns `None` only outside chrono's supported years.
pub fn js_date(year: i32, month_index: i32, day: i32) -> Option<NaiveDate> {
    let year = year.checked_add(month_index.div_euclid(12))?;
    let month = month_index.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

/// Calendar interval between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickInterval {
    /// Every `n`th day of the month, counting from the 1st.
    Days(u32),
    /// Every Sunday.
    Week,
    /// First of every month whose zero-based index is a multiple of `n`.
    Months(u32),
    /// 1 January of every year that is a multiple of `n`.
    Years(i32),
}

/// Candidate intervals, shortest first, with their nominal length in days.
const INTERVALS: [(TickInterval, f64); 6] = [
    (TickInterval::Days(1), 1.0),
    (TickInterval::Days(2), 2.0),
    (TickInterval::Week, 7.0),
    (TickInterval::Months(1), 30.0),
    (TickInterval::Months(3), 90.0),
    (TickInterval::Years(1), 365.0),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (NaiveDate, NaiveDate),
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn scale(&self, date: NaiveDate) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = (d1 - d0).num_days();
        if span == 0 {
            return (r0 + r1) / 2.0;
        }
        let offset = (date - d0).num_days();
        r0 + offset as f64 / span as f64 * (r1 - r0)
    }

    /// The step, in whole years, between year ticks.
    pub fn year_step(&self, count: usize) -> i32 {
        let (lo, hi) = self.ordered_domain();
        let step = tick_step(fractional_year(lo), fractional_year(hi), count as f64);
        (step.round() as i32).max(1)
    }

    /// Interval whose length is nearest (by ratio) to the domain span
    /// divided by `count`. Spans longer than `count` years use a nice
    /// multiple of a year.
    pub fn tick_interval(&self, count: usize) -> TickInterval {
        let (lo, hi) = self.ordered_domain();
        let target = (hi - lo).num_days() as f64 / count as f64;
        match INTERVALS.iter().position(|&(_, days)| days > target) {
            None => TickInterval::Years(self.year_step(count)),
            Some(0) => INTERVALS[0].0,
            Some(i) => {
                let (below, below_days) = INTERVALS[i - 1];
                let (above, above_days) = INTERVALS[i];
                if target / below_days < above_days / target { below } else { above }
            }
        }
    }

    /// Tick dates for roughly `count` ticks, ascending.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (lo, hi) = self.ordered_domain();
        match self.tick_interval(count) {
            TickInterval::Years(step) => self.every_year(step),
            TickInterval::Months(step) => month_starts(lo, hi)
                .filter(|d| d.month0() % step == 0)
                .collect(),
            TickInterval::Week => lo
                .iter_days()
                .take_while(|d| *d <= hi)
                .filter(|d| d.weekday() == Weekday::Sun)
                .collect(),
            TickInterval::Days(step) => lo
                .iter_days()
                .take_while(|d| *d <= hi)
                .filter(|d| d.day0() % step == 0)
                .collect(),
        }
    }

    /// 1 January of every year inside the domain that is a multiple of
    /// `year_step(count)`. Ascending.
    pub fn year_ticks(&self, count: usize) -> Vec<NaiveDate> {
        self.every_year(self.year_step(count))
    }

    fn every_year(&self, step: i32) -> Vec<NaiveDate> {
        let (lo, hi) = self.ordered_domain();
        let step = step.max(1);
        let mut first = lo.year();
        if NaiveDate::from_ymd_opt(first, 1, 1).is_none_or(|d| d < lo) {
            first += 1;
        }
        let first = first + (step - first.rem_euclid(step)) % step;

        (first..=hi.year())
            .step_by(step as usize)
            .filter_map(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .filter(|d| *d <= hi)
            .collect()
    }

    fn ordered_domain(&self) -> (NaiveDate, NaiveDate) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }
}

/// Label for a tick date: the year on 1 January, the month name on the
/// first of any other month, otherwise the day of the month prefixed with
/// the month on Sundays and with the weekday on other days.
pub fn tick_label(date: NaiveDate) -> String {
    let pattern = if date.day() != 1 {
        if date.weekday() == Weekday::Sun { "%b %d" } else { "%a %d" }
    } else if date.month() != 1 {
        "%B"
    } else {
        "%Y"
    };
    date.format(pattern).to_string()
}

/// First day of every month in `[lo, hi]`.
fn month_starts(lo: NaiveDate, hi: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(NaiveDate::from_ymd_opt(lo.year(), lo.month(), 1), |d| {
        d.checked_add_months(Months::new(1))
    })
    .skip_while(move |d| *d < lo)
    .take_while(move |d| *d <= hi)
}

/// Year plus the elapsed fraction of it, e.g. 1752-12-31 is about 1752.997.
fn fractional_year(date: NaiveDate) -> f64 {
    let days_in_year = if NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some() {
        366.0
    } else {
        365.0
    };
    f64::from(date.year()) + f64::from(date.ordinal0()) / days_in_year
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn test_js_date_day_zero_is_last_day_of_previous_month() {
        assert_eq!(js_date(1900, 0, 0), Some(ymd(1899, 12, 31)));
        assert_eq!(js_date(1900, 2, 0), Some(ymd(1900, 2, 28)));
        assert_eq!(js_date(2000, 2, 0), Some(ymd(2000, 2, 29)));
    }

    #[test]
    fn test_js_date_month_twelve_rolls_over() {
        assert_eq!(js_date(2015, 12, 0), Some(ymd(2015, 12, 31)));
        assert_eq!(js_date(2015, 12, 1), Some(ymd(2016, 1, 1)));
    }

    #[test]
    fn test_scale_is_proportional_to_days() {
        let s = TimeScale::new((ymd(2000, 1, 1), ymd(2000, 1, 11)), (0.0, 100.0));
        assert_eq!(s.scale(ymd(2000, 1, 1)), 0.0);
        assert_eq!(s.scale(ymd(2000, 1, 6)), 50.0);
        assert_eq!(s.scale(ymd(2000, 1, 11)), 100.0);
    }

    #[test]
    fn test_full_dataset_domain_ticks_every_decade() {
        let s = TimeScale::new(
            (js_date(1753, 0, 0).unwrap(), js_date(2015, 12, 0).unwrap()),
            (100.0, 1400.0),
        );
        assert_eq!(s.year_step(20), 10);
        let ticks = s.year_ticks(20);
        assert_eq!(ticks.first(), Some(&ymd(1760, 1, 1)));
        assert_eq!(ticks.last(), Some(&ymd(2010, 1, 1)));
        assert_eq!(ticks.len(), 26);
    }

    #[test]
    fn test_short_domain_ticks_every_year() {
        let s = TimeScale::new((ymd(1899, 12, 31), ymd(1905, 12, 31)), (0.0, 600.0));
        let years: Vec<i32> = s.year_ticks(20).iter().map(|d| d.year()).collect();
        assert_eq!(years, vec![1900, 1901, 1902, 1903, 1904, 1905]);
    }

    #[test]
    fn test_long_domain_picks_year_interval() {
        let s = TimeScale::new(
            (js_date(1753, 0, 0).unwrap(), js_date(2015, 12, 0).unwrap()),
            (100.0, 1400.0),
        );
        assert_eq!(s.tick_interval(20), TickInterval::Years(10));
        assert_eq!(s.ticks(20), s.year_ticks(20));
    }

    #[test]
    fn test_three_year_domain_ticks_quarterly() {
        let s = TimeScale::new((ymd(1898, 12, 31), ymd(1901, 12, 31)), (0.0, 1300.0));
        assert_eq!(s.tick_interval(20), TickInterval::Months(3));
        let labels: Vec<String> = s.ticks(20).into_iter().map(tick_label).collect();
        assert_eq!(labels.len(), 12);
        assert_eq!(&labels[..5], &["1899", "April", "July", "October", "1900"]);
        assert_eq!(labels.last().map(String::as_str), Some("October"));
    }

    #[test]
    fn test_single_year_domain_ticks_monthly() {
        let s = TimeScale::new((ymd(1899, 12, 31), ymd(1900, 12, 31)), (0.0, 1300.0));
        assert_eq!(s.tick_interval(20), TickInterval::Months(1));
        let ticks = s.ticks(20);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], ymd(1900, 1, 1));
        assert_eq!(ticks[11], ymd(1900, 12, 1));
    }

    #[test]
    fn test_quarter_span_ticks_on_sundays() {
        let s = TimeScale::new((ymd(2000, 1, 1), ymd(2000, 3, 31)), (0.0, 500.0));
        assert_eq!(s.tick_interval(10), TickInterval::Week);
        let ticks = s.ticks(10);
        assert_eq!(ticks[0], ymd(2000, 1, 2));
        assert!(ticks.iter().all(|d| d.weekday() == Weekday::Sun));
    }

    #[test]
    fn test_tick_labels_by_boundary() {
        assert_eq!(tick_label(ymd(1900, 1, 1)), "1900");
        assert_eq!(tick_label(ymd(1900, 4, 1)), "April");
        assert_eq!(tick_label(ymd(1900, 1, 7)), "Jan 07");
        assert_eq!(tick_label(ymd(1900, 1, 2)), "Tue 02");
    }
}
