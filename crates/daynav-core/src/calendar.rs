use std::fmt;

use anyhow::{
  Context,
  anyhow
};
use chrono::{
  Datelike,
  Local,
  Months,
  NaiveDate
};

use crate::activation::NavAction;

/// Displayed month of a host calendar.
/// Always normalized to the first day.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
  pub fn containing(
    date: NaiveDate
  ) -> Self {
    Self(date.with_day(1).unwrap_or(date))
  }

  pub fn current() -> Self {
    Self::containing(
      Local::now().date_naive()
    )
  }

  /// Parses `YYYY-MM`.
  pub fn parse(
    raw: &str
  ) -> anyhow::Result<Self> {
    let raw = raw.trim();
    let (year, month) = raw
      .split_once('-')
      .ok_or_else(|| {
        anyhow!(
          "expected YYYY-MM, got: {raw}"
        )
      })?;
    let year: i32 =
      year.parse().with_context(|| {
        format!("invalid year in {raw}")
      })?;
    let month: u32 =
      month.parse().with_context(|| {
        format!("invalid month in {raw}")
      })?;
    NaiveDate::from_ymd_opt(year, month, 1)
      .map(Self)
      .ok_or_else(|| {
        anyhow!(
          "month out of range: {raw}"
        )
      })
  }

  #[must_use]
  pub fn step(
    self,
    action: NavAction
  ) -> Self {
    let shifted = match action {
      | NavAction::Previous => self
        .0
        .checked_sub_months(Months::new(1)),
      | NavAction::Next => self
        .0
        .checked_add_months(Months::new(1))
    };
    match shifted {
      | Some(date) => Self(date),
      | None => {
        tracing::warn!(
          month = %self,
          %action,
          "month cursor at calendar \
           bounds; not moving"
        );
        self
      }
    }
  }

  pub fn title(self) -> String {
    self.0.format("%B %Y").to_string()
  }
}

impl fmt::Display for MonthCursor {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{:04}-{:02}",
      self.0.year(),
      self.0.month()
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn steps_across_year_boundaries() {
    let cursor = MonthCursor::parse("2026-01")
      .expect("parse month");
    assert_eq!(
      cursor
        .step(NavAction::Previous)
        .to_string(),
      "2025-12"
    );
    let cursor = MonthCursor::parse("2026-12")
      .expect("parse month");
    assert_eq!(
      cursor.step(NavAction::Next).to_string(),
      "2027-01"
    );
  }

  #[test]
  fn rejects_malformed_months() {
    assert!(
      MonthCursor::parse("2026").is_err()
    );
    assert!(
      MonthCursor::parse("2026-13").is_err()
    );
    assert!(
      MonthCursor::parse("abcd-01").is_err()
    );
  }

  #[test]
  fn containing_normalizes_to_first_day() {
    let date =
      NaiveDate::from_ymd_opt(2026, 2, 17)
        .expect("valid date");
    let cursor =
      MonthCursor::containing(date);
    assert_eq!(
      cursor,
      MonthCursor::parse("2026-02")
        .expect("valid month")
    );
    assert_eq!(
      cursor.title(),
      "February 2026"
    );
  }
}
