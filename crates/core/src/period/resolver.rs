//! Budget period window resolution.
//!
//! Resolves a budget's declared period to the concrete calendar window
//! containing a reference date. Windows align to calendar boundaries: a
//! monthly budget started on 2024-01-15 and queried on 2024-03-10 resolves
//! to `[2024-03-01, 2024-04-01)`, not a rolling 30-day count from the
//! start date. Weekly budgets have no calendar anchor, so their 7-day
//! windows align to the weekday of the budget's start date.

use chrono::{Datelike, Days, Months, NaiveDate};

use super::window::DateWindow;
use crate::budget::{Budget, BudgetPeriod};

/// Resolves the window of the budget's period containing `as_of`.
///
/// Returns `None` when the budget is not applicable at `as_of`: before the
/// budget's start date, or after its end date when one is set. Callers
/// skip such budgets rather than treating them as zero spend.
#[must_use]
pub fn resolve_window(budget: &Budget, as_of: NaiveDate) -> Option<DateWindow> {
    if as_of < budget.start_date {
        return None;
    }
    if budget.end_date.is_some_and(|end| as_of > end) {
        return None;
    }

    match budget.period {
        BudgetPeriod::Weekly => week_window(budget.start_date, as_of),
        BudgetPeriod::Monthly => month_window(as_of),
        BudgetPeriod::Quarterly => quarter_window(as_of),
        BudgetPeriod::Yearly => year_window(as_of),
    }
}

/// 7-day window anchored to the weekday of `anchor`. `as_of >= anchor`.
fn week_window(anchor: NaiveDate, as_of: NaiveDate) -> Option<DateWindow> {
    let offset = as_of.signed_duration_since(anchor).num_days() % 7;
    let start = as_of.checked_sub_days(Days::new(u64::try_from(offset).ok()?))?;
    let end = start.checked_add_days(Days::new(7))?;
    Some(DateWindow::new(start, end))
}

fn month_window(as_of: NaiveDate) -> Option<DateWindow> {
    let start = as_of.with_day(1)?;
    let end = start.checked_add_months(Months::new(1))?;
    Some(DateWindow::new(start, end))
}

fn quarter_window(as_of: NaiveDate) -> Option<DateWindow> {
    let quarter_start_month = (as_of.month0() / 3) * 3 + 1;
    let start = NaiveDate::from_ymd_opt(as_of.year(), quarter_start_month, 1)?;
    let end = start.checked_add_months(Months::new(3))?;
    Some(DateWindow::new(start, end))
}

fn year_window(as_of: NaiveDate) -> Option<DateWindow> {
    let start = NaiveDate::from_ymd_opt(as_of.year(), 1, 1)?;
    let end = NaiveDate::from_ymd_opt(as_of.year().checked_add(1)?, 1, 1)?;
    Some(DateWindow::new(start, end))
}
