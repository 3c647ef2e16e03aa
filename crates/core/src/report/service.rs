//! Report generation facade.
//!
//! The single entry point request handlers use. Every operation takes an
//! explicit [`Principal`], resolves its scope before touching the
//! aggregates, and runs all of its store queries inside one read snapshot
//! so the numbers in a response reflect the same point in time.

use std::collections::HashMap;

use chrono::NaiveDate;
use lustre_shared::types::CategoryId;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use super::error::ReportError;
use super::types::{CategorySummary, LedgerSummary, UNCATEGORIZED};
use crate::budget::{BudgetAlert, BudgetEvaluation, BudgetEvaluator, StatusThresholds};
use crate::ledger::{LedgerStore, MovementFilter, MovementKind, ReadSnapshot};
use crate::period::DateWindow;
use crate::scope::{Principal, Role, ScopePredicate};

/// Service for generating scoped financial reports.
#[derive(Debug, Clone, Default)]
pub struct ReportService {
    thresholds: StatusThresholds,
}

impl ReportService {
    /// Creates a service with the given status thresholds.
    #[must_use]
    pub const fn new(thresholds: StatusThresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluates every applicable budget of the principal's business.
    ///
    /// Budgets whose window does not cover `as_of` (defaulting to today)
    /// are skipped, not errors.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for customer and supplier principals; budgets
    /// are owner-only. Store failures propagate unchanged.
    #[instrument(skip(self, store))]
    pub fn budget_report<S: LedgerStore>(
        &self,
        store: &S,
        principal: &Principal,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<BudgetEvaluation>, ReportError> {
        if !principal.can_view_budgets() {
            return Err(ReportError::Forbidden(
                "budgets are visible to business owners only".to_string(),
            ));
        }
        let as_of = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());

        let snapshot = store.begin_read()?;
        let budgets = snapshot.budgets(principal.business_id)?;
        let expenses = snapshot.movements(
            &MovementFilter::for_business(principal.business_id).with_kind(MovementKind::Expense),
        )?;

        let evaluations: Vec<_> = budgets
            .iter()
            .filter_map(|budget| {
                BudgetEvaluator::evaluate(budget, as_of, &expenses, &self.thresholds)
            })
            .collect();

        debug!(
            declared = budgets.len(),
            applicable = evaluations.len(),
            "budget report evaluated"
        );
        Ok(evaluations)
    }

    /// Raises alerts for over-budget and approaching-limit budgets,
    /// over-budget first.
    ///
    /// # Errors
    ///
    /// Same access rules as [`Self::budget_report`].
    #[instrument(skip(self, store))]
    pub fn budget_alerts<S: LedgerStore>(
        &self,
        store: &S,
        principal: &Principal,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<BudgetAlert>, ReportError> {
        let evaluations = self.budget_report(store, principal, as_of)?;

        let mut alerts: Vec<_> = evaluations
            .iter()
            .filter_map(|evaluation| BudgetEvaluator::alert_for(evaluation, &self.thresholds))
            .collect();
        alerts.sort_by_key(|alert| alert.level);

        debug!(alerts = alerts.len(), "budget alerts raised");
        Ok(alerts)
    }

    /// Sums income and expense over a date range within the principal's
    /// scope, with a per-category breakdown.
    ///
    /// The scope travels with the store query, so totals shown to a
    /// customer or supplier only ever reflect their own movements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when the range ends before it starts, and
    /// `Forbidden` when a customer or supplier principal does not resolve
    /// within the business. Store failures propagate unchanged.
    #[instrument(skip(self, store))]
    pub fn ledger_summary<S: LedgerStore>(
        &self,
        store: &S,
        principal: &Principal,
        range: DateWindow,
    ) -> Result<LedgerSummary, ReportError> {
        if range.is_inverted() {
            return Err(ReportError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }

        let snapshot = store.begin_read()?;
        Self::verify_scope(&snapshot, principal)?;

        let scope = ScopePredicate::for_principal(principal);
        let movements = snapshot.movements(&scope.filter(range))?;
        debug_assert!(movements.iter().all(|movement| scope.allows(movement)));

        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        let mut buckets: HashMap<Option<CategoryId>, (Decimal, Decimal)> = HashMap::new();

        for movement in &movements {
            let bucket = buckets.entry(movement.category_id).or_default();
            match movement.kind {
                MovementKind::Income => {
                    total_income += movement.amount;
                    bucket.0 += movement.amount;
                }
                MovementKind::Expense => {
                    total_expense += movement.amount;
                    bucket.1 += movement.amount;
                }
            }
        }

        let by_category = Self::resolve_categories(&snapshot, buckets)?;

        debug!(movements = movements.len(), "ledger summary aggregated");
        Ok(LedgerSummary {
            range,
            total_income,
            total_expense,
            net: total_income - total_expense,
            by_category,
        })
    }

    /// A customer or supplier principal must resolve to a record of the
    /// business it is querying.
    fn verify_scope<R: ReadSnapshot>(
        snapshot: &R,
        principal: &Principal,
    ) -> Result<(), ReportError> {
        match principal.role {
            Role::Admin(_) => Ok(()),
            Role::Customer(customer_id) => match snapshot.customer(customer_id)? {
                Some(record) if record.business_id == principal.business_id => Ok(()),
                _ => Err(ReportError::Forbidden(
                    "customer is not known to this business".to_string(),
                )),
            },
            Role::Supplier(supplier_id) => match snapshot.supplier(supplier_id)? {
                Some(record) if record.business_id == principal.business_id => Ok(()),
                _ => Err(ReportError::Forbidden(
                    "supplier is not known to this business".to_string(),
                )),
            },
        }
    }

    /// Resolves display names for the category buckets.
    ///
    /// Dangling category references fold into the uncategorized bucket
    /// instead of failing the report.
    fn resolve_categories<R: ReadSnapshot>(
        snapshot: &R,
        buckets: HashMap<Option<CategoryId>, (Decimal, Decimal)>,
    ) -> Result<Vec<CategorySummary>, ReportError> {
        let mut uncategorized: Option<(Decimal, Decimal)> = None;
        let mut summaries = Vec::with_capacity(buckets.len());

        for (category_id, (income, expense)) in buckets {
            let name = match category_id {
                Some(id) => snapshot.category_name(id)?,
                None => None,
            };
            match name {
                Some(name) => summaries.push(CategorySummary {
                    category_id,
                    name,
                    income,
                    expense,
                }),
                None => {
                    let bucket = uncategorized.get_or_insert((Decimal::ZERO, Decimal::ZERO));
                    bucket.0 += income;
                    bucket.1 += expense;
                }
            }
        }

        if let Some((income, expense)) = uncategorized {
            summaries.push(CategorySummary {
                category_id: None,
                name: UNCATEGORIZED.to_string(),
                income,
                expense,
            });
        }

        summaries.sort_by(|a, b| {
            b.volume()
                .cmp(&a.volume())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| {
                    a.category_id
                        .map(CategoryId::into_inner)
                        .cmp(&b.category_id.map(CategoryId::into_inner))
                })
        });
        Ok(summaries)
    }
}
