//! Property-based tests for payroll calculation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::employee::{EmploymentType, PayFrequency};

use super::service::PayrollService;
use super::types::PayrollInput;

fn gross_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..1_500_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn frequency_strategy() -> impl Strategy<Value = PayFrequency> {
    prop_oneof![
        Just(PayFrequency::Weekly),
        Just(PayFrequency::Fortnightly),
        Just(PayFrequency::Monthly),
    ]
}

fn super_rate_strategy() -> impl Strategy<Value = Decimal> {
    // 0.0% to 20.0%
    (0i64..200i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Contractor invariant: tax = super = 0 and net = gross for any
    /// gross and frequency.
    #[test]
    fn prop_contractor_invariant(
        gross in gross_strategy(),
        frequency in frequency_strategy(),
        super_rate in super_rate_strategy(),
    ) {
        let result = PayrollService::calculate(&PayrollInput {
            gross_pay: gross,
            pay_frequency: frequency,
            employment_type: EmploymentType::Contractor,
            has_tax_free_threshold: true,
            super_rate_percent: super_rate,
        });
        prop_assert_eq!(result.tax, Decimal::ZERO);
        prop_assert_eq!(result.super_contribution, Decimal::ZERO);
        prop_assert_eq!(result.net, gross);
        prop_assert_eq!(result.total_cost, gross);
    }

    /// Employee identities: net + tax = gross and total cost = gross +
    /// super, with everything non-negative for non-negative gross.
    #[test]
    fn prop_employee_identities(
        gross in gross_strategy(),
        frequency in frequency_strategy(),
        has_threshold in any::<bool>(),
        super_rate in super_rate_strategy(),
    ) {
        let result = PayrollService::calculate(&PayrollInput {
            gross_pay: gross,
            pay_frequency: frequency,
            employment_type: EmploymentType::FullTime,
            has_tax_free_threshold: has_threshold,
            super_rate_percent: super_rate,
        });
        prop_assert_eq!(result.net + result.tax, result.gross);
        prop_assert_eq!(
            result.total_cost,
            result.gross + result.super_contribution
        );
        prop_assert!(result.tax >= Decimal::ZERO);
        prop_assert!(result.super_contribution >= Decimal::ZERO);
        prop_assert!(result.net >= Decimal::ZERO);
    }
}
