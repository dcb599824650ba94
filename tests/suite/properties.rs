//! Algebraic properties of the controller, checked with proptest.

use nncalc_engine::{
    Calculator, Controller, Digit, Display, Enablement, INT_LIMIT, Natural, Operation,
};
use proptest::prelude::*;

use crate::common::{calculator, nat, registers};

/// Decimal strings of up to 60 digits, leading zeros included.
const BIG: &str = "[0-9]{1,60}";
const BIG_NON_ZERO: &str = "[1-9][0-9]{0,40}";

fn apply(top: &str, bottom: &str, op: Operation) -> Calculator<Display> {
    let mut calc = calculator(top, bottom);
    calc.process(op)
        .unwrap_or_else(|err| panic!("{op} failed: {err}"));
    calc
}

fn pow(base: &Natural, exponent: u32) -> Natural {
    let mut value = base.clone();
    value.power(exponent);
    value
}

proptest! {
    #[test]
    fn swap_is_an_involution(a in BIG, b in BIG) {
        let mut calc = calculator(&a, &b);
        let before = registers(&calc);
        calc.process_swap().unwrap();
        prop_assert_eq!(calc.registers().top(), &nat(&b));
        prop_assert_eq!(calc.registers().bottom(), &nat(&a));
        calc.process_swap().unwrap();
        prop_assert_eq!(registers(&calc), before);
    }

    #[test]
    fn enter_duplicates_bottom(a in BIG, b in BIG) {
        let calc = apply(&a, &b, Operation::Enter);
        prop_assert_eq!(calc.registers().top(), &nat(&b));
        prop_assert_eq!(calc.registers().bottom(), &nat(&b));
    }

    #[test]
    fn add_and_multiply_match_wide_arithmetic(a in any::<u64>(), b in any::<u64>()) {
        let (a_str, b_str) = (a.to_string(), b.to_string());

        let sum = apply(&a_str, &b_str, Operation::Add);
        prop_assert!(sum.registers().top().is_zero());
        prop_assert_eq!(sum.registers().bottom().to_string(), (u128::from(a) + u128::from(b)).to_string());

        let product = apply(&a_str, &b_str, Operation::Multiply);
        prop_assert!(product.registers().top().is_zero());
        prop_assert_eq!(product.registers().bottom().to_string(), (u128::from(a) * u128::from(b)).to_string());
    }

    #[test]
    fn subtract_then_add_restores_minuend(a in BIG, b in BIG) {
        let (a, b) = (nat(&a), nat(&b));
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };

        let calc = apply(&hi.to_string(), &lo.to_string(), Operation::Subtract);
        prop_assert!(calc.registers().top().is_zero());
        let mut restored = calc.registers().bottom().clone();
        restored.add(&lo);
        prop_assert_eq!(restored, hi);
    }

    #[test]
    fn divide_satisfies_euclidean_identity(a in BIG, b in BIG_NON_ZERO) {
        let calc = apply(&a, &b, Operation::Divide);
        let remainder = calc.registers().top().clone();
        let quotient = calc.registers().bottom().clone();
        let divisor = nat(&b);

        prop_assert!(remainder < divisor);
        let mut recombined = quotient;
        recombined.multiply(&divisor);
        recombined.add(&remainder);
        prop_assert_eq!(recombined, nat(&a));
    }

    #[test]
    fn power_matches_wide_arithmetic(a in 0u64..1000, b in 0u32..8) {
        let calc = apply(&a.to_string(), &b.to_string(), Operation::Power);
        prop_assert!(calc.registers().top().is_zero());
        prop_assert_eq!(calc.registers().bottom().to_string(), u128::from(a).pow(b).to_string());
    }

    #[test]
    fn root_is_the_floor_root(a in BIG, b in 2u32..12) {
        let calc = apply(&a, &b.to_string(), Operation::Root);
        prop_assert!(calc.registers().top().is_zero());

        let n = calc.registers().bottom().clone();
        let a = nat(&a);
        prop_assert!(pow(&n, b) <= a);
        let mut next = n;
        next.add(&Natural::from(1u32));
        prop_assert!(pow(&next, b) > a);
    }

    #[test]
    fn append_digit_is_ten_v_plus_d(v in BIG, d in 0u8..=9) {
        let calc = apply("0", &v, Operation::AppendDigit(Digit::new(d).unwrap()));
        let mut expected = nat(&v);
        expected.multiply(&Natural::from(10u32));
        expected.add(&Natural::from(u32::from(d)));
        prop_assert_eq!(calc.registers().bottom(), &expected);
        prop_assert!(calc.registers().top().is_zero());
    }

    #[test]
    fn enablement_is_exact(top in any::<u64>(), bottom in any::<u64>()) {
        let flags = calculator(&top.to_string(), &bottom.to_string()).enablement();
        let limit = u64::from(INT_LIMIT);
        prop_assert_eq!(flags.subtract, bottom <= top);
        prop_assert_eq!(flags.divide, bottom != 0);
        prop_assert_eq!(flags.power, bottom <= limit);
        prop_assert_eq!(flags.root, (2..=limit).contains(&bottom));
    }

    #[test]
    fn view_mirrors_registers_after_every_operation(a in BIG, b in BIG_NON_ZERO) {
        for op in [Operation::Swap, Operation::Enter, Operation::Add, Operation::Multiply, Operation::Divide] {
            let calc = apply(&a, &b, op);
            let display = calc.view();
            prop_assert_eq!(display.top(), calc.registers().top().to_string());
            prop_assert_eq!(display.bottom(), calc.registers().bottom().to_string());
            prop_assert_eq!(display.enablement(), calc.enablement());
        }
    }
}

#[test]
fn enablement_boundaries_at_int_limit() {
    let limit = Natural::from(INT_LIMIT);
    let mut over = limit.clone();
    over.add(&Natural::from(1u32));

    let at = Enablement::compute(&Natural::zero(), &limit);
    assert!(at.power);
    assert!(at.root);

    let past = Enablement::compute(&Natural::zero(), &over);
    assert!(!past.power);
    assert!(!past.root);
    assert!(past.divide);

    let one = Enablement::compute(&Natural::zero(), &Natural::from(1u32));
    assert!(one.power);
    assert!(!one.root);
}

#[test]
fn huge_values_stay_exact() {
    // 2^200 has 61 digits; squaring a 61-digit value must not lose precision
    let calc = apply("2", "200", Operation::Power);
    let two_pow_200 = calc.registers().bottom().clone();
    assert_eq!(two_pow_200.digit_count(), 61);

    let mut squared = two_pow_200.clone();
    squared.multiply(&two_pow_200);
    assert_eq!(squared, pow(&nat("2"), 400));

    let calc = apply(&squared.to_string(), "2", Operation::Root);
    assert_eq!(calc.registers().bottom(), &two_pow_200);
}
