// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contfrac_core::parsing::text_query;
use contfrac_core::Context;

thread_local! {
    static CONTEXT: Context = Context::new();
}

fn test_with(ctx: &Context, input: &str, output: &str) {
    let mut iter = text_query::TokenIterator::new(input.trim()).peekable();
    let query = text_query::parse_query(&mut iter);
    let res = match ctx.eval_query(&query) {
        Ok(v) => v.to_string(),
        Err(v) => v.to_string(),
    };
    similar_asserts::assert_eq!(res, output);
}

fn test(input: &str, output: &str) {
    CONTEXT.with(|ctx| test_with(ctx, input, output));
}

#[test]
fn test_expand_rational() {
    test("7/3", "7/3 = [2; 3]");
    test("415/93", "415/93 = [4; 2, 6, 7]");
    test("-7/3", "-7/3 = [-3; 1, 2]");
    test("12", "12 = [12]");
    test("1.5", "3/2 = [1; 2]");
    test("0.1 + 0.2", "3/10 = [0; 3, 3]");
}

#[test]
fn test_expand_irrational() {
    let ctx = Context {
        max_steps: 5,
        ..Context::new()
    };
    test_with(&ctx, "sqrt(2)", "sqrt(2) = [1; 2, 2, 2, 2, 2, ...]");
    test_with(&ctx, "√3", "sqrt(3) = [1; 1, 2, 1, 2, 1, ...]");
    test_with(
        &ctx,
        "(1 + sqrt(5)) / 2",
        "1/2 + 1/2*sqrt(5) = [1; 1, 1, 1, 1, 1, ...]",
    );
}

#[test]
fn test_square_factors() {
    test("sqrt(8) - 2*sqrt(2)", "0 = [0]");
    test("terminates sqrt(8)/sqrt(2)", "2 terminates after 1 step (bound 1)");
    let ctx = Context {
        max_steps: 5,
        ..Context::new()
    };
    test_with(&ctx, "sqrt(8)", "2*sqrt(2) = [2; 1, 4, 1, 4, 1, ...]");
    test_with(
        &ctx,
        "sqrt(8) + sqrt(2)",
        "3*sqrt(2) = [4; 4, 8, 4, 8, 4, ...]",
    );
    test("period sqrt(18)", "3*sqrt(2) = [4; (4, 8)]");
}

#[test]
fn test_convergents() {
    test("convergents 7/3", "7/3: 2, 7/3");
    test("convergents 355/113", "355/113: 3, 22/7, 355/113");
    test(
        "convergents sqrt(2)",
        "sqrt(2): 1, 3/2, 7/5, 17/12, 41/29, 99/70, 239/169, 577/408, 1393/985, 3363/2378, ...",
    );
    test(
        "convergents (1 + sqrt(5)) / 2",
        "1/2 + 1/2*sqrt(5): 1, 2, 3/2, 5/3, 8/5, 13/8, 21/13, 34/21, 55/34, 89/55, ...",
    );
}

#[test]
fn test_terminates() {
    test("terminates 7/3", "7/3 terminates after 2 steps (bound 2)");
    test("terminates 89/55", "89/55 terminates after 9 steps (bound 35)");
    test("terminates -12", "-12 terminates after 1 step (bound 1)");
    test("terminates sqrt(4)", "2 terminates after 1 step (bound 1)");
    test("terminates sqrt(2)", "Value sqrt(2) is not rational");
}

#[test]
fn test_period() {
    test("period sqrt(2)", "sqrt(2) = [1; (2)]");
    test("period sqrt(3)", "sqrt(3) = [1; (1, 2)]");
    test("period sqrt(7)", "sqrt(7) = [2; (1, 1, 1, 4)]");
    test("period (1 + sqrt(5)) / 2", "1/2 + 1/2*sqrt(5) = [1; (1)]");
    test("period 415/93", "415/93 = [4; 2, 6, 7]");
    test("period 3", "3 = [3]");
}

#[test]
fn test_bridge() {
    test("bridge 1/2", "1/2: rational 1/2; both expansions end at step 2");
    test(
        "bridge (sqrt(2) + 1) * (sqrt(2) - 1) / 3",
        "1/3: rational 1/3; both expansions end at step 2",
    );
    test(
        "bridge sqrt(2)",
        "sqrt(2): not rational; no termination within 50 steps",
    );
}

#[test]
fn test_approx() {
    test("approx 100 355/113", "355/113 ~ 22/7 (max denominator 100)");
    test(
        "approx 1000 sqrt(2)",
        "sqrt(2) ~ 1393/985 (max denominator 1000)",
    );
    test("approx 1 7/3", "7/3 ~ 2 (max denominator 1)");
}

#[test]
fn test_errors() {
    test("1/0", "Division by zero");
    test("sqrt(-4)", "Square root of negative number -4");
    test(
        "sqrt(2) + sqrt(3)",
        "Cannot combine sqrt(2) and sqrt(3) in one quadratic field",
    );
    test("sqrt(sqrt(2))", "Value sqrt(2) is not rational");
    test("1 +", "Expected term, got eof");
    test("2 3", "Expected end of input, got number");
    test("x", "Expected term, got `x`");
}

#[test]
fn test_budget() {
    let ctx = Context {
        max_steps: 2,
        ..Context::new()
    };
    test_with(
        &ctx,
        "period sqrt(7)",
        "Expansion did not terminate within 2 steps",
    );
}
