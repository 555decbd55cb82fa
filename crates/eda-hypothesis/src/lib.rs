//! Two-sample hypothesis testing
//!
//! Compares the means of two independent numeric samples with either a
//! pooled-variance [`ZTest`] or a Student [`TTest`]. Both report a two-sided
//! p-value; the decision rule derives alpha from a confidence percentage and
//! a [`TailMode`]:
//!
//! ```text
//! alpha = 1 - confidence / 100        (one-tailed)
//! alpha = (1 - confidence / 100) / 2  (two-tailed)
//! reject H0  <=>  p < alpha
//! ```
//!
//! # Examples
//!
//! ```rust
//! use eda_hypothesis::{null_hypothesis, TailMode, TwoSampleTest, ZTest};
//!
//! let a = [10.0, 11.0, 12.0, 13.0, 14.0];
//! let b = [20.0, 21.0, 22.0, 23.0, 24.0];
//! let result = ZTest
//!     .run(&a, &b, 95.0, TailMode::OneTailed, null_hypothesis("score", "group"))
//!     .unwrap();
//! assert!(result.is_significant());
//! ```

mod decision;
mod traits;
mod ttest;
mod types;
mod ztest;

pub use decision::{decide, significance_level};
pub use traits::TwoSampleTest;
pub use ttest::{TTest, VarianceAssumption};
pub use types::{null_hypothesis, Decision, TailMode, TestMethod, TestResult, TestStatistic};
pub use ztest::ZTest;

/// Build the test implementing `method` (pooled variance for the T-test)
pub fn two_sample_test(method: TestMethod) -> Box<dyn TwoSampleTest> {
    match method {
        TestMethod::ZTest => Box::new(ZTest),
        TestMethod::TTest => Box::new(TTest::new()),
    }
}
