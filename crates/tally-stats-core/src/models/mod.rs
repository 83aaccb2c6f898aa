//! Regression models

mod ols;

pub use ols::LinearRegression;
