//! Exact rational numbers
//!
//! Every `Number` in Chroma is a [`Rational`] over arbitrary-precision
//! integers. Values are kept in lowest terms with a positive denominator,
//! except while a compound expression runs with [`Reduce::Later`] and
//! reduces once at the end.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
}

/// Arithmetic result
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// When an arithmetic operation reduces its result by the GCD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduce {
    /// Reduce immediately
    #[default]
    Now,
    /// Keep the raw numerator/denominator; call [`Rational::reduced`] later
    Later,
}

/// An exact fraction `numerator / denominator` with `denominator > 0`
#[derive(Debug, Clone)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Create a reduced fraction
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> ArithmeticResult<Self> {
        Self::with_reduce(numerator, denominator, Reduce::Now)
    }

    /// Create a fraction, normalizing the sign and optionally reducing
    pub fn with_reduce(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
        reduce: Reduce,
    ) -> ArithmeticResult<Self> {
        let mut numerator = numerator.into();
        let mut denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Ok(Self::raw(numerator, denominator, reduce))
    }

    /// Whole number `n/1`
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::integer(0)
    }

    /// Denominator is known to be positive here.
    fn raw(
        numerator: BigInt,
        denominator: BigInt,
        reduce: Reduce,
    ) -> Self {
        let value = Self {
            numerator,
            denominator,
        };
        match reduce {
            Reduce::Now => value.reduced(),
            Reduce::Later => value,
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Divide numerator and denominator by their GCD
    pub fn reduced(self) -> Self {
        let divisor = self.numerator.gcd(&self.denominator);
        if divisor.is_one() || divisor.is_zero() {
            return self;
        }
        Self {
            numerator: self.numerator / &divisor,
            denominator: self.denominator / &divisor,
        }
    }

    pub fn add(
        &self,
        other: &Self,
        reduce: Reduce,
    ) -> Self {
        let numerator = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::raw(numerator, denominator, reduce)
    }

    pub fn subtract(
        &self,
        other: &Self,
        reduce: Reduce,
    ) -> Self {
        let numerator = &self.numerator * &other.denominator - &other.numerator * &self.denominator;
        let denominator = &self.denominator * &other.denominator;
        Self::raw(numerator, denominator, reduce)
    }

    pub fn multiply(
        &self,
        other: &Self,
        reduce: Reduce,
    ) -> Self {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;
        Self::raw(numerator, denominator, reduce)
    }

    /// Fails with [`ArithmeticError::DivisionByZero`] when `other` is zero
    pub fn divide(
        &self,
        other: &Self,
        reduce: Reduce,
    ) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Self::with_reduce(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
            reduce,
        )
    }

    /// Sum a sequence, reducing once at the end
    pub fn sum<'a>(values: impl IntoIterator<Item = &'a Rational>) -> Self {
        values
            .into_iter()
            .fold(Self::zero(), |acc, value| acc.add(value, Reduce::Later))
            .reduced()
    }

    /// `a/b <=> c/d` as `a*d <=> c*b`; both denominators are positive
    fn cross_cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialEq for Rational {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.cross_cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(
        &self,
        other: &Self,
    ) -> Ordering {
        self.cross_cmp(other)
    }
}

impl fmt::Display for Rational {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Split `-12.345` into mantissa `-12345` and scale `3`
fn parse_decimal(text: &str) -> Option<(BigInt, u32)> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (digits, ""),
    };
    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.contains('.') && (fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let mut mantissa: BigInt = format!("{whole}{fraction}").parse().ok()?;
    if negative {
        mantissa = -mantissa;
    }
    Some((mantissa, u32::try_from(fraction.len()).ok()?))
}

impl FromStr for Rational {
    type Err = ArithmeticError;

    /// Accepts `n`, `n.m`, and `a/b` where both sides may be decimals
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ArithmeticError::InvalidNumber(text.to_string());

        match text.split_once('/') {
            Some((numerator, denominator)) => {
                let (n, n_scale) = parse_decimal(numerator.trim()).ok_or_else(invalid)?;
                let (d, d_scale) = parse_decimal(denominator.trim()).ok_or_else(invalid)?;
                // Scale both sides to whole numbers before the single reduction
                let scale = n_scale.max(d_scale);
                let n = n * BigInt::from(10u32).pow(scale - n_scale);
                let d = d * BigInt::from(10u32).pow(scale - d_scale);
                Self::new(n, d)
            }
            None => {
                let (mantissa, scale) = parse_decimal(text).ok_or_else(invalid)?;
                Self::new(mantissa, BigInt::from(10u32).pow(scale))
            }
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<usize> for Rational {
    fn from(value: usize) -> Self {
        Self::integer(value)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(
        self,
        rhs: Self,
    ) -> Rational {
        Rational::add(self, rhs, Reduce::Now)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(
        self,
        rhs: Self,
    ) -> Rational {
        self.subtract(rhs, Reduce::Now)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(
        self,
        rhs: Self,
    ) -> Rational {
        self.multiply(rhs, Reduce::Now)
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
