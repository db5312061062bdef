use std::fmt;

use crate::math::numericserror::NumericsResult;
use crate::math::quadrature::gausslegendre::{
    GaussNodes,
    gauss_legendre
};
use crate::math::quadrature::newtoncotes::{
    midpoint,
    simpson,
    three_eighths,
    trapezoid
};

/// 一次積分的結果。
///
/// `requested_intervals` 是呼叫端給的 n，`intervals` 是規則實際使用的 n
/// （Simpson / 3/8 可能向上調整；Gauss 規則則為節點數）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureEstimate {
    value: f64,
    rule_order: u32,
    requested_intervals: usize,
    intervals: usize
}

impl QuadratureEstimate {
    pub fn new(value: f64, rule_order: u32, requested_intervals: usize, intervals: usize) -> QuadratureEstimate {
        QuadratureEstimate {
            value,
            rule_order,
            requested_intervals,
            intervals
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn rule_order(&self) -> u32 {
        self.rule_order
    }

    pub fn requested_intervals(&self) -> usize {
        self.requested_intervals
    }

    pub fn intervals(&self) -> usize {
        self.intervals
    }

    pub fn was_adjusted(&self) -> bool {
        self.requested_intervals != self.intervals
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    Midpoint,
    Trapezoid,
    Simpson,
    ThreeEighths,
    GaussLegendre(GaussNodes)
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 7] = [
        QuadratureRule::Midpoint,
        QuadratureRule::Trapezoid,
        QuadratureRule::Simpson,
        QuadratureRule::ThreeEighths,
        QuadratureRule::GaussLegendre(GaussNodes::Two),
        QuadratureRule::GaussLegendre(GaussNodes::Three),
        QuadratureRule::GaussLegendre(GaussNodes::Four),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "Midpoint",
            QuadratureRule::Trapezoid => "Trapezoid",
            QuadratureRule::Simpson => "Simpson",
            QuadratureRule::ThreeEighths => "Simpson 3/8",
            QuadratureRule::GaussLegendre(GaussNodes::Two) => "Gauss-Legendre 2",
            QuadratureRule::GaussLegendre(GaussNodes::Three) => "Gauss-Legendre 3",
            QuadratureRule::GaussLegendre(GaussNodes::Four) => "Gauss-Legendre 4"
        }
    }

    /// 誤差階數 p：複合規則的誤差約為 O(h^p)
    pub fn order(&self) -> u32 {
        match self {
            QuadratureRule::Midpoint | QuadratureRule::Trapezoid => 2,
            QuadratureRule::Simpson | QuadratureRule::ThreeEighths => 4,
            QuadratureRule::GaussLegendre(nodes) => 2 * nodes.count() as u32
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, QuadratureRule::GaussLegendre(_))
    }

    /// Gauss 規則為單一區間、固定節點，忽略 `n`。
    pub fn integrate<F>(&self, f: F, a: f64, b: f64, n: usize) -> NumericsResult<QuadratureEstimate>
    where
        F: Fn(f64) -> f64,
    {
        match self {
            QuadratureRule::Midpoint => midpoint(f, a, b, n),
            QuadratureRule::Trapezoid => trapezoid(f, a, b, n),
            QuadratureRule::Simpson => simpson(f, a, b, n),
            QuadratureRule::ThreeEighths => three_eighths(f, a, b, n),
            QuadratureRule::GaussLegendre(nodes) => gauss_legendre(f, a, b, *nodes)
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
