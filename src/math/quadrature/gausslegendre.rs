use crate::math::numericserror::NumericsResult;
use crate::math::quadrature::newtoncotes::check_bounds;
use crate::math::quadrature::quadraturerule::QuadratureEstimate;

// ─────────────────────────────────────────────
// Gauss–Legendre
// ─────────────────────────────────────────────
//
// [-1, 1] 上的節點為 Legendre 多項式 P_n 的根，n 點規則對 2n-1 次以下多項式精確。
// 映射到 [a, b]：x = (a+b)/2 + (b-a)/2 · ξ，結果乘上 (b-a)/2。
//
//   n = 2：ξ = ±1/√3,                         w = 1
//   n = 3：ξ = 0, ±√(3/5),                     w = 8/9, 5/9
//   n = 4：ξ = ±√(3/7 ∓ 2/7·√(6/5)),           w = (18 ± √30)/36

pub struct GaussLegendreTable {
    pub nodes: &'static [f64],
    pub weights: &'static [f64],
}

static GAUSS_LEGENDRE_TABLES: [GaussLegendreTable; 3] = [
    GaussLegendreTable {
        nodes: &[-0.577_350_269_189_625_8, 0.577_350_269_189_625_8],
        weights: &[1.0, 1.0],
    },
    GaussLegendreTable {
        nodes: &[-0.774_596_669_241_483_4, 0.0, 0.774_596_669_241_483_4],
        weights: &[5.0 / 9.0, 8.0 / 9.0, 5.0 / 9.0],
    },
    GaussLegendreTable {
        nodes: &[
            -0.861_136_311_594_052_6,
            -0.339_981_043_584_856_3,
            0.339_981_043_584_856_3,
            0.861_136_311_594_052_6,
        ],
        weights: &[
            0.347_854_845_137_453_9,
            0.652_145_154_862_546_1,
            0.652_145_154_862_546_1,
            0.347_854_845_137_453_9,
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaussNodes {
    Two,
    Three,
    Four
}

impl GaussNodes {
    pub const ALL: [GaussNodes; 3] = [GaussNodes::Two, GaussNodes::Three, GaussNodes::Four];

    pub fn count(&self) -> usize {
        match self {
            GaussNodes::Two => 2,
            GaussNodes::Three => 3,
            GaussNodes::Four => 4
        }
    }

    pub fn table(&self) -> &'static GaussLegendreTable {
        &GAUSS_LEGENDRE_TABLES[self.count() - 2]
    }
}

pub fn gauss_legendre<F>(f: F, a: f64, b: f64, nodes: GaussNodes) -> NumericsResult<QuadratureEstimate>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;

    let table = nodes.table();
    let scale = (b - a) / 2.0;
    let shift = (a + b) / 2.0;
    let sum: f64 = table
        .nodes
        .iter()
        .zip(table.weights.iter())
        .map(|(&xi, &w)| w * f(shift + scale * xi))
        .sum();

    let count = nodes.count();
    Ok(QuadratureEstimate::new(sum * scale, 2 * count as u32, count, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn monomial_integral(degree: i32, a: f64, b: f64) -> f64 {
        (b.powi(degree + 1) - a.powi(degree + 1)) / (degree + 1) as f64
    }

    #[test]
    fn tables_are_consistent() {
        for nodes in GaussNodes::ALL {
            let table = nodes.table();
            assert_eq!(table.nodes.len(), nodes.count());
            assert_eq!(table.weights.len(), nodes.count());
            assert_relative_eq!(table.weights.iter().sum::<f64>(), 2.0, max_relative = 1e-15);
        }
    }

    #[test]
    fn tabulated_nodes_match_their_closed_forms() {
        assert_relative_eq!(GaussNodes::Two.table().nodes[1], 1.0 / 3f64.sqrt(), max_relative = 1e-15);
        assert_relative_eq!(GaussNodes::Three.table().nodes[2], (3.0f64 / 5.0).sqrt(), max_relative = 1e-15);
        let inner = (3.0 / 7.0 - 2.0 / 7.0 * (6.0f64 / 5.0).sqrt()).sqrt();
        let outer = (3.0 / 7.0 + 2.0 / 7.0 * (6.0f64 / 5.0).sqrt()).sqrt();
        assert_relative_eq!(GaussNodes::Four.table().nodes[2], inner, max_relative = 1e-15);
        assert_relative_eq!(GaussNodes::Four.table().nodes[3], outer, max_relative = 1e-15);
        assert_relative_eq!(GaussNodes::Four.table().weights[1], (18.0 + 30f64.sqrt()) / 36.0, max_relative = 1e-15);
    }

    #[test]
    fn n_point_rule_is_exact_up_to_degree_2n_minus_1() {
        for nodes in GaussNodes::ALL {
            let max_degree = 2 * nodes.count() as i32 - 1;
            for degree in 0..=max_degree {
                let estimate = gauss_legendre(|x: f64| x.powi(degree), -0.5, 2.0, nodes).unwrap();
                assert_relative_eq!(
                    estimate.value(),
                    monomial_integral(degree, -0.5, 2.0),
                    epsilon = 1e-13,
                    max_relative = 1e-13
                );
            }
        }
    }

    #[test]
    fn two_point_rule_misses_degree_four() {
        let estimate = gauss_legendre(|x: f64| x.powi(4), -1.0, 1.0, GaussNodes::Two).unwrap();
        // 2 · (1/√3)^4 = 2/9，精確值為 2/5
        assert_relative_eq!(estimate.value(), 2.0 / 9.0, max_relative = 1e-14);
        assert_eq!(estimate.rule_order(), 4);
        assert_eq!(estimate.intervals(), 2);
    }
}
