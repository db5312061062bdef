use std::fmt;

/// 根搜尋的結束狀態。除 `Converged` 外皆不是錯誤，而是可預期的結果，
/// 由呼叫端決定是否換初始值重試。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    Converged,
    /// 用完迭代上限仍未達到容許誤差
    IterationLimit,
    /// Newton 法遇到 |f'(x)| 低於門檻
    SingularDerivative,
    /// 迭代值離開函數定義域或溢位（出現 NaN / ∞）
    OutOfDomain
}

impl fmt::Display for RootStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootStatus::Converged => write!(f, "converged"),
            RootStatus::IterationLimit => write!(f, "did not converge within the iteration limit"),
            RootStatus::SingularDerivative => write!(f, "derivative is numerically zero"),
            RootStatus::OutOfDomain => write!(f, "iterate left the domain of the update formula")
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    x: f64,
    iterations: usize,
    status: RootStatus
}

impl Root {
    pub fn new(x: f64, iterations: usize, status: RootStatus) -> Root {
        Root { x, iterations, status }
    }

    /// 最後的迭代值；未收斂時為最佳（最後一個有限）的迭代值
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn status(&self) -> RootStatus {
        self.status
    }

    pub fn converged(&self) -> bool {
        self.status == RootStatus::Converged
    }
}
