pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;
}

/// 由 f 與 f' 兩個閉包組成的曲線，供 Newton 法等只需要函數值與導數的演算法使用
pub struct FnCurve<F, D> {
    function: F,
    derivative: D,
}

impl<F, D> FnCurve<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    pub fn new(function: F, derivative: D) -> FnCurve<F, D> {
        FnCurve { function, derivative }
    }
}

impl<F, D> Curve for FnCurve<F, D>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}
