/// [a, b] 上 `steps` 等分的 `steps + 1` 個點，兩端點精確。
pub fn grid(a: f64, b: f64, steps: usize) -> Vec<f64> {
    if steps == 0 {
        return vec![a];
    }
    let width = b - a;
    (0..=steps)
        .map(|i| if i == steps { b } else { a + width * i as f64 / steps as f64 })
        .collect()
}
