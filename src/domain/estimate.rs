/// 只有下限時的加成係數
pub const LOWER_ONLY_FACTOR: f64 = 1.2;
/// 只有上限時的折減係數
pub const UPPER_ONLY_FACTOR: f64 = 0.9;

/// 由薪資上下限推估單一代表薪資。
///
/// 0 與缺值視為相同：`Some(0.0)` 的邊界等同 `None`。
/// 兩邊都缺時回傳 `None`。
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|value| *value != 0.0);
    let to = to.filter(|value| *value != 0.0);

    match (from, to) {
        (None, None) => None,
        (Some(from), None) => Some(from * LOWER_ONLY_FACTOR),
        (None, Some(to)) => Some(to * UPPER_ONLY_FACTOR),
        (Some(from), Some(to)) => Some((from + to) / 2.0),
    }
}
