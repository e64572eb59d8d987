/// Yields every threshold (in seconds) crossed between two refreshes.
///
/// `last` and `current` are distances in milliseconds. A threshold `t` is
/// skipped only when both distances lie strictly on the same side of
/// `t * 1000`; touching it from either side counts as a crossing. Thresholds
/// are reported in the order given.
///
/// # Example
///
/// ```
/// use fuzzytime::crossed_thresholds;
///
/// let crossed: Vec<f64> = crossed_thresholds(50_000, 70_000, &[0.0, 60.0, 120.0]).collect();
/// assert_eq!(crossed, [60.0]);
/// ```
pub fn crossed_thresholds(
    last: i64,
    current: i64,
    thresholds: &[f64],
) -> impl Iterator<Item = f64> + '_ {
    let (last, current) = (last as f64, current as f64);
    thresholds.iter().copied().filter(move |&t| {
        let at = t * 1000.0;
        let both_above = last > at && current > at;
        let both_below = last < at && current < at;
        !(both_above || both_below)
    })
}
