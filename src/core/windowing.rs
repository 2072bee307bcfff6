use ordered_float::OrderedFloat;

/// Smallest budget the min/max decimation works with: first sample, last
/// sample and one min/max pair.
pub const MIN_DECIMATION_POINTS: usize = 4;

/// Reduces a series to at most `max_points` samples.
///
/// The first and last samples are always kept. Interior samples are split
/// into equal buckets and each bucket contributes its minimum and maximum in
/// index order, so spikes survive the reduction. Series already within budget
/// are returned unchanged.
#[must_use]
pub fn decimate_min_max(x: &[f64], y: &[f64], max_points: usize) -> (Vec<f64>, Vec<f64>) {
    let len = x.len().min(y.len());
    let max_points = max_points.max(MIN_DECIMATION_POINTS);
    if len <= max_points {
        return (x[..len].to_vec(), y[..len].to_vec());
    }

    let bucket_count = (max_points - 2) / 2;
    let interior = len - 2;
    let bucket_len = interior.div_ceil(bucket_count);

    let mut out_x = Vec::with_capacity(max_points);
    let mut out_y = Vec::with_capacity(max_points);
    out_x.push(x[0]);
    out_y.push(y[0]);

    let mut start = 1;
    while start < len - 1 {
        let end = (start + bucket_len).min(len - 1);
        let bucket = start..end;
        let min_index = bucket
            .clone()
            .min_by_key(|&i| OrderedFloat(y[i]))
            .unwrap_or(start);
        let max_index = bucket
            .max_by_key(|&i| OrderedFloat(y[i]))
            .unwrap_or(start);
        let (first, second) = if min_index <= max_index {
            (min_index, max_index)
        } else {
            (max_index, min_index)
        };
        out_x.push(x[first]);
        out_y.push(y[first]);
        if second != first {
            out_x.push(x[second]);
            out_y.push(y[second]);
        }
        start = end;
    }

    out_x.push(x[len - 1]);
    out_y.push(y[len - 1]);
    (out_x, out_y)
}
