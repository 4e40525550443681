/// Returns `n` evenly spaced samples over `[start, end]`, including both endpoints.
///
/// One sample is just `start`; zero samples is an empty array.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + (end - start) * i as f64 / last })
                .collect()
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn endpoints() {
        let xs = linspace(-10.0, 10.0, 401);
        assert_eq!(xs.len(), 401);
        assert_eq!(xs[0], -10.0);
        assert_eq!(xs[200], 0.0);
        assert_eq!(xs[400], 10.0);
        assert_float_absolute_eq!(xs[1] - xs[0], 0.05, 1e-12);
    }

    #[test]
    fn degenerate() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }
}
