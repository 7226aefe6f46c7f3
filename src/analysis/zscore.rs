/// Reference mean and standard deviation for one metric.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub mean: f64,
    pub std_dev: f64,
}

/// Number of standard deviations `value` lies from the benchmark mean.
///
/// A benchmark with zero spread carries no signal, so the score is defined
/// as 0 rather than dividing by zero.
pub fn z_score(value: f64, benchmark: Benchmark) -> f64 {
    if benchmark.std_dev == 0.0 {
        return 0.0;
    }
    (value - benchmark.mean) / benchmark.std_dev
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let benchmark = Benchmark { mean: 10.0, std_dev: 2.0 };
        assert_eq!(z_score(12.0, benchmark), 1.0);
        assert_eq!(z_score(8.0, benchmark), -1.0);
    }

    #[test]
    fn mean_scores_zero() {
        let benchmark = Benchmark { mean: 550.0, std_dev: 150.0 };
        assert_eq!(z_score(benchmark.mean, benchmark), 0.0);
        assert_eq!(z_score(benchmark.mean + benchmark.std_dev, benchmark), 1.0);
    }

    #[test]
    fn zero_std_dev_scores_zero() {
        let benchmark = Benchmark { mean: 10.0, std_dev: 0.0 };
        assert_eq!(z_score(12.0, benchmark), 0.0);
        assert_eq!(z_score(-1000.0, benchmark), 0.0);
    }
}
