use crate::models::{CompetitorId, Round, RoundFormat, RoundResult};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundStats {
    /// Fastest valid attempt, `0` when there is none.
    pub best: f64,
    /// Round score under the format's rule, `0` when not enough attempts are valid.
    pub average: f64,
}

/// Attempts that actually happened. Zero marks an unrecorded attempt, and
/// negative or NaN values are never valid either.
pub fn valid_times(times: &[f64]) -> impl Iterator<Item = f64> + '_ {
    times.iter().copied().filter(|t| *t > 0.0)
}

pub fn compute_stats(times: &[f64], format: RoundFormat) -> RoundStats {
    let valid: Vec<f64> = valid_times(times).collect();

    let best = valid.iter().copied().reduce(f64::min).unwrap_or(0.0);

    if valid.len() < format.minimum_valid() {
        return RoundStats { best, average: 0.0 };
    }

    let average = match format {
        // Positional: the first three valid attempts as entered, no trimming.
        RoundFormat::Ao3 => valid[..3].iter().sum::<f64>() / 3.0,

        RoundFormat::Ao5 => {
            let mut sorted = valid;
            sorted.sort_by(f64::total_cmp);
            sorted[1..4].iter().sum::<f64>() / 3.0
        }
    };

    RoundStats { best, average }
}

/// Pads with unrecorded attempts or cuts off extras so the list matches the format.
fn normalize_times(mut times: Vec<f64>, format: RoundFormat) -> Vec<f64> {
    for time in &mut times {
        if !time.is_finite() || *time < 0.0 {
            *time = 0.0;
        }
    }

    times.resize(format.attempt_count(), 0.0);
    times
}

/// Inserts the competitor's result or replaces the one already recorded.
pub fn upsert_result(round: &mut Round, competitor_id: CompetitorId, times: Vec<f64>) -> &RoundResult {
    let times = normalize_times(times, round.format);
    let RoundStats { best, average } = compute_stats(&times, round.format);

    let result = RoundResult {
        competitor_id,
        times,
        best,
        average,
    };

    let index = match round
        .results
        .iter()
        .position(|r| r.competitor_id == result.competitor_id)
    {
        Some(index) => {
            round.results[index] = result;
            index
        }
        None => {
            round.results.push(result);
            round.results.len() - 1
        }
    };

    &round.results[index]
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }

    #[test]
    fn ao5_drops_fastest_and_slowest() {
        let stats = compute_stats(&[12.34, 11.00, 13.00, 10.00, 14.00], RoundFormat::Ao5);

        assert_eq!(stats.best, 10.0);
        assert_eq!(round2(stats.average), 12.11);
        assert_eq!(format!("{:.2}", stats.average), "12.11");
    }

    #[test]
    fn ao5_is_mean_of_middle_three() {
        let samples: [[f64; 5]; 4] = [
            [1.0, 2.0, 3.0, 4.0, 5.0],
            [9.9, 9.9, 9.9, 9.9, 9.9],
            [30.12, 8.01, 15.5, 15.5, 7.0],
            [0.5, 100.0, 42.0, 41.0, 43.0],
        ];

        for times in samples {
            let mut sorted = times;
            sorted.sort_by(f64::total_cmp);
            let expected = (sorted[1] + sorted[2] + sorted[3]) / 3.0;

            let stats = compute_stats(&times, RoundFormat::Ao5);
            assert!((stats.average - expected).abs() < 1e-9, "{times:?}");
        }
    }

    #[test]
    fn ao5_needs_five_valid_attempts() {
        let stats = compute_stats(&[12.0, 0.0, 13.0, 10.0, 14.0], RoundFormat::Ao5);

        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.best, 10.0);
    }

    #[test]
    fn ao3_with_unrecorded_attempt() {
        let stats = compute_stats(&[0.0, 9.50, 8.20], RoundFormat::Ao3);

        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.best, 8.20);
    }

    #[test]
    fn ao3_takes_the_first_three_valid_attempts() {
        let stats = compute_stats(&[9.0, 0.0, 12.0, 6.0, 30.0], RoundFormat::Ao3);

        assert_eq!(stats.average, 9.0);
        assert_eq!(stats.best, 6.0);
    }

    #[test]
    fn no_valid_attempts() {
        let stats = compute_stats(&[0.0, 0.0, 0.0], RoundFormat::Ao3);
        assert_eq!(stats, RoundStats::default());

        let stats = compute_stats(&[], RoundFormat::Ao5);
        assert_eq!(stats, RoundStats::default());
    }

    #[test]
    fn best_ignores_garbage() {
        let stats = compute_stats(&[-3.0, f64::NAN, 0.0, 7.5, 7.25], RoundFormat::Ao5);

        assert_eq!(stats.best, 7.25);
        assert_eq!(stats.average, 0.0);
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut round = Round::new(1, RoundFormat::Ao5);
        let times = vec![12.34, 11.0, 13.0, 10.0, 14.0];

        let first = upsert_result(&mut round, CompetitorId::from("1"), times.clone()).clone();
        let second = upsert_result(&mut round, CompetitorId::from("1"), times).clone();

        assert_eq!(first, second);
        assert_eq!(round.results.len(), 1);
    }

    #[test]
    fn upsert_replaces_previous_result() {
        let mut round = Round::new(1, RoundFormat::Ao3);
        upsert_result(&mut round, CompetitorId::from("1"), vec![10.0, 10.0, 10.0]);
        upsert_result(&mut round, CompetitorId::from("2"), vec![9.0, 9.0, 9.0]);
        upsert_result(&mut round, CompetitorId::from("1"), vec![8.0, 8.0, 8.0]);

        assert_eq!(round.results.len(), 2);
        assert_eq!(round.results[0].competitor_id, CompetitorId::from("1"));
        assert_eq!(round.results[0].average, 8.0);
        assert_eq!(round.results[1].average, 9.0);
    }

    #[test]
    fn upsert_normalizes_times() {
        let mut round = Round::new(1, RoundFormat::Ao5);

        let result = upsert_result(&mut round, CompetitorId::from("1"), vec![11.0, -1.0]);
        assert_eq!(result.times, vec![11.0, 0.0, 0.0, 0.0, 0.0]);

        let result = upsert_result(
            &mut round,
            CompetitorId::from("1"),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
        );
        assert_eq!(result.times, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(result.average, 3.0);
    }

    #[test]
    fn empty_times_become_unrecorded_attempts() {
        let mut round = Round::new(1, RoundFormat::Ao3);
        let result = upsert_result(&mut round, CompetitorId::from("1"), Vec::new());

        assert_eq!(result.times, vec![0.0, 0.0, 0.0]);
        assert_eq!(result.best, 0.0);
        assert_eq!(result.average, 0.0);
    }
}
