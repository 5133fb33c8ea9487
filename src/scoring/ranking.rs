use std::cmp::Ordering;

use crate::models::RoundResult;

/// Whether a result has a round score at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Standing {
    Ranked(f64),
    /// Not enough valid attempts for an average.
    Unranked,
}

impl Standing {
    pub fn of(result: &RoundResult) -> Standing {
        if result.average > 0.0 {
            Standing::Ranked(result.average)
        } else {
            Standing::Unranked
        }
    }

    fn compare(&self, other: &Standing) -> Ordering {
        match (self, other) {
            (Standing::Ranked(a), Standing::Ranked(b)) => a.total_cmp(b),
            (Standing::Ranked(_), Standing::Unranked) => Ordering::Less,
            (Standing::Unranked, Standing::Ranked(_)) => Ordering::Greater,
            (Standing::Unranked, Standing::Unranked) => Ordering::Equal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankedResult<'a> {
    /// Shared by equal averages (1, 2, 2, 4). `None` for unranked results.
    pub rank: Option<usize>,
    pub standing: Standing,
    pub result: &'a RoundResult,
}

/// Orders a round's results: ranked ones by ascending average, then the unranked
/// ones. Ties keep their recorded order.
pub fn rank_round(results: &[RoundResult]) -> Vec<RankedResult<'_>> {
    let mut ordered: Vec<(Standing, &RoundResult)> =
        results.iter().map(|r| (Standing::of(r), r)).collect();

    // `sort_by` is stable.
    ordered.sort_by(|(a, _), (b, _)| a.compare(b));

    let mut ranked = Vec::with_capacity(ordered.len());
    let mut previous: Option<(f64, usize)> = None;

    for (position, (standing, result)) in ordered.into_iter().enumerate() {
        let rank = match standing {
            Standing::Ranked(average) => {
                let rank = match previous {
                    Some((previous_average, previous_rank)) if previous_average == average => {
                        previous_rank
                    }
                    _ => position + 1,
                };
                previous = Some((average, rank));
                Some(rank)
            }
            Standing::Unranked => None,
        };

        ranked.push(RankedResult {
            rank,
            standing,
            result,
        });
    }

    ranked
}
