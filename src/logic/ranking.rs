//! Turning a finished game's per-player metric into tournament points.

use crate::models::{PlayerId, Ranking};

/// Points for first, second and third place. Everyone else gets 0.
pub const PLACEMENT_POINTS: [u32; 3] = [10, 5, 2];

/// Points for a 0-based placement.
pub fn placement_points(place: usize) -> u32 {
    PLACEMENT_POINTS.get(place).copied().unwrap_or(0)
}

/// Flat positional points: sort ascending by `metric` (lower is better) and
/// give each position its value, ties included. Used by Countdown.
///
/// Ties keep seat order (stable sort).
pub fn positional_rankings<'a, I>(entries: I) -> Vec<Ranking>
where
    I: IntoIterator<Item = (PlayerId, &'a str, i64)>,
{
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_by_key(|&(_, _, metric)| metric);
    sorted
        .into_iter()
        .enumerate()
        .map(|(place, (player_id, name, _))| Ranking {
            player_id,
            name: name.to_string(),
            points: placement_points(place),
        })
        .collect()
}

/// Tiered points: distinct metric values, highest first, each form one tier.
/// Players sharing a value share that tier's points.
pub fn tiered_rankings<'a, I>(entries: I) -> Vec<Ranking>
where
    I: IntoIterator<Item = (PlayerId, &'a str, u32)>,
{
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_by(|a, b| b.2.cmp(&a.2));

    let mut distinct: Vec<u32> = sorted.iter().map(|&(_, _, metric)| metric).collect();
    distinct.dedup();

    sorted
        .into_iter()
        .map(|(player_id, name, metric)| {
            let tier = distinct.iter().position(|&v| v == metric).unwrap_or(usize::MAX);
            Ranking {
                player_id,
                name: name.to_string(),
                points: placement_points(tier),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn ids(n: usize) -> Vec<PlayerId> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn tied_metrics_share_a_tier() {
        let ids = ids(4);
        let names = ["A", "B", "C", "D"];
        let metrics = [4, 7, 4, 1];
        let rankings = tiered_rankings((0..4).map(|i| (ids[i], names[i], metrics[i])));
        let points: Vec<_> = rankings.iter().map(|r| (r.name.as_str(), r.points)).collect();
        assert_eq!(points, vec![("B", 10), ("A", 5), ("C", 5), ("D", 2)]);
    }

    #[test]
    fn positional_rankings_do_not_dedupe_ties() {
        let ids = ids(4);
        let rankings = positional_rankings(vec![
            (ids[0], "A", 40),
            (ids[1], "B", -3),
            (ids[2], "C", 40),
            (ids[3], "D", 90),
        ]);
        let points: Vec<_> = rankings.iter().map(|r| (r.name.as_str(), r.points)).collect();
        assert_eq!(points, vec![("B", 10), ("A", 5), ("C", 2), ("D", 0)]);
    }
}
