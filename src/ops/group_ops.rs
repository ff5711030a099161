use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{ProjectNightError, ProjectNightResult};
use crate::model::{Group, Participant};

/// Split participants into teams of roughly `group_size`, spreading
/// experience evenly across teams.
///
/// Participants are ranked by score (highest first, ties in roster order),
/// the ranks are cut into `group_size` quantile buckets, and each team takes
/// at most one member from every bucket. Which member of a bucket lands in
/// which team is random. Teams smaller than `group_size - 1` are dissolved
/// and their members dealt out to the remaining teams.
pub fn create_groups<R: Rng + ?Sized>(
    participants: &[Participant],
    group_size: i64,
    rng: &mut R,
) -> ProjectNightResult<Vec<Group>> {
    if group_size <= 0 {
        return Err(ProjectNightError::InvalidArgument(format!(
            "group_size must be a positive integer. You input {}.",
            group_size
        )));
    }
    if participants.is_empty() {
        return Ok(Vec::new());
    }

    let size = group_size as usize;
    if participants.len() < size {
        let mut only = Group::numbered(1);
        only.members = participants.iter().map(|p| p.name.clone()).collect();
        return Ok(vec![only]);
    }

    let buckets = quantile_buckets(participants, size);

    let mut order: Vec<usize> = (0..participants.len()).collect();
    order.shuffle(rng);

    let mut groups: Vec<Group> = Vec::new();
    for bucket in 0..size {
        let members = order.iter().filter(|&&i| buckets[i] == bucket);
        for (slot, &i) in members.enumerate() {
            if slot == groups.len() {
                groups.push(Group::numbered(slot + 1));
            }
            groups[slot].members.push(participants[i].name.clone());
        }
    }
    debug!(groups = groups.len(), group_size, "dealt quantile buckets");

    Ok(redistribute_small_groups(groups, size))
}

/// Bucket index (0-based) of every participant, in input order.
///
/// Ranks run 1..=n with the highest score first; equal scores keep their
/// input order. Ranks are cut at the linearly interpolated quantiles
/// `1 + j * (n - 1) / k`, each bucket closed on the right, which puts rank
/// `r` into bucket `ceil(k * (r - 1) / (n - 1)) - 1` (rank 1 into bucket 0).
pub fn quantile_buckets(participants: &[Participant], buckets: usize) -> Vec<usize> {
    let n = participants.len();
    let mut by_score: Vec<usize> = (0..n).collect();
    // sort_by is stable, so ties stay in roster order
    by_score.sort_by(|&a, &b| {
        participants[b]
            .experience_score
            .cmp(&participants[a].experience_score)
    });

    let mut result = vec![0; n];
    if buckets <= 1 || n <= 1 {
        return result;
    }

    for (position, &index) in by_score.iter().enumerate() {
        let steps = buckets * position;
        let span = n - 1;
        let ceil = steps.div_ceil(span);
        result[index] = ceil.saturating_sub(1).min(buckets - 1);
    }
    result
}

fn redistribute_small_groups(groups: Vec<Group>, size: usize) -> Vec<Group> {
    let min_members = size.saturating_sub(1);
    let (mut kept, small): (Vec<Group>, Vec<Group>) =
        groups.into_iter().partition(|g| g.len() >= min_members);

    let mut pool: Vec<String> = small.into_iter().flat_map(|g| g.members).collect();
    if pool.is_empty() {
        return kept;
    }
    debug!(pooled = pool.len(), "redistributing undersized groups");

    if kept.is_empty() {
        let mut only = Group::numbered(1);
        only.members = pool;
        return vec![only];
    }

    while !pool.is_empty() {
        for group in kept.iter_mut() {
            match pool.pop() {
                Some(name) => group.members.push(name),
                None => break,
            }
        }
    }
    kept
}
