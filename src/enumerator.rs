//! The Sequential Enumerator: two extensionally-identical backtracking
//! strategies that walk a search subtree rooted at a work item and count
//! the leaves (complete schedules) found.

use crate::domain::WorkItem;
use crate::oracle::OracleKind;
use crate::streak;

/// Strategy R — recursive DFS with in-place undo. Mutates `item` during the
/// walk but leaves it exactly as found on return.
pub fn count_recursive(item: &mut WorkItem, num_teams: usize, max: u64, oracle: OracleKind, local_count: &mut u64) {
    if *local_count >= max {
        return;
    }
    if item.is_leaf() {
        *local_count += 1;
        return;
    }

    let candidates = item.remaining.clone();
    for m in candidates {
        if *local_count >= max {
            return;
        }
        if oracle.reject(&item.schedule, &item.remaining, &item.streaks, num_teams, m) {
            continue;
        }

        let pos = item.remaining.iter().position(|x| *x == m).expect("candidate drawn from remaining");
        item.remaining.remove(pos);
        item.schedule.push(m);
        let snapshot = streak::save_and_apply(&mut item.streaks, m);

        count_recursive(item, num_teams, max, oracle, local_count);

        streak::restore(&mut item.streaks, snapshot);
        item.schedule.pop();
        item.remaining.insert(pos, m);
    }
}

/// Strategy S — explicit-stack DFS. Copies a child work item per accepted
/// candidate rather than undoing, trading memory for simpler control flow.
pub fn count_stack(root: WorkItem, num_teams: usize, max: u64, oracle: OracleKind) -> u64 {
    let mut stack = vec![root];
    let mut count = 0u64;

    while let Some(current) = stack.pop() {
        if count >= max {
            break;
        }
        if current.is_leaf() {
            count += 1;
            continue;
        }

        for m in current.remaining.clone() {
            if oracle.reject(&current.schedule, &current.remaining, &current.streaks, num_teams, m) {
                continue;
            }

            let mut child = current.clone();
            let pos = child.remaining.iter().position(|x| *x == m).expect("candidate drawn from remaining");
            child.remaining.remove(pos);
            child.schedule.push(m);
            streak::apply(&mut child.streaks, m);
            stack.push(child);
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap;

    #[test]
    fn recursive_and_stack_strategies_agree_on_n4() {
        let n = 4;
        let root = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);

        let mut recursive_item = root.clone();
        let mut recursive_count = 0u64;
        count_recursive(&mut recursive_item, n, u64::MAX, OracleKind::Optimized, &mut recursive_count);

        let stack_count = count_stack(root, n, u64::MAX, OracleKind::Optimized);

        assert_eq!(recursive_count, stack_count);
        assert!(recursive_count > 0);
    }

    #[test]
    fn base_and_optimized_oracles_agree_on_leaf_count() {
        let n = 4;
        let root = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);

        let mut base_item = root.clone();
        let mut base_count = 0u64;
        count_recursive(&mut base_item, n, u64::MAX, OracleKind::Base, &mut base_count);

        let mut opt_item = root;
        let mut opt_count = 0u64;
        count_recursive(&mut opt_item, n, u64::MAX, OracleKind::Optimized, &mut opt_count);

        assert_eq!(base_count, opt_count);
    }

    #[test]
    fn recursive_undo_restores_the_root_work_item() {
        let n = 4;
        let root = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);
        let mut item = root.clone();
        let mut count = 0u64;
        count_recursive(&mut item, n, u64::MAX, OracleKind::Optimized, &mut count);

        assert_eq!(item.schedule, root.schedule);
        assert_eq!(item.remaining.len(), root.remaining.len());
    }

    #[test]
    fn max_cap_stops_after_exactly_one_leaf() {
        let n = 4;
        let root = bootstrap::apply_symmetry_breaking(bootstrap::build_root(n), n);
        let mut item = root;
        let mut count = 0u64;
        count_recursive(&mut item, n, 1, OracleKind::Optimized, &mut count);
        assert_eq!(count, 1);
    }
}
