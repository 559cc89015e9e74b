use knapsack_challenge::{Challenge, Item, Solution};

pub fn solve_challenge(challenge: &Challenge) -> Solution {
    solve(&challenge.items, challenge.capacity)
}

/// Exact 0/1 knapsack by exhaustive enumeration.
///
/// Walks the full binary decision tree over `items` (up to 2^n leaves;
/// intended for small item counts) and returns a maximum-value selection
/// whose total size fits within `capacity`, in the items' original relative
/// order. When several subsets tie on value, the first maximizer in
/// traversal order is kept: at each index the branch that skips the item is
/// explored before the branch that takes it.
///
/// `capacity` and all item values/sizes are expected to be non-negative.
pub fn solve(items: &[Item], capacity: f64) -> Solution {
    let mut chosen: Vec<usize> = Vec::with_capacity(items.len());
    let mut best = Incumbent {
        items: Vec::new(),
        value: 0.0,
    };
    branch(items, 0, &mut chosen, capacity, 0.0, &mut best);
    Solution {
        items: best.items.iter().map(|&i| items[i].clone()).collect(),
        total_value: best.value,
    }
}

// Best selection found so far, as indices into the input slice. Indices are
// pushed in increasing order, so materializing them preserves input order.
struct Incumbent {
    items: Vec<usize>,
    value: f64,
}

fn branch(
    items: &[Item],
    index: usize,
    chosen: &mut Vec<usize>,
    remaining_capacity: f64,
    value_so_far: f64,
    best: &mut Incumbent,
) {
    if index >= items.len() {
        // Strict improvement only: on a tie the earlier-found selection stands.
        if value_so_far > best.value {
            best.value = value_so_far;
            best.items = chosen.clone();
        }
        return;
    }

    // Skip items[index]
    branch(
        items,
        index + 1,
        chosen,
        remaining_capacity,
        value_so_far,
        best,
    );

    // Take items[index] when it still fits. `chosen` is restored before
    // returning, so sibling calls never observe the push.
    let item = &items[index];
    if item.size <= remaining_capacity {
        chosen.push(index);
        branch(
            items,
            index + 1,
            chosen,
            remaining_capacity - item.size,
            value_so_far + item.value,
            best,
        );
        chosen.pop();
    }
}
