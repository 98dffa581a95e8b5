use crate::graphlib::Graph;

/// Number of edge crossings between adjacent layers.
///
/// Only edges joining consecutive layers are counted; each parallel edge counts on its own.
pub fn cross_count<N>(g: &Graph<N>, layering: &[Vec<usize>]) -> usize {
    layering
        .windows(2)
        .map(|pair| two_layer_cross_count(g, &pair[0], &pair[1]))
        .sum()
}

/// Bilayer crossing count with an accumulator tree (Barth, Jünger & Mutzel).
fn two_layer_cross_count<N>(g: &Graph<N>, north: &[usize], south: &[usize]) -> usize {
    if north.is_empty() || south.is_empty() {
        return 0;
    }

    let mut south_pos: Vec<Option<usize>> = vec![None; g.node_count()];
    for (i, &v) in south.iter().enumerate() {
        south_pos[v] = Some(i);
    }

    let mut south_entries: Vec<usize> = Vec::new();
    for &v in north {
        let mut entries: Vec<usize> = g
            .successors(v)
            .filter_map(|w| south_pos.get(w).copied().flatten())
            .collect();
        entries.sort_unstable();
        south_entries.extend(entries);
    }

    let mut first_index: usize = 1;
    while first_index < south.len() {
        first_index <<= 1;
    }
    let tree_size = 2 * first_index - 1;
    first_index -= 1;
    let mut tree: Vec<usize> = vec![0; tree_size];

    let mut cc: usize = 0;
    for pos in south_entries {
        let mut index = pos + first_index;
        tree[index] += 1;
        let mut weight_sum: usize = 0;
        while index > 0 {
            if index % 2 == 1 {
                weight_sum += tree[index + 1];
            }
            index = (index - 1) >> 1;
            tree[index] += 1;
        }
        cc += weight_sum;
    }

    cc
}
