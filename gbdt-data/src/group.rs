use hashbrown;

use std::hash::Hash;

use self::hashbrown::HashMap;

/// Groups example indices by key (normally the query id).
///
/// Groups come out in the order their key is first seen and every group keeps
/// its examples in dataset order, so the same input always yields the same
/// groups. Examples of one query don't need to be contiguous.
pub fn group_by<K: Hash + Eq>(keys: &[K]) -> Vec<Vec<usize>> {
    let mut lookup: HashMap<&K, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (idx, key) in keys.iter().enumerate() {
        let next_group = groups.len();
        let group_idx = *lookup.entry(key).or_insert(next_group);
        if group_idx == next_group {
            groups.push(Vec::new());
        }
        groups[group_idx].push(idx);
    }
    groups
}
