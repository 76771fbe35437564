//! Hash collections for node-id and component-name keys.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_keyed_map() {
        let mut widgets: HashMap<usize, Vec<&str>> = HashMap::new();
        widgets.entry(3).or_default().push("MaterialButton");
        widgets.entry(3).or_default().push("MaterialRipple");
        assert_eq!(widgets[&3], vec!["MaterialButton", "MaterialRipple"]);
    }

    #[test]
    fn test_name_set_deduplicates() {
        let names: HashSet<&str> = ["Check", "Check", "Toggle"].into_iter().collect();
        assert_eq!(names.len(), 2);
    }
}
