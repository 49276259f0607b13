use std::time::Duration;


/// How the next vertex to visit is chosen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Selection {
    /// Full scan over the path tree for the nearest unvisited reached vertex
    /// O(V) per selection, O(V² + E) per search. Ties go to the vertex that
    /// comes first in graph order.
    #[default]
    LinearScan,
    /// Priority queue with lazy deletion, O((V + E) log V) per search
    /// Ties are broken by the heap, not by graph order.
    BinaryHeap,
}

/// Search settings for [`RoutingService`](super::RoutingService)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    pub selection: Selection,
    /// Wall-clock budget per search, checked before each vertex selection
    /// A zero budget aborts before the first selection.
    pub deadline: Option<Duration>,
}

impl RoutingConfig {

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RoutingConfig::default();
        assert_eq!(config.selection, Selection::LinearScan);
        assert_eq!(config.deadline, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = RoutingConfig::default()
            .with_selection(Selection::BinaryHeap)
            .with_deadline(Duration::from_millis(250));
        assert_eq!(config.selection, Selection::BinaryHeap);
        assert_eq!(config.deadline, Some(Duration::from_millis(250)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: RoutingConfig = serde_json::from_str(r#"{"selection": "binary_heap"}"#).unwrap();
        assert_eq!(config, RoutingConfig::default().with_selection(Selection::BinaryHeap));
    }
}
