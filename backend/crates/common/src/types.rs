use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity card returned by the front end's `/info` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub instance_id: Uuid,
    /// Scoring backend this instance forwards checks to.
    pub scoring_url: String,
}

impl ServiceInfo {
    pub fn new(name: &str, scoring_url: &str) -> Self {
        Self {
            name: name.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            instance_id: Uuid::new_v4(),
            scoring_url: scoring_url.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_get_distinct_ids() {
        let a = ServiceInfo::new("credcheck-web", "http://scoring");
        let b = ServiceInfo::new("credcheck-web", "http://scoring");
        assert_ne!(a.instance_id, b.instance_id);
        assert_eq!(a.scoring_url, "http://scoring");
    }
}
