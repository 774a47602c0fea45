use serde::{Deserialize, Serialize};

/// Optional filters for `GET /evaluations`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvaluationFilter {
    pub jd_id: Option<i64>,
    pub min_score: Option<u32>,
    pub verdict: Option<String>,
}

impl EvaluationFilter {
    /// Build a filter from raw form values. Blank or unparseable values are
    /// treated as absent.
    pub fn from_form(jd_id: Option<&str>, min_score: Option<&str>, verdict: Option<&str>) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.map(str::trim).filter(|v| !v.is_empty())
        }

        Self {
            jd_id: present(jd_id).and_then(|v| v.parse().ok()),
            min_score: present(min_score).and_then(|v| v.parse().ok()),
            verdict: present(verdict).map(str::to_string),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.jd_id.is_none() && self.min_score.is_none() && self.verdict.is_none()
    }

    /// Query parameters in wire order, only for the filters that are set
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(jd_id) = self.jd_id {
            pairs.push(("jd_id", jd_id.to_string()));
        }
        if let Some(min_score) = self.min_score {
            pairs.push(("min_score", min_score.to_string()));
        }
        if let Some(verdict) = &self.verdict {
            pairs.push(("verdict", verdict.clone()));
        }
        pairs
    }

    /// Form-encoded query string, e.g. `jd_id=3&min_score=70`
    pub fn query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}
