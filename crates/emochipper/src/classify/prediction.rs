//! # Prediction

use std::fmt;

use serde::Serialize;

/// Display text of [`Prediction::NoLabel`].
pub const NO_LABEL_TEXT: &str = "no emotion detected";

/// One qualifying label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelScore {
    /// The label's score index.
    pub index: usize,

    /// The label name.
    pub label: String,

    /// The label's score.
    pub score: f32,
}

/// The outcome of classifying one score vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    /// No label met its threshold.
    ///
    /// This is a sentinel, never a label in the label set.
    #[default]
    NoLabel,

    /// The single chosen label.
    Single(LabelScore),

    /// Every qualifying label, in label order; never empty.
    Multi(Vec<LabelScore>),
}

impl Prediction {
    /// Is this [`Prediction::NoLabel`]?
    pub fn is_no_label(&self) -> bool {
        matches!(self, Self::NoLabel)
    }

    /// The qualifying labels, in label order.
    pub fn label_scores(&self) -> &[LabelScore] {
        match self {
            Self::NoLabel => &[],
            Self::Single(score) => std::slice::from_ref(score),
            Self::Multi(scores) => scores,
        }
    }

    /// The qualifying label names, in label order.
    pub fn labels(&self) -> Vec<&str> {
        self.label_scores()
            .iter()
            .map(|s| s.label.as_str())
            .collect()
    }

    /// The highest-scoring qualifying label; ties go to the lowest index.
    pub fn top(&self) -> Option<&LabelScore> {
        self.label_scores()
            .iter()
            .reduce(|best, s| if s.score > best.score { s } else { best })
    }
}

impl fmt::Display for Prediction {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::NoLabel => f.write_str(NO_LABEL_TEXT),
            _ => f.write_str(&self.labels().join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(
        index: usize,
        label: &str,
        score: f32,
    ) -> LabelScore {
        LabelScore {
            index,
            label: label.to_string(),
            score,
        }
    }

    #[test]
    fn test_no_label() {
        let p = Prediction::default();
        assert!(p.is_no_label());
        assert!(p.labels().is_empty());
        assert_eq!(p.top(), None);
        assert_eq!(p.to_string(), "no emotion detected");
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""no_label""#);
    }

    #[test]
    fn test_single() {
        let p = Prediction::Single(score(0, "joy", 0.55));
        assert!(!p.is_no_label());
        assert_eq!(p.to_string(), "joy");
        assert_eq!(p.top().unwrap().label, "joy");
    }

    #[test]
    fn test_multi() {
        let p = Prediction::Multi(vec![
            score(0, "joy", 0.5),
            score(3, "love", 0.9),
            score(7, "pride", 0.9),
        ]);
        assert_eq!(p.labels(), vec!["joy", "love", "pride"]);
        assert_eq!(p.to_string(), "joy, love, pride");
        assert_eq!(p.top().unwrap().index, 3);
    }
}
