use std::fmt;

/// Per-emotion percentages (0–100) for one face, in model order.
///
/// Order is preserved so prompts and rendered breakdowns list emotions
/// exactly as the classifier produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmotionScores {
    entries: Vec<(String, f64)>,
}

impl EmotionScores {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(l, v)| (l.into(), v)).collect(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Label with the highest score. The earliest entry wins ties.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (label, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((label, value)),
        })
    }

    /// Display lines such as `Happy: 92.50%`.
    pub fn breakdown_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(label, value)| format!("{}: {value:.2}%", capitalize(label)))
            .collect()
    }

    /// Prompt lines such as `happy: 92.50%`, labels as the model reports them.
    pub fn summary_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(label, value)| format!("{label}: {value:.2}%"))
            .collect()
    }
}

impl fmt::Display for EmotionScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}: {value:.2}")?;
        }
        write!(f, "}}")
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn happy_scores() -> EmotionScores {
        EmotionScores::from_pairs([("happy", 92.5), ("sad", 3.0), ("neutral", 4.5)])
    }

    #[test]
    fn test_breakdown_lines_capitalize_and_round() {
        assert_eq!(
            happy_scores().breakdown_lines(),
            vec!["Happy: 92.50%", "Sad: 3.00%", "Neutral: 4.50%"]
        );
    }

    #[test]
    fn test_summary_lines_keep_labels() {
        assert_eq!(
            happy_scores().summary_lines(),
            vec!["happy: 92.50%", "sad: 3.00%", "neutral: 4.50%"]
        );
    }

    #[test]
    fn test_dominant_is_max() {
        assert_eq!(happy_scores().dominant(), Some(("happy", 92.5)));
    }

    #[test]
    fn test_dominant_tie_prefers_first() {
        let scores = EmotionScores::from_pairs([("sad", 50.0), ("fear", 50.0)]);
        assert_eq!(scores.dominant().map(|(l, _)| l), Some("sad"));
    }

    #[test]
    fn test_dominant_of_empty_is_none() {
        assert!(EmotionScores::default().dominant().is_none());
    }

    #[test]
    fn test_get_looks_up_by_label() {
        let scores = happy_scores();
        assert_eq!(scores.get("sad"), Some(3.0));
        assert_eq!(scores.get("angry"), None);
    }

    #[test]
    fn test_display_lists_scores_in_order() {
        assert_eq!(
            happy_scores().to_string(),
            "{happy: 92.50, sad: 3.00, neutral: 4.50}"
        );
    }

    #[rstest]
    #[case("happy", "Happy")]
    #[case("ANGRY", "Angry")]
    #[case("", "")]
    #[case("s", "S")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }
}
