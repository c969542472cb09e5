use crate::emotion::domain::face_analysis::FaceAnalysis;

/// Build the explanation request for one face analysis.
///
/// Lists the dominant emotion and every score (two decimals, one per line),
/// then frames the request: incident prevention in the army, the image is
/// of a soldier.
pub fn build_prompt(analysis: &FaceAnalysis) -> String {
    let summary = analysis.emotions.summary_lines().join("\n");
    format!(
        "I analyzed an image. Dominant emotion: {dominant}. \
         All emotion probabilities: \n{summary}. \
         Explain what this may mean and how this data can be interpreted. \
         All of this is to prevent incidents in the army; \
         the image being analyzed is of a soldier.",
        dominant = analysis.dominant_emotion,
    )
}
