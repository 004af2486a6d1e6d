//! Fixed prompt templates for the two generative calls.

use crate::domain::Prediction;

/// Prompt asking for a short optimistic argument behind the prediction.
pub fn explanation_prompt(prediction: &Prediction) -> String {
    format!(
        "The statement is: \"{}\"\n\n\
         Provide a short, optimistic, and compelling 2-3 sentence argument explaining why this \
         combination specifically creates a better future.\n\
         Use professional but inspiring language. Avoid cliches.",
        prediction.statement()
    )
}

/// Prompt for a text-free 16:9 background visualizing the prediction.
pub fn vision_prompt(prediction: &Prediction) -> String {
    format!(
        "A cinematic, high-quality, futuristic visualization of {} transforming {}.\n\
         Abstract, clean, professional aesthetic, optimistic atmosphere, wide-angle 16:9 composition.\n\
         No text in the image. Deep blues, vibrant oranges, and soft glow lighting. 8k resolution style.",
        prediction.technology(),
        prediction.sector()
    )
}
