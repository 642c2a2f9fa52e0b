use super::Translation;

pub const SYSTEM_PROMPT: &str = "You are an expert medical translator with knowledge of healthcare terminology in multiple languages.";

/// Build the user instruction for one translation job.
pub fn build(job: &Translation<'_>) -> String {
    format!(
        "You are a professional medical translator. Translate the following text from {source} to {target}.\n\
         \n\
         Important instructions:\n\
         - Maintain medical terminology accuracy\n\
         - Keep the tone professional and empathetic\n\
         - Preserve all medical terms and their meanings\n\
         - If there are medical abbreviations, translate appropriately\n\
         - Return ONLY the translated text, no explanations\n\
         \n\
         Text to translate: {text}",
        source = job.source_lang,
        target = job.target_lang,
        text = job.text,
    )
}
