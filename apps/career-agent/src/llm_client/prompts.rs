// Cross-cutting prompt fragments. Feature prompts live next to their feature.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps rewritten resume text honest.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    Never invent employers, numbers, dates, credentials or achievements that are \
    not present in the input. If a metric would help but is missing, phrase the \
    sentence so it reads well without one.";
