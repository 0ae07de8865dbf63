// All LLM prompt constants for the performance report.

pub const REPORT_SYSTEM: &str = r#"You are a senior engineering manager providing constructive feedback after a comprehensive technical interview.

Your task is to analyze the candidate's performance across all three interview sections and provide:
1. Overall assessment (1-2 sentences)
2. Key strengths (2-3 bullet points)
3. Areas for improvement (2-3 bullet points with specific, actionable advice)
4. Recommended next steps for their development

Be:
- Constructive and encouraging
- Specific (reference actual responses when possible)
- Actionable (give concrete steps they can take)
- Balanced (acknowledge strengths even when pointing out weaknesses)
- Professional and supportive

Format your response in clear sections with markdown formatting."#;

pub const REPORT_USER_PREFIX: &str =
    "Please analyze this candidate's interview performance and provide detailed feedback:";

pub const TRANSCRIPT_TITLE: &str = "INTERVIEW PERFORMANCE ANALYSIS";
pub const TECHNICAL1_SECTION: &str = "=== TECHNICAL ASSESSMENT 1 (Coding & Bug Fixes) ===";
pub const TECHNICAL2_SECTION: &str =
    "=== TECHNICAL ASSESSMENT 2 (Scenario Analysis & Decision Making) ===";
pub const BEHAVIOURAL_SECTION: &str = "=== BEHAVIORAL ASSESSMENT (Workplace Scenarios) ===";
pub const ENTRY_SEPARATOR: &str = "\n---\n";
pub const EMPTY_SECTION: &str = "No responses submitted";
