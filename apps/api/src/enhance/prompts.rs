// Enhancer prompt templates.
// Placeholders: {formatting_rules}, {user_content}.

pub const PROFESSIONAL_SUMMARY_PROMPT: &str = r#"You are an expert resume writer specializing in ATS-optimized content. Your task is to enhance the professional summary provided below.

REQUIREMENTS:
- Length: 2 to 3 concise sentences maximum
- Highlight key skills, relevant experience, and clear career objectives
- Use strong action words and industry-specific terminology
- Make it compelling and ATS-friendly
- Write in third person or first person depending on the input style
- Focus on quantifiable achievements where possible

{formatting_rules}

User's current summary:
{user_content}

Return ONLY the enhanced professional summary with no preamble, explanation, or additional text:"#;

pub const JOB_DESCRIPTION_PROMPT: &str = r#"You are an expert resume writer specializing in ATS-optimized job descriptions. Your task is to enhance the job description provided below.

REQUIREMENTS:
- Length: 2 to 3 impactful sentences maximum
- Highlight key responsibilities and measurable achievements
- Use strong action verbs (Led, Managed, Developed, Implemented, Optimized, etc.)
- Include quantifiable results and metrics where applicable (percentages, dollar amounts, time saved, etc.)
- Make it ATS-friendly with relevant keywords
- Focus on impact and results rather than just duties

{formatting_rules}

User's current job description:
{user_content}

Return ONLY the enhanced job description with no preamble, explanation, or additional text:"#;
