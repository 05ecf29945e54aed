// Resume extraction prompt.
// Placeholders: {formatting_rules}, {resume_text}.

pub const RESUME_EXTRACTION_PROMPT: &str = r#"You are an expert AI agent specialized in extracting structured data from resumes with high accuracy.

TASK: Extract all relevant information from the resume text below and format it as valid JSON.

IMPORTANT EXTRACTION RULES:
- Extract dates in a consistent format (e.g., "January 2020", "2020", "Jan 2020")
- For is_current field, set to true only if explicitly mentioned as "Present", "Current", or similar
- Extract skills as individual items in an array
- Clean and normalize all text (remove extra spaces, special formatting)
- If a field is not present in the resume, leave it as an empty string or empty array
- Extract phone numbers and emails exactly as they appear
- For LinkedIn and website URLs, include the full URL if present

{formatting_rules}

Resume text:
{resume_text}

Required JSON structure (return ONLY this JSON with no additional text, markdown, or code blocks):
{
    "professional_summary": "",
    "skills": [],
    "personal_info": {
        "image": "",
        "full_name": "",
        "profession": "",
        "email": "",
        "phone": "",
        "location": "",
        "linkedin": "",
        "website": ""
    },
    "experience": [
        {
            "company": "",
            "position": "",
            "start_date": "",
            "end_date": "",
            "description": "",
            "is_current": false
        }
    ],
    "project": [
        {
            "name": "",
            "type": "",
            "description": ""
        }
    ],
    "education": [
        {
            "institution": "",
            "degree": "",
            "field": "",
            "graduation_date": "",
            "gpa": ""
        }
    ]
}"#;
