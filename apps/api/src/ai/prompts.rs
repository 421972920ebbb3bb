// Prompt templates for the AI features. Placeholders are substituted with
// `str::replace` before the prompt is sent.

pub const ENHANCE_SUMMARY_PROMPT_TEMPLATE: &str = "\
You are an expert resume writer.

Enhance the professional summary below.

Rules:
- 1 to 2 sentences
- ATS-friendly
- Highlight skills, experience and career goals
- Return ONLY plain text

Summary:
{content}
";

pub const ENHANCE_JOB_DESCRIPTION_PROMPT_TEMPLATE: &str = "\
You are an expert resume writer.
Enhance the job description below into 3 professional bullet points.

Rules:
- Use strong action verbs.
- Focus on achievements.
- Return ONLY the bullet points, one per line.
- Do not use markdown symbols like * or -.
- Do not include introductory text or markdown backticks.

Content:
{content}
";

pub const ENHANCE_PROJECT_DESCRIPTION_PROMPT_TEMPLATE: &str = "\
You are a resume expert.

STRICT RULES:
- 2 to 3 sentences
- Each sentence starts with a strong action verb
- Each sentence on a new line
- No markdown, no bullets
- Return ONLY raw text

Project:
{content}
";

pub const PARSE_RESUME_PROMPT_TEMPLATE: &str = r#"You are an AI resume parser.

STRICT RULES:
- Return ONLY valid JSON
- No explanation
- No markdown
- No extra text
- Dates use YYYY-MM or YYYY
- Experience descriptions are arrays of bullet strings

JSON FORMAT:
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
    {"company": "", "position": "", "start_date": "", "end_date": "", "is_current": false, "description": []}
  ],
  "project": [{"name": "", "type": "", "description": ""}],
  "education": [
    {"institution": "", "degree": "", "field": "", "graduation_date": "", "gpa": ""}
  ]
}

Resume:
{resume_text}
"#;

pub const ATS_SCAN_PROMPT_TEMPLATE: &str = r#"You are an expert ATS auditor. Analyze this resume against industry standards.

Resume Content:
{resume_text}

Job Description:
{job_description}

Return ONLY valid JSON:
{
  "score": number,
  "metrics": {
    "content": { "score": number, "wrong": "string", "fix": "string" },
    "sections": { "score": number, "wrong": "string", "fix": "string" },
    "contact": { "score": number, "wrong": "string", "fix": "string" },
    "tailoring": { "score": number, "wrong": "string", "fix": "string" }
  },
  "keywordGaps": [{"skill": "string"}],
  "optimizedData": {
    "professional_summary": "string",
    "skills": ["string"],
    "experience": [{"company": "string", "position": "string", "description": "string"}]
  }
}
"#;
