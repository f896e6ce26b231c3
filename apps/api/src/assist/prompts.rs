// Prompt constants for the four assist flows. JSON-returning flows pin
// the exact output schema in both the system prompt and the template.

/// System prompt for objective suggestion. JSON-only output.
pub const OBJECTIVE_SYSTEM: &str =
    "You are an expert resume writer. You craft concise, impactful resume \
    objective statements tailored to a specific job. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Objective prompt. Replace `{experience_details}` and `{job_description}`.
pub const OBJECTIVE_PROMPT_TEMPLATE: &str = r#"Craft a compelling resume objective based on the candidate's experience and the job they are applying for.

Experience Details:
{experience_details}

Job Description:
{job_description}

Write one concise and impactful resume objective statement tailored to this job.

Return a JSON object with this EXACT schema:
{
  "resume_objective": "the suggested objective statement"
}"#;

/// System prompt for skill suggestion. JSON-only output.
pub const SKILLS_SYSTEM: &str =
    "You are an expert job description analyst. You extract relevant, concise \
    skill names from job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Skills prompt. Replace `{current_skills}` and `{job_description}`.
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and suggest a list of relevant skills.

{current_skills}

Suggest new skills or highly relevant variations that are most aligned with the job description, not just synonyms of skills the candidate already has. Focus on skills explicitly mentioned or strongly implied by the job duties and requirements. Keep each suggestion a concise skill name (e.g. "Python", "Project Management", "Data Analysis").

Job Description:
{job_description}

Return a JSON object with this EXACT schema:
{
  "suggested_skills": ["skill one", "skill two"]
}"#;

/// System prompt for project description optimization. JSON-only output.
pub const PROJECT_SYSTEM: &str =
    "You are an expert resume writer. You rewrite project descriptions to \
    align with a target job, using action verbs and quantified achievements. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Project prompt. Replace `{project_name}`, `{technologies_used}`,
/// `{current_description}` and `{job_description}`.
pub const PROJECT_PROMPT_TEMPLATE: &str = r#"Optimize the following project description to better align with the provided job description. Highlight the aspects of the project most relevant to the job.

Project Name: {project_name}
Technologies Used: {technologies_used}
Current Project Description (uses Markdown for bullet points):
{current_description}

Job Description:
{job_description}

Provide an improved, complete project description using Markdown for bullet points (e.g. "- Achieved X..."). Use action verbs and quantify achievements where possible. The rewrite must be ready to use directly.

Return a JSON object with this EXACT schema:
{
  "optimized_description": "the rewritten description"
}"#;

/// System prompt for full-resume optimization. Free-text output; the
/// result is surfaced for manual review, never parsed.
pub const FULL_RESUME_SYSTEM: &str =
    "You are an expert resume optimizer. Given a resume and a job \
    description, you rewrite the resume's objective, skills and project \
    descriptions to better match the job requirements, and return the \
    entire optimized resume as plain text.";

/// Full-resume prompt. Replace `{resume}` and `{job_description}`.
pub const FULL_RESUME_PROMPT_TEMPLATE: &str = r#"Given the following resume and job description, suggest changes to the resume's skills, project descriptions, and objective to better match the job requirements. Return the entire optimized resume.

Resume:
{resume}

Job Description:
{job_description}"#;
