//! Prompt construction for cover letter generation.
//!
//! `build_prompt` is a pure function: no side effects, no failure modes. The two
//! free-text fields are truncated before embedding to bound the outbound prompt.

use crate::letters::models::CoverLetterRequest;

/// Maximum characters of the job description embedded in the prompt.
pub const MAX_JOB_DESCRIPTION_CHARS: usize = 2000;
/// Maximum characters of the resume text embedded in the prompt.
pub const MAX_RESUME_CHARS: usize = 1500;

/// Returns the first `max_chars` characters of `text`. Counts characters, not
/// bytes, so the cut never lands inside a UTF-8 code point.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the user-role prompt for one generation call.
/// The CUSTOM MESSAGE section is emitted only when `custom_message` is non-empty.
pub fn build_prompt(request: &CoverLetterRequest) -> String {
    let custom_section = if request.custom_message.is_empty() {
        String::new()
    } else {
        format!("CUSTOM MESSAGE: {}\n\n", request.custom_message)
    };

    format!(
        "Generate a professional cover letter for the following job application:\n\
         \n\
         JOB DETAILS:\n\
         - Position: {job_title}\n\
         - Company: {company_name}\n\
         - Job Description: {job_description}\n\
         \n\
         APPLICANT DETAILS:\n\
         - Name: {applicant_name}\n\
         - Email: {applicant_email}\n\
         - Experience Level: {experience_level}\n\
         \n\
         RESUME/BACKGROUND:\n\
         {resume_text}\n\
         \n\
         {custom_section}\
         REQUIREMENTS:\n\
         1. Create a personalized cover letter that directly addresses the job requirements\n\
         2. Highlight relevant skills and experiences from the resume\n\
         3. Show genuine interest in the company and role\n\
         4. Maintain a professional yet engaging tone\n\
         5. Keep it concise (3-4 paragraphs)\n\
         6. Include a strong opening and compelling closing\n\
         7. Avoid generic phrases and make it specific to this opportunity\n\
         \n\
         Format the cover letter professionally with proper structure and flow.",
        job_title = request.job_title,
        company_name = request.company_name,
        job_description = truncate_chars(&request.job_description, MAX_JOB_DESCRIPTION_CHARS),
        applicant_name = request.applicant_name,
        applicant_email = request.applicant_email,
        experience_level = request.experience_level,
        resume_text = truncate_chars(&request.resume_text, MAX_RESUME_CHARS),
        custom_section = custom_section,
    )
}
