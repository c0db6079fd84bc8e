use anyhow::{Context, Result};

/// The organizational facts prepended to every prompt, so answers come from
/// fixed ground-truth text rather than the model's open-ended knowledge.
pub const DEFAULT_KNOWLEDGE: &str = r#"
IDIA (formerly Digital Equity Institute) is a nonprofit dedicated to improving the quality of life for people around the globe through digital inclusion.
Our mission is bold but simple: to eliminate the digital divide – the gap between those who have affordable access, skills, and support to effectively engage online and those who do not. We are co-creating communities in which every individual, regardless of their background, can thrive in the digital age.

What IDIA Does:
* IDIA co-creates programs, workshops and tools, like our Community Technology Hives, designed to enhance digital skills for all ages and life contexts.
* Partners with other organizations through local and global initiatives to create human-centric, future-focused, accessible digital programs.
* IDIA informs and champions programs that promote digital inclusivity and equity. We work tirelessly to ensure that digital rights and access are recognized and prioritized.

The Staff at the HIVE:
*Erin Carr-Jordan, Ph.D. President & CEO
*Annissa Furr, Ph.D. Head of Learning and Research
* Dominic Papa Chief Government Relations Officer
*Stephanie Pierotti Head of Community Activation
*Tori Blusiewicz Administrative Coordinator
*Luis Morfin Digital Navigator Manager
*Josh Thompson, Ph.D. Program Manager
* Digital Navigators work in the HIVES.

Summary of the Digital Navigators job:
*Our Digital Navigators are here to make technology more approachable and understandable for all community members. They serve as mentors, guides, and facilitators in the journey towards  achieving digital confidence. Our goal is to ensure experiences for digital empowerment are accessible to all.
*Personalized Support
*Youth and Adult Education
*Classes and Workshops
*Collaborative Learning
*Community Voice

These are the HIVES
* The Hive at Aeroterra, Inside Aeroterra Community Center in Edison-Eastlake
-1725 E McKinley Street, Phoenix, Arizona 85006
HOURS OF OPERATION for the HIVE at Aeroterra
Mondays + Wednesday + Thursday 12pm-6pm
Tuesday + Friday 10am-4pm
Second Saturday of each month 10am-2pm

* The Hive at CTEC
Inside Emmett McLoughlin Community Training and Education Center
1150 S. 7th Avenue, Phoenix, Arizona 85007
HOURS OF OPERATION for the HIVE at CTEC
Mondays + Wednesday + Thursday 12pm-6pm
Tuesday + Friday 10am-4pm
First Saturday of each month 10am-2pm

* The Hive at Guadalupe South Mountain
Inside South Mountain Community College’s Guadalupe Center
9233 S Avenida del Yaqui, Guadalupe, Arizona 85283
HOURS OF OPERATION for the HIVE at Guadalupe
Mondays + Wednesday + Thursday 12pm-6pm
Tuesday + Friday 10am-4pm
Third Saturday of each month 10am-2pm

* The Hive at EnVision Center
1310 E Apache Blvd, Tempe, Arizona 85281
HOURS OF OPERATION for the HIVE at EnVision Center
Mondays + Wednesday + Thursday 12pm-6pm
Tuesday + Friday 10am-4pm
Fourth Saturday of each month 10am-2pm

* The Hive at Chandler San Marcos
Next to San Marcos Elementary School
451 W Frye Rd, Chandler AZ 85225
"#;

/// Load the knowledge context once at startup. `KNOWLEDGE_FILE` swaps in a
/// replacement text file; otherwise the compiled-in default applies. The
/// returned string is immutable for the life of the process.
pub fn load() -> Result<String> {
    match dotenv::var("KNOWLEDGE_FILE") {
        Ok(path) if !path.trim().is_empty() => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read knowledge file {}", path)),
        _ => Ok(DEFAULT_KNOWLEDGE.to_string()),
    }
}
