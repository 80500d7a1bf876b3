pub mod resume;

pub use resume::{
    AwardRecord, CertificationRecord, EducationRecord, ExperienceRecord, InterestRecord,
    LanguageRecord, ProjectRecord, RecommendationRecord, ResumeRecord, SkillGroupRecord,
};
