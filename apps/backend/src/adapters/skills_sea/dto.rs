//! DTOs for skills_sea adapter.

#[derive(Debug, Clone)]
pub struct SkillCreate {
    pub name: String,
    pub experience: i16,
}

#[derive(Debug, Clone, Default)]
pub struct SkillUpdate {
    pub name: Option<String>,
    pub experience: Option<i16>,
}
