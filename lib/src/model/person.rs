use super::MediaId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonRole {
    Actor { character: String },
    Director,
    Writer,
    Producer,
    /// Any other crew role, with the catalog's role name
    Other(String),
}

impl PersonRole {
    /// Map a Collectorz crew role id (`dfDirector`) or role name (`Director`)
    pub fn from_crew_role(role: &str) -> Self {
        let role = role.trim();
        let name = role.strip_prefix("df").unwrap_or(role);
        match name.to_ascii_lowercase().as_str() {
            "director" => Self::Director,
            "writer" | "screenplay" => Self::Writer,
            "producer" => Self::Producer,
            _ => Self::Other(role.to_string()),
        }
    }

    /// Order of the person blocks in the NFO
    pub fn render_rank(&self) -> u8 {
        match self {
            Self::Actor { .. } => 0,
            Self::Director => 1,
            Self::Writer => 2,
            Self::Producer => 3,
            Self::Other(_) => 4,
        }
    }
}

/// A member of the cast or crew
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub owner: MediaId,
    pub name: String,
    pub role: PersonRole,
    /// Image url or local path of the person
    pub thumb: String,
    pub order: u32,
}
