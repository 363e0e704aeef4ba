use super::about::biography;
use crate::error::Result;

/// Name and tagline shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
}

pub fn profile() -> Result<Profile> {
    let bio = biography()?;
    Ok(Profile {
        name: "Owen Au",
        role: "Independent Analyst",
        tagline: bio.introduction,
        location: "London",
    })
}
