//! Brand, output and roster configuration
//!
//! The original asset scripts carried hardcoded paths and an inline team
//! table. Here that data lives in explicit structures passed into the
//! generation routines; the defaults reproduce the House of Clarence
//! branding so a bare `brandgen all` regenerates the canonical set.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Company identity rendered into every asset
#[derive(Debug, Clone)]
pub struct BrandConfig {
    /// Short monogram drawn on favicons and logos
    pub monogram: String,
    /// Full company name
    pub company: String,
    /// Tagline shown under the company name
    pub tagline: String,
    /// Main business phone number
    pub phone: String,
    /// Enquiries address shown on the letterhead
    pub enquiries_email: String,
    /// Public website (letterhead)
    pub website: String,
    /// Email/website domain used for signatures
    pub signature_domain: String,
    /// Street address line (signatures)
    pub address: String,
    /// City shown in the letterhead footer
    pub city: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            monogram: "HOC".to_string(),
            company: "House of Clarence".to_string(),
            tagline: "Refined Finishing for Discerning Spaces".to_string(),
            phone: "020 3370 4057".to_string(),
            enquiries_email: "enquiries@houseofclarence.com".to_string(),
            website: "houseofclarence.com".to_string(),
            signature_domain: "houseofclarence.uk".to_string(),
            address: "25-27 Clarence Street, Staines-upon-Thames, Surrey, TW18 4SY".to_string(),
            city: "London".to_string(),
        }
    }
}

/// Where generated files land
///
/// Each asset batch writes a fixed set of filenames into its directory,
/// creating it if absent. Re-runs overwrite prior outputs.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Favicon/touch-icon directory (the site's `public/` folder)
    pub public_dir: PathBuf,
    /// Logo variants directory
    pub logos_dir: PathBuf,
    /// Letterhead output directory
    pub letterhead_dir: PathBuf,
    /// Email signature output directory
    pub signatures_dir: PathBuf,
}

impl OutputConfig {
    /// Lay all asset directories out under a single root.
    pub fn under_root(root: &Path) -> Self {
        Self {
            public_dir: root.join("public"),
            logos_dir: root.join("public").join("logos"),
            letterhead_dir: root.join("letterhead"),
            signatures_dir: root.join("signatures"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::under_root(Path::new("out"))
    }
}

/// One team member in the signature roster
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Personal mobile; members without one get a single business-number row
    pub personal_phone: Option<String>,
    pub business_phone: String,
    /// Local part of the member's email address
    pub email_user: String,
}

impl TeamMember {
    /// Output filename for this member's signature PNG.
    pub fn signature_filename(&self) -> String {
        format!("{}.png", self.name.replace(' ', "_"))
    }
}

/// Load a roster from a JSON array of members.
pub fn load_roster(path: &Path) -> Result<Vec<TeamMember>> {
    let data = fs::read_to_string(path)?;
    let roster: Vec<TeamMember> = serde_json::from_str(&data)
        .map_err(|e| Error::ConfigError(format!("Invalid roster file {}: {}", path.display(), e)))?;
    if roster.is_empty() {
        return Err(Error::ConfigError(format!(
            "Roster file {} contains no members",
            path.display()
        )));
    }
    Ok(roster)
}

/// The built-in House of Clarence team roster.
pub fn default_roster() -> Vec<TeamMember> {
    let member = |name: &str, role: &str, personal: Option<&str>, user: &str| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        personal_phone: personal.map(|p| p.to_string()),
        business_phone: "0203 715 5892".to_string(),
        email_user: user.to_string(),
    };

    vec![
        member("Aaron Money", "Managing Director", Some("07939 983 477"), "aaron"),
        member("Archana Prakasan", "Interior Designer", Some("07778 253 100"), "archana"),
        member("Akila Ramachandran", "Quantity Surveyor", Some("07884 590 058"), "akila"),
        member("Chandni Kavaiya", "Kitchen Designer", Some("07466 383 810"), "chandni"),
        member("Gayathri Charu", "Interior Designer", None, "gayathri"),
        member("Kailash Kachhwaha", "Business Development Manager", Some("07576 066 633"), "kailash"),
        member("Sarvesh Malavia", "Interior Designer", Some("07586 595 266"), "sarvesh"),
        member("Shubham Sharma", "General Manager", None, "shubham"),
        member("Thomas George Palatty", "Associate Director", Some("07415 870 347"), "thomas"),
        member("Surya Ravichandran", "Quantity Surveyor", Some("07405 463 465"), "surya"),
        member("Mehwish Qayoon", "Operations Manager", Some("07424 224 107"), "mehwish"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_has_expected_members() {
        let roster = default_roster();
        assert_eq!(roster.len(), 11);
        // Two members have no personal phone
        let without_personal = roster.iter().filter(|m| m.personal_phone.is_none()).count();
        assert_eq!(without_personal, 2);
    }

    #[test]
    fn signature_filename_replaces_spaces() {
        let roster = default_roster();
        let thomas = roster.iter().find(|m| m.email_user == "thomas").unwrap();
        assert_eq!(thomas.signature_filename(), "Thomas_George_Palatty.png");
    }

    #[test]
    fn output_config_nests_logos_under_public() {
        let out = OutputConfig::under_root(Path::new("/tmp/x"));
        assert!(out.logos_dir.starts_with(&out.public_dir));
    }

    #[test]
    fn load_roster_rejects_empty() {
        let dir = std::env::temp_dir().join("brandgen-roster-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.json");
        fs::write(&path, "[]").unwrap();
        assert!(matches!(load_roster(&path), Err(Error::ConfigError(_))));
    }

    #[test]
    fn load_roster_parses_members() {
        let dir = std::env::temp_dir().join("brandgen-roster-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("one.json");
        fs::write(
            &path,
            r#"[{"name":"Test Person","role":"Tester","personal_phone":null,
                 "business_phone":"0100 000 000","email_user":"test"}]"#,
        )
        .unwrap();
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster[0].name, "Test Person");
        assert!(roster[0].personal_phone.is_none());
    }
}
