//! Email signature batch
//!
//! One 650px-wide signature per roster member, captured at 3x. Members
//! without a personal mobile get a single business-number row; everyone
//! else gets the Personal/Business split row.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::capture::{Capture, CaptureConfig, Viewport};
use crate::config::{BrandConfig, TeamMember};
use crate::error::Result;

/// Element captured from the rendered page.
const SELECTOR: &str = ".sig";

const PHONE_SVG: &str = r#"<svg viewBox="0 0 14 14"><path d="M8.5 2.5c2.5 0 3.5 1 3.5 3.5m-2-2.5c1 0 1.5.5 1.5 1.5M3.5 6c.8 1.8 2.7 3.7 4.5 4.5l1.5-1.5c.3-.3.8-.4 1.2-.2l2 .9c.5.2.8.7.8 1.2v1.6c0 .5-.5 1-1 1C5.5 13 1 8.5 1 3c0-.5.5-1 1-1h1.6c.5 0 1 .3 1.2.8l.9 2c.2.4.1.9-.2 1.2L4 7.5"/></svg>"#;

const SPLIT_PHONE_ROW: &str = r#"<div class="contact-row">
          {{PHONE_SVG}}
          <span class="phone-label">Personal:</span> {{PERSONAL}} <span class="phone-sep">|</span> <span class="phone-label">Business:</span> {{BUSINESS}}
        </div>"#;

const SINGLE_PHONE_ROW: &str = r#"<div class="contact-row">
          {{PHONE_SVG}}
          {{BUSINESS}}
        </div>"#;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Helvetica Neue', 'Segoe UI', sans-serif;
      background: transparent;
      padding: 0;
      -webkit-font-smoothing: antialiased;
      -moz-osx-font-smoothing: grayscale;
    }
    .sig {
      width: 650px;
      background: #fff;
    }
    .top-stripe {
      height: 5px;
      background: #0a0a0a;
    }
    .main {
      padding: 20px 25px;
      background: #f8f7f5;
    }
    .header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 15px;
      padding-bottom: 15px;
      border-bottom: 2px solid #0a0a0a;
    }
    /* Left side: monogram | person */
    .left-brand {
      display: flex;
      align-items: center;
      gap: 15px;
    }
    .hoc {
      font-weight: 200;
      font-size: 28px;
      letter-spacing: 0.06em;
      color: #0a0a0a;
    }
    .divider {
      width: 2px;
      height: 35px;
      background: #2d2d2d;
    }
    .person {
      text-align: left;
    }
    .person-name {
      font-size: 14px;
      font-weight: 500;
      color: #0a0a0a;
      margin-bottom: 2px;
    }
    .person-role {
      font-size: 10px;
      color: #888;
      font-weight: 400;
    }
    /* Right side: company wordmark */
    .brand-text {
      text-align: right;
    }
    .company {
      font-size: 10px;
      letter-spacing: 0.12em;
      text-transform: uppercase;
      color: #0a0a0a;
      font-weight: 400;
    }
    .tagline {
      font-size: 9px;
      color: #888;
      margin-top: 3px;
      font-weight: 300;
    }
    .body {
      display: flex;
      justify-content: space-between;
      align-items: flex-end;
    }
    .contacts {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }
    .contact-row {
      display: flex;
      align-items: center;
      font-size: 11px;
      color: #333;
    }
    .contact-row svg {
      width: 14px;
      height: 14px;
      margin-right: 10px;
      fill: none;
      stroke: #888;
      stroke-width: 1.5;
      flex-shrink: 0;
    }
    .phone-label {
      color: #888;
      font-size: 9px;
      margin-right: 3px;
    }
    .phone-sep {
      color: #ccc;
      margin: 0 8px;
    }
    .socials {
      display: flex;
      gap: 6px;
    }
    .social-icon {
      width: 28px;
      height: 28px;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      background: #0a0a0a;
      color: #fff;
      border-radius: 50%;
      font-size: 11px;
      text-decoration: none;
      font-weight: 400;
    }
    .bottom-stripe {
      height: 4px;
      background: #8a8a8a;
    }
    .notice {
      font-size: 9px;
      color: #999;
      line-height: 1.6;
      padding: 12px 25px;
      background: #fafafa;
      border-top: 1px solid #eee;
    }
    .notice strong {
      color: #666;
    }
  </style>
</head>
<body>
<div class="sig">
  <div class="top-stripe"></div>
  <div class="main">
    <div class="header">
      <div class="left-brand">
        <div class="hoc">{{MONOGRAM}}</div>
        <div class="divider"></div>
        <div class="person">
          <div class="person-name">{{NAME}}</div>
          <div class="person-role">{{ROLE}}</div>
        </div>
      </div>
      <div class="brand-text">
        <div class="company">{{COMPANY}}</div>
        <div class="tagline">{{TAGLINE}}</div>
      </div>
    </div>
    <div class="body">
      <div class="contacts">
        <div class="contact-row">
          <svg viewBox="0 0 14 14"><path d="M2 4l5 3.5L12 4"/><rect x="1.5" y="3" width="11" height="8" rx="1"/></svg>
          {{EMAIL_USER}}@{{DOMAIN}}
        </div>
        {{PHONE_ROW}}
        <div class="contact-row">
          <svg viewBox="0 0 14 14"><circle cx="7" cy="7" r="5"/><path d="M7 4v3l2 1"/></svg>
          {{DOMAIN}}
        </div>
        <div class="contact-row">
          <svg viewBox="0 0 14 14"><path d="M7 1.5c-2.5 0-4 2-4 4 0 3 4 7 4 7s4-4 4-7c0-2-1.5-4-4-4z"/><circle cx="7" cy="5.5" r="1.5"/></svg>
          {{ADDRESS}}
        </div>
      </div>
      <div class="socials">
        <a class="social-icon">in</a>
        <a class="social-icon">f</a>
        <a class="social-icon">X</a>
        <a class="social-icon">&#9678;</a>
      </div>
    </div>
  </div>
  <div class="bottom-stripe"></div>
  <div class="notice">
    <strong>PRIVILEGED AND CONFIDENTIAL:</strong> This email and any attachments are confidential and intended solely for the addressee. If you are not the intended recipient, please notify us immediately and delete this message. Unauthorized disclosure, copying or distribution is strictly prohibited. {{COMPANY}} Ltd.
  </div>
</div>
</body>
</html>"#;

/// Build the signature document for one member.
pub fn build_html(brand: &BrandConfig, member: &TeamMember) -> String {
    let phone_row = match &member.personal_phone {
        Some(personal) => SPLIT_PHONE_ROW
            .replace("{{PHONE_SVG}}", PHONE_SVG)
            .replace("{{PERSONAL}}", personal)
            .replace("{{BUSINESS}}", &member.business_phone),
        None => SINGLE_PHONE_ROW
            .replace("{{PHONE_SVG}}", PHONE_SVG)
            .replace("{{BUSINESS}}", &member.business_phone),
    };

    TEMPLATE
        .replace("{{PHONE_ROW}}", &phone_row)
        .replace("{{MONOGRAM}}", &brand.monogram)
        .replace("{{COMPANY}}", &brand.company)
        .replace("{{TAGLINE}}", &brand.tagline)
        .replace("{{NAME}}", &member.name)
        .replace("{{ROLE}}", &member.role)
        .replace("{{EMAIL_USER}}", &member.email_user)
        .replace("{{DOMAIN}}", &brand.signature_domain)
        .replace("{{ADDRESS}}", &brand.address)
}

/// Render and capture a signature for every roster member; returns the
/// written paths.
pub fn generate(brand: &BrandConfig, roster: &[TeamMember], out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let capture = Capture::new(CaptureConfig {
        viewport: Viewport {
            width: 700,
            height: 500,
        },
        ..Default::default()
    })?;

    let mut written = Vec::new();
    for member in roster {
        let html = build_html(brand, member);
        let png = capture.capture_element(&html, SELECTOR)?;

        let path = out_dir.join(member.signature_filename());
        fs::write(&path, &png)?;
        info!("Created {}", member.signature_filename());
        written.push(path);
    }

    capture.close()?;
    info!("{} signatures written to {}", written.len(), out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_roster;

    #[test]
    fn member_with_personal_phone_gets_split_row() {
        let brand = BrandConfig::default();
        let roster = default_roster();
        let aaron = roster.iter().find(|m| m.email_user == "aaron").unwrap();
        let html = build_html(&brand, aaron);
        assert!(html.contains("Personal:"));
        assert!(html.contains("07939 983 477"));
        assert!(html.contains("0203 715 5892"));
    }

    #[test]
    fn member_without_personal_phone_gets_single_row() {
        let brand = BrandConfig::default();
        let roster = default_roster();
        let gayathri = roster.iter().find(|m| m.email_user == "gayathri").unwrap();
        let html = build_html(&brand, gayathri);
        assert!(!html.contains("Personal:"));
        assert!(html.contains("0203 715 5892"));
    }

    #[test]
    fn only_phone_row_differs_between_members() {
        let brand = BrandConfig::default();
        let mut with_phone = default_roster()
            .into_iter()
            .find(|m| m.email_user == "gayathri")
            .unwrap();
        let without = build_html(&brand, &with_phone);
        with_phone.personal_phone = Some("07000 000 000".to_string());
        let with = build_html(&brand, &with_phone);

        // Same document outside the phone row
        assert!(with.contains("Gayathri Charu"));
        assert!(without.contains("Gayathri Charu"));
        let diff: Vec<(&str, &str)> = with
            .lines()
            .zip(without.lines())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(diff.len(), 1, "exactly one markup line differs");
        assert!(diff[0].0.contains("Personal:"));
    }

    #[test]
    fn html_is_fully_substituted() {
        let brand = BrandConfig::default();
        for member in default_roster() {
            let html = build_html(&brand, &member);
            assert!(!html.contains("{{"), "unreplaced token for {}", member.name);
            assert!(html.contains(&format!("{}@houseofclarence.uk", member.email_user)));
        }
    }
}
