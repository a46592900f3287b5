use chrono::NaiveDate;

use crate::changelog::{Changelog, Section};

const FIXED_BUGS: &str = "**Fixed bugs**";
const IMPLEMENTED_ENHANCEMENTS: &str = "**Implemented enhancements**";

/// Renders the markdown fragment for one milestone.
///
/// The version header is always present; a section is emitted only when it has
/// entries, followed by a blank line.
pub fn render_changelog(milestone: &str, date: NaiveDate, changelog: &Changelog) -> String {
    let mut out = format!("## Version {milestone} ({})\n\n", date.format("%Y-%m-%d"));
    push_section(&mut out, FIXED_BUGS, &changelog.bugs);
    push_section(&mut out, IMPLEMENTED_ENHANCEMENTS, &changelog.enhancements);
    out
}

fn push_section(out: &mut String, heading: &str, section: &Section) {
    if section.is_empty() {
        return;
    }

    out.push_str(heading);
    out.push_str("\n\n");
    for entry in section.iter() {
        out.push_str(&entry.display_line);
        out.push('\n');
    }
    out.push('\n');
}
