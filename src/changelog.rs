use crate::github::issues::Issue;

/// Labels that drive classification.
pub mod labels {
    pub const BUG: &str = "bug";
    pub const ENHANCEMENT: &str = "enhancement";
    pub const SKIP: &str = "skip-changelog";
}

/// A classified issue, rendered as one changelog line.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedEntry {
    pub issue_number: u64,
    pub display_line: String,
}

impl ClassifiedEntry {
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            issue_number: issue.number,
            display_line: format!("  - {} [#{}]", issue.title, issue.number),
        }
    }
}

/// Insertion-ordered map of entries keyed by issue number.
///
/// Upserting an existing number replaces its line in place. Removing a number
/// keeps the order of the rest, and inserting it again appends it at the end.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    entries: Vec<ClassifiedEntry>,
}

impl Section {
    pub fn upsert(&mut self, entry: ClassifiedEntry) {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.issue_number == entry.issue_number)
        {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn remove(&mut self, issue_number: u64) -> Option<ClassifiedEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.issue_number == issue_number)?;
        Some(self.entries.remove(position))
    }

    #[cfg(test)]
    pub fn contains(&self, issue_number: u64) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.issue_number == issue_number)
    }

    #[cfg(test)]
    pub fn numbers(&self) -> Vec<u64> {
        self.entries.iter().map(|entry| entry.issue_number).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassifiedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Running bug and enhancement sections for one milestone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Changelog {
    pub bugs: Section,
    pub enhancements: Section,
}

impl Changelog {
    /// Merges one page of issues into the sections, in API order.
    ///
    /// Pull requests are skipped. Labels are applied in the order given:
    /// `bug` and `enhancement` upsert into their section, and `skip-changelog`
    /// drops the issue from both sections and ends inspection of that issue.
    /// An issue labelled both `bug` and `enhancement` lands in both sections.
    pub fn classify_page(&mut self, issues: &[Issue]) {
        for issue in issues.iter().filter(|issue| !issue.is_pull_request) {
            for label in &issue.labels {
                match label.as_str() {
                    labels::BUG => self.bugs.upsert(ClassifiedEntry::from_issue(issue)),
                    labels::ENHANCEMENT => self
                        .enhancements
                        .upsert(ClassifiedEntry::from_issue(issue)),
                    labels::SKIP => {
                        self.bugs.remove(issue.number);
                        self.enhancements.remove(issue.number);
                        break;
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn total_count(&self) -> usize {
        self.bugs.len() + self.enhancements.len()
    }
}
