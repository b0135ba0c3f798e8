//! The fixed set of page sections and the state that says which one is in focus.

/// Identifies one of the content cards. Declaration order is page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Tech,
    Project,
    Contact,
}

impl SectionId {
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Tech => "tech",
            SectionId::Project => "project",
            SectionId::Contact => "contact",
        }
    }

    /// Label as shown in the navigation bar.
    pub fn nav_label(self) -> String {
        self.label().chars().filter(|c| !c.is_whitespace()).collect()
    }
}

/// Where and in which colour the large vertical caption sits while a section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionStyle {
    pub top: &'static str,
    pub left: &'static str,
    pub color: &'static str,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            top: "50%",
            left: "3%",
            color: "#ffffff",
        }
    }
}

impl SectionStyle {
    pub fn to_css(&self) -> String {
        format!(
            "top: {}; left: {}; color: {};",
            self.top, self.left, self.color
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub height: &'static str,
    pub style: SectionStyle,
}

pub const SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::About,
        height: "80vh",
        style: SectionStyle { top: "10%", left: "3%", color: "#ff5733" },
    },
    Section {
        id: SectionId::Tech,
        height: "88vh",
        style: SectionStyle { top: "35%", left: "3%", color: "#33ff57" },
    },
    Section {
        id: SectionId::Project,
        height: "89vh",
        style: SectionStyle { top: "52%", left: "3%", color: "#5733ff" },
    },
    Section {
        id: SectionId::Contact,
        height: "95vh",
        style: SectionStyle { top: "79%", left: "3%", color: "#f5a623" },
    },
];

/// Position of a section in page order.
pub fn position_of(id: SectionId) -> Option<usize> {
    SECTIONS.iter().position(|section| section.id == id)
}

/// Caption style for a section, falling back to the default when the table has no entry.
pub fn style_for(id: SectionId) -> SectionStyle {
    SECTIONS
        .iter()
        .find(|section| section.id == id)
        .map(|section| section.style)
        .unwrap_or_default()
}

/// Which section is in focus. Starts out as `Initial` until the first
/// visibility event arrives, so nothing is highlighted on first paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Initial,
    Section(SectionId),
}

impl ActiveSection {
    pub fn section(self) -> Option<SectionId> {
        match self {
            ActiveSection::Initial => None,
            ActiveSection::Section(id) => Some(id),
        }
    }

    /// Page position, with the initial state sitting just before the first section.
    pub fn position(self) -> isize {
        self.section()
            .and_then(position_of)
            .map_or(-1, |index| index as isize)
    }

    pub fn is(self, id: SectionId) -> bool {
        self.section() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_in_page_order() {
        let order: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            order,
            vec![SectionId::About, SectionId::Tech, SectionId::Project, SectionId::Contact]
        );
    }

    #[test]
    fn initial_state_sits_before_the_first_section() {
        assert_eq!(ActiveSection::Initial.position(), -1);
        assert_eq!(ActiveSection::Section(SectionId::Project).position(), 2);
        assert!(!ActiveSection::Initial.is(SectionId::About));
    }

    #[test]
    fn style_lookup_uses_the_section_table() {
        assert_eq!(style_for(SectionId::Tech).color, "#33ff57");
        assert_eq!(style_for(SectionId::Contact).top, "79%");
    }

    #[test]
    fn nav_label_strips_whitespace() {
        assert_eq!(SectionId::Project.nav_label(), "project");
        assert!(SECTIONS.iter().all(|s| !s.id.nav_label().contains(' ')));
    }
}
