/// Sections of the page, each reachable through its fragment anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Expertise,
    Experience,
    Education,
    About,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::Expertise,
        Section::Experience,
        Section::Education,
        Section::About,
        Section::Contact,
    ];

    /// Links in the header and the mobile menu. Contact is rendered separately
    /// as the call-to-action button.
    pub const HEADER: [Section; 4] = [
        Section::Home,
        Section::Expertise,
        Section::Experience,
        Section::Education,
    ];

    pub const FOOTER: [Section; 5] = [
        Section::Home,
        Section::Expertise,
        Section::Experience,
        Section::Education,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Expertise => "expertise",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Expertise => "Expertise",
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }

    /// Heading style used in the nav and the section titles, e.g. `// expertise`.
    pub fn code_label(self) -> String {
        match self {
            Section::About => "// about me".to_string(),
            s => format!("// {}", s.anchor()),
        }
    }
}

/// Visibility of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu {
    open: bool,
}

impl Menu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Called when any navigation link is activated.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!Menu::default().is_open());
    }

    #[test]
    fn test_menu_toggle_and_link_close() {
        let mut menu = Menu::default();
        menu.toggle();
        assert!(menu.is_open());

        // any nav link closes it
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_close_when_already_closed() {
        let mut menu = Menu::default();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_anchors() {
        let anchors = Section::ALL.map(Section::anchor);
        assert_eq!(
            anchors,
            ["home", "expertise", "experience", "education", "about", "contact"]
        );
        assert_eq!(Section::Contact.href(), "#contact");
        assert_eq!(Section::Expertise.code_label(), "// expertise");
        assert_eq!(Section::About.code_label(), "// about me");
    }

    #[test]
    fn test_footer_skips_about() {
        assert!(!Section::FOOTER.contains(&Section::About));
        assert!(Section::FOOTER.contains(&Section::Contact));
        assert!(!Section::HEADER.contains(&Section::Contact));
    }
}
