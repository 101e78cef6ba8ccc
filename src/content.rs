// Page copy. Edit freely; the interactive parts only rely on the ids and
// class names used in the components.

pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { id: "home", title: "Home" },
    Section { id: "about", title: "About" },
    Section { id: "skills", title: "Skills" },
    Section { id: "projects", title: "Projects" },
    Section { id: "experience", title: "Experience" },
    Section { id: "contact", title: "Contact" },
];

pub const SECTION_IDS: &[&str] = &["home", "about", "skills", "projects", "experience", "contact"];

pub struct AboutBox {
    pub heading: &'static str,
    pub body: &'static str,
}

pub const ABOUT_BOXES: &[AboutBox] = &[
    AboutBox {
        heading: "Background",
        body: "Computer science graduate who enjoys building tools people actually use.",
    },
    AboutBox {
        heading: "Focus",
        body: "Web applications, backend services and the glue between them.",
    },
    AboutBox {
        heading: "Outside work",
        body: "Open source, long walks and far too many side projects.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Languages", items: &["Rust", "TypeScript", "Python", "SQL"] },
    Skill { name: "Frontend", items: &["Yew", "React", "HTML", "CSS"] },
    Skill { name: "Backend", items: &["Axum", "PostgreSQL", "Redis", "REST"] },
    Skill { name: "Tooling", items: &["Git", "Docker", "Linux", "CI/CD"] },
];

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Task Tracker",
        summary: "Collaborative kanban board with offline sync.",
        tags: &["Rust", "WASM"],
        link: "https://github.com/",
    },
    Project {
        title: "Weather Dashboard",
        summary: "Forecasts and historical charts for any city.",
        tags: &["TypeScript", "Charts"],
        link: "https://github.com/",
    },
    Project {
        title: "Link Shortener",
        summary: "Tiny URL service with click analytics.",
        tags: &["Axum", "PostgreSQL"],
        link: "https://github.com/",
    },
    Project {
        title: "Recipe Finder",
        summary: "Search recipes by what is already in the fridge.",
        tags: &["Python", "API"],
        link: "https://github.com/",
    },
];

pub struct TimelineItem {
    pub period: &'static str,
    pub role: &'static str,
    pub place: &'static str,
    pub detail: &'static str,
}

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        period: "2023 - now",
        role: "Software Engineer",
        place: "Example Corp",
        detail: "Building internal platforms and customer-facing web apps.",
    },
    TimelineItem {
        period: "2021 - 2023",
        role: "Junior Developer",
        place: "Startup Studio",
        detail: "Shipped features across frontend and backend.",
    },
    TimelineItem {
        period: "2017 - 2021",
        role: "BSc Computer Science",
        place: "State University",
        detail: "Focus on distributed systems and programming languages.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_match_sections() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, SECTION_IDS);
    }
}
