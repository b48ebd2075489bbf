//! Fixed demo records inserted by the seed operation, in insertion order.

use crate::models::{
    Achievement, Capsule, Era, EraTheme, GlobalStyles, Profile, ProfileLink, Project,
    ProjectMedia, Skill, TimelineEntry,
};

/// Glow level of the seeded global styles.
pub const SEED_GLOW: f64 = 0.7;

fn era(key: &str, name: &str, theme: EraTheme, description: &str) -> Era {
    Era {
        key: key.to_string(),
        name: name.to_string(),
        theme,
        description: Some(description.to_string()),
        colors: None,
        background_media: None,
    }
}

pub fn eras() -> Vec<Era> {
    vec![
        era(
            "ancient",
            "Ancient Civilization Era",
            EraTheme::Ancient,
            "Desert ruins under golden sunlight.",
        ),
        era(
            "medieval",
            "Medieval Arcane Era",
            EraTheme::Medieval,
            "Arcane library of glowing runes.",
        ),
        era(
            "industrial",
            "Industrial Revolution",
            EraTheme::Industrial,
            "Steam, gears and copper pipes.",
        ),
        era(
            "cyber",
            "Cyber Age (2080)",
            EraTheme::Cyber,
            "Neon holographic interfaces.",
        ),
        era(
            "cosmic",
            "Cosmic Future",
            EraTheme::Cosmic,
            "Deep space and energy spheres.",
        ),
    ]
}

fn project(
    title: &str,
    era_key: &str,
    subtitle: &str,
    description: &str,
    tech_stack: &[&str],
) -> Project {
    Project {
        title: title.to_string(),
        era_key: era_key.to_string(),
        subtitle: Some(subtitle.to_string()),
        description: Some(description.to_string()),
        problem: None,
        solution: None,
        result: None,
        tech_stack: tech_stack.iter().map(|t| t.to_string()).collect(),
        github: None,
        live_url: None,
        media: None,
        showcase_data: None,
    }
}

pub fn projects() -> Vec<Project> {
    let solar = Project {
        problem: Some("Scattered star data.".to_string()),
        solution: Some("Unified visual cartography.".to_string()),
        result: Some("Faster insights.".to_string()),
        media: Some(ProjectMedia {
            image: Some(String::new()),
            video: Some(String::new()),
            model: Some(String::new()),
        }),
        ..project(
            "Solar Cartographer",
            "ancient",
            "Mapping constellations in desert skies",
            "A data-vis project styled as floating artifacts.",
            &["D3.js", "Python"],
        )
    };

    vec![
        solar,
        project(
            "Grimoire Engine",
            "medieval",
            "Generative spellbook UI",
            "Floating spellbooks reveal interactive pages.",
            &["React", "Framer Motion"],
        ),
        project(
            "CopperWorks",
            "industrial",
            "Blueprint renderer",
            "Mechanical blueprints unfold with details.",
            &["Three.js", "Node"],
        ),
        project(
            "Neon Nexus",
            "cyber",
            "Holographic dashboard",
            "Glowing tiles materialize project windows.",
            &["React", "WebGL"],
        ),
        project(
            "Cosmic Lattice",
            "cosmic",
            "Orbital knowledge base",
            "Energy spheres open cosmic info panels.",
            &["Three.js", "GSAP"],
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        ("React", 90, "Frontend", "Atom"),
        ("Three.js", 80, "3D", "Cube"),
        ("FastAPI", 85, "Backend", "Server"),
    ]
    .into_iter()
    .map(|(name, level, category, icon)| Skill {
        name: name.to_string(),
        level,
        category: category.to_string(),
        icon: Some(icon.to_string()),
    })
    .collect()
}

pub fn achievements() -> Vec<Achievement> {
    vec![Achievement {
        title: "Hackathon Winner".to_string(),
        description: Some("Built an AR prototype in 24h".to_string()),
        year: Some(2023),
        certificate_url: None,
        capsule: Capsule::Orbit,
    }]
}

pub fn profile() -> Profile {
    let entry = |year: i32, title: &str, text: &str| TimelineEntry {
        year: Some(year),
        title: Some(title.to_string()),
        text: Some(text.to_string()),
    };
    let link = |label: &str, url: &str| ProfileLink {
        label: Some(label.to_string()),
        url: Some(url.to_string()),
    };

    Profile {
        name: "The Time Traveler".to_string(),
        role: "Creative Technologist".to_string(),
        photo_url: Some(String::new()),
        bio: Some("Jumping across eras to craft immersive experiences.".to_string()),
        timeline: vec![
            entry(2018, "First Expedition", "Discovered the Ancient Codex"),
            entry(2022, "Cyber Age", "Built neon universes"),
        ],
        links: vec![
            link("GitHub", "https://github.com/"),
            link("LinkedIn", "https://linkedin.com/"),
        ],
    }
}

pub fn styles() -> GlobalStyles {
    GlobalStyles::with_glow(SEED_GLOW)
}
