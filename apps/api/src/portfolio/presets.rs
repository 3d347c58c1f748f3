//! Career presets: ready-made content for common profiles.
//!
//! Applying a preset replaces every content field and the section order but keeps
//! the current theme settings. Item ids are regenerated per list (`p1`, `p2`, ...),
//! which keeps them unique within each list.

use serde::Serialize;

use crate::models::portfolio::{
    Achievement, Education, Experience, PortfolioData, Project, SectionKey, Socials,
};

const DEFAULT_AVATAR: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&auto=format&fit=crop&q=60";
const FEMALE_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&auto=format&fit=crop&q=60";
const CREATIVE_AVATAR: &str =
    "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=400&auto=format&fit=crop&q=60";

use SectionKey::{Achievements, Education as Edu, Experience as Exp, Passion, Profile, Projects, Skills};

/// Static preset definition. Tuples keep the table readable:
/// education `(institution, degree, duration)`, experience
/// `(role, company, duration, description)`, projects `(name, description, image)`,
/// achievements `(title, description)`, socials `[github, linkedin, twitter]`.
struct PresetDef {
    key: &'static str,
    label: &'static str,
    name: &'static str,
    tagline: &'static str,
    avatar_url: &'static str,
    bio: &'static str,
    passion: &'static str,
    contact_email: &'static str,
    skills: &'static [&'static str],
    socials: [&'static str; 3],
    education: &'static [(&'static str, &'static str, &'static str)],
    experience: &'static [(&'static str, &'static str, &'static str, &'static str)],
    projects: &'static [(&'static str, &'static str, &'static str)],
    achievements: &'static [(&'static str, &'static str)],
    section_order: [SectionKey; 7],
}

static PRESETS: &[PresetDef] = &[
    PresetDef {
        key: "coder",
        label: "Software Developer",
        name: "Alex Dev",
        tagline: "Full Stack Developer & Open Source Enthusiast",
        avatar_url: DEFAULT_AVATAR,
        bio: "I build accessible, pixel-perfect, and performant web applications. Experienced in the MERN stack and cloud architecture, I turn coffee into code.",
        passion: "Building scalable software that solves real-world problems.",
        contact_email: "alex@dev.com",
        skills: &["React", "TypeScript", "Node.js", "AWS", "Docker", "GraphQL", "PostgreSQL"],
        socials: ["https://github.com", "https://linkedin.com", "https://twitter.com"],
        education: &[("Tech University", "B.Tech in Computer Science", "2020 - 2024")],
        experience: &[("Software Engineer", "TechFlow Systems", "2024 - Present", "Developing microservices and optimizing frontend performance.")],
        projects: &[
            ("E-Commerce Dashboard", "A comprehensive analytics dashboard for online retailers using Next.js.", "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800"),
            ("Chat Application", "Real-time messaging app with end-to-end encryption.", "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Hackathon Winner", "1st Place in National CodeFest 2023")],
        section_order: [Profile, Skills, Projects, Exp, Edu, Achievements, Passion],
    },
    PresetDef {
        key: "civil",
        label: "Civil Engineer",
        name: "Jordan Build",
        tagline: "Civil Engineer | Structural Design Specialist",
        avatar_url: DEFAULT_AVATAR,
        bio: "Dedicated Civil Engineer with a strong foundation in structural analysis and project management. Passionate about sustainable infrastructure and urban planning.",
        passion: "Designing sustainable infrastructure for future generations.",
        contact_email: "jordan@civil.com",
        skills: &["AutoCAD", "Revit", "STAAD.Pro", "Project Management", "Structural Analysis", "Surveying"],
        socials: ["", "https://linkedin.com", ""],
        education: &[("Institute of Technology", "B.E. in Civil Engineering", "2020 - 2024")],
        experience: &[("Site Engineer", "Urban Construct", "2024 - Present", "Supervising site operations and ensuring compliance with safety standards.")],
        projects: &[
            ("Green Bridge Design", "Designed a sustainable pedestrian bridge using eco-friendly materials.", "https://images.unsplash.com/photo-1545558014-8692077e9b5c?auto=format&fit=crop&w=800"),
            ("Smart City Layout", "Proposed an optimized urban layout for traffic reduction.", "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Best Project Award", "Awarded for innovative use of recycled concrete.")],
        section_order: [Profile, Exp, Projects, Skills, Edu, Achievements, Passion],
    },
    PresetDef {
        key: "mechanical",
        label: "Mechanical Engineer",
        name: "Casey Gear",
        tagline: "Mechanical Engineer | CAD & Robotics",
        avatar_url: DEFAULT_AVATAR,
        bio: "Mechanical Engineer passionate about thermodynamics, robotics, and automotive design. Proficient in 3D modeling and simulation.",
        passion: "Innovating machinery to automate and improve efficiency.",
        contact_email: "casey@mech.com",
        skills: &["SolidWorks", "ANSYS", "MATLAB", "3D Printing", "Thermodynamics", "Mechatronics"],
        socials: ["https://github.com", "https://linkedin.com", ""],
        education: &[("State University", "B.Tech in Mechanical Engineering", "2020 - 2024")],
        experience: &[("Design Intern", "AutoMoto Corp", "2023 - 2024", "Assisted in designing engine components and running stress simulations.")],
        projects: &[
            ("Autonomous Rover", "Built a 6-wheel rover capable of terrain mapping.", "https://images.unsplash.com/photo-1535376472810-5d229c65da09?auto=format&fit=crop&w=800"),
            ("Hydraulic Press", "Designed and simulated a high-efficiency hydraulic press system.", "https://images.unsplash.com/photo-1537462713205-e5126e61e302?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Robotics Champion", "Lead the university team to victory in RoboWars.")],
        section_order: [Profile, Skills, Projects, Exp, Edu, Achievements, Passion],
    },
    PresetDef {
        key: "ece",
        label: "Electronics & Communication Engineer",
        name: "Taylor Chip",
        tagline: "Electronics & Communication Engineer | VLSI",
        avatar_url: FEMALE_AVATAR,
        bio: "Electronics Engineer focused on embedded systems and VLSI design. Experience with FPGA programming and IoT solutions.",
        passion: "Connecting the physical world with digital intelligence.",
        contact_email: "taylor@ece.com",
        skills: &["Verilog", "Embedded C", "IoT", "PCB Design", "MATLAB", "Signal Processing"],
        socials: ["https://github.com", "https://linkedin.com", ""],
        education: &[("Tech Institute", "B.E. in ECE", "2020 - 2024")],
        experience: &[("IoT Developer", "SmartHome Inc", "2024 - Present", "Developing firmware for smart sensors and home automation devices.")],
        projects: &[
            ("Smart Agriculture System", "IoT based system to monitor soil moisture and automate irrigation.", "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?auto=format&fit=crop&w=800"),
            ("FPGA Processor", "Designed a simple 8-bit RISC processor on FPGA.", "https://images.unsplash.com/photo-1555664424-778a6902201b?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Paper Publication", "Published research on Wireless Sensor Networks.")],
        section_order: [Profile, Skills, Projects, Exp, Edu, Achievements, Passion],
    },
    PresetDef {
        key: "eee",
        label: "Electrical Engineer",
        name: "Morgan Power",
        tagline: "Electrical Engineer | Power Systems & Renewable Energy",
        avatar_url: DEFAULT_AVATAR,
        bio: "Electrical Engineer with a focus on renewable energy integration and power system analysis. Dedicated to a greener future.",
        passion: "Optimizing energy systems for sustainability.",
        contact_email: "morgan@eee.com",
        skills: &["Circuit Design", "Power Systems", "MATLAB/Simulink", "PLC/SCADA", "Renewable Energy"],
        socials: ["", "https://linkedin.com", ""],
        education: &[("City Engineering College", "B.Tech in EEE", "2020 - 2024")],
        experience: &[("Graduate Trainee", "National Grid", "2024 - Present", "Analyzing grid stability and load flow data.")],
        projects: &[
            ("Solar Inverter Design", "Designed a high-efficiency inverter for residential solar panels.", "https://images.unsplash.com/photo-1509391366360-2e959784a276?auto=format&fit=crop&w=800"),
            ("Electric Vehicle Charger", "Prototyped a fast-charging station for EVs.", "https://images.unsplash.com/photo-1593941707882-a5bba14938c7?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Energy Saver Award", "Designed a system that reduced campus energy consumption by 15%.")],
        section_order: [Profile, Exp, Skills, Projects, Edu, Achievements, Passion],
    },
    PresetDef {
        key: "photography",
        label: "Photographer",
        name: "Jamie Lens",
        tagline: "Visual Storyteller & Photographer",
        avatar_url: CREATIVE_AVATAR,
        bio: "Capturing moments that tell a story. Specializing in portrait, landscape, and street photography with a keen eye for lighting and composition.",
        passion: "Freezing time and emotion through the lens.",
        contact_email: "jamie@studio.com",
        skills: &["Adobe Lightroom", "Photoshop", "Lighting", "Composition", "Visual Storytelling", "Retouching"],
        socials: ["", "", "https://twitter.com"],
        education: &[("Arts Academy", "B.A. in Photography", "2020 - 2023")],
        experience: &[("Freelance Photographer", "Self Employed", "2022 - Present", "Delivering high-quality visual assets for brands and individuals.")],
        projects: &[
            ("Urban Solitude", "A photo series exploring loneliness in big cities.", "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?auto=format&fit=crop&w=800"),
            ("Wild Horizons", "Landscape collection from the Rockies.", "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?auto=format&fit=crop&w=800"),
        ],
        achievements: &[("Photo of the Year", "Featured in National Geographic Traveler.")],
        section_order: [Profile, Projects, Passion, Skills, Exp, Achievements, Edu],
    },
];

/// Catalog entry returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct PresetSummary {
    pub key: &'static str,
    pub label: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
}

pub fn preset_catalog() -> Vec<PresetSummary> {
    PRESETS
        .iter()
        .map(|p| PresetSummary {
            key: p.key,
            label: p.label,
            name: p.name,
            tagline: p.tagline,
        })
        .collect()
}

/// Returns `current` with all content replaced by the preset's, keeping theme
/// settings. `None` if the key is unknown.
pub fn apply_preset(key: &str, current: &PortfolioData) -> Option<PortfolioData> {
    let preset = PRESETS.iter().find(|p| p.key == key)?;

    Some(PortfolioData {
        name: preset.name.to_string(),
        tagline: preset.tagline.to_string(),
        avatar_url: preset.avatar_url.to_string(),
        bio: preset.bio.to_string(),
        passion: preset.passion.to_string(),
        contact_email: preset.contact_email.to_string(),
        skills: preset.skills.iter().map(|s| s.to_string()).collect(),
        socials: Socials {
            github: preset.socials[0].to_string(),
            linkedin: preset.socials[1].to_string(),
            twitter: preset.socials[2].to_string(),
        },
        education: preset
            .education
            .iter()
            .enumerate()
            .map(|(i, (institution, degree, duration))| Education {
                id: format!("ed{}", i + 1),
                institution: institution.to_string(),
                degree: degree.to_string(),
                duration: duration.to_string(),
            })
            .collect(),
        experience: preset
            .experience
            .iter()
            .enumerate()
            .map(|(i, (role, company, duration, description))| Experience {
                id: format!("ex{}", i + 1),
                role: role.to_string(),
                company: company.to_string(),
                duration: duration.to_string(),
                description: description.to_string(),
            })
            .collect(),
        projects: preset
            .projects
            .iter()
            .enumerate()
            .map(|(i, (name, description, image))| Project {
                id: format!("p{}", i + 1),
                name: name.to_string(),
                description: description.to_string(),
                image_url: image.to_string(),
                link: "#".to_string(),
            })
            .collect(),
        achievements: preset
            .achievements
            .iter()
            .enumerate()
            .map(|(i, (title, description))| Achievement {
                id: format!("a{}", i + 1),
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
        theme_settings: current.theme_settings.clone(),
        section_order: preset.section_order.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::is_permutation;
    use crate::portfolio::seed::seed_portfolio;

    #[test]
    fn test_six_presets_in_catalog() {
        let keys: Vec<&str> = preset_catalog().iter().map(|p| p.key).collect();
        assert_eq!(keys, vec!["coder", "civil", "mechanical", "ece", "eee", "photography"]);
    }

    #[test]
    fn test_every_preset_order_is_a_permutation() {
        for p in PRESETS {
            assert!(is_permutation(&p.section_order), "{}", p.key);
        }
    }

    #[test]
    fn test_apply_preset_keeps_theme() {
        let mut current = seed_portfolio();
        current.theme_settings.template_id = "elegant".to_string();
        current.theme_settings.primary_color = "#d4af37".to_string();

        let applied = apply_preset("photography", &current).unwrap();
        assert_eq!(applied.name, "Jamie Lens");
        assert_eq!(applied.theme_settings, current.theme_settings);
        assert_eq!(applied.socials.github, "");
        assert_eq!(applied.section_order[1], SectionKey::Projects);
        assert_eq!(applied.projects[1].id, "p2");
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(apply_preset("astronaut", &seed_portfolio()).is_none());
        assert!(apply_preset("eee", &seed_portfolio()).is_some());
    }
}
