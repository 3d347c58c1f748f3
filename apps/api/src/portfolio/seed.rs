//! The seed record loaded on first start and restored by `reset`.

use crate::models::portfolio::{
    default_section_order, Achievement, Education, Experience, PortfolioData, Project, Socials,
    ThemeMode, ThemeSettings,
};

pub fn seed_portfolio() -> PortfolioData {
    PortfolioData {
        name: "Your Name".to_string(),
        tagline: "Futuristic Developer & Digital Artisan".to_string(),
        avatar_url: "https://i.pravatar.cc/150?u=a042581f4e29026704d".to_string(),
        bio: "A passionate creator building amazing things for the web of tomorrow. \
              This is your chance to shine and tell your story."
            .to_string(),
        passion: "I am driven by a passion for creating intuitive, beautiful, and high-performance \
                  web experiences. I thrive on solving complex problems and turning innovative ideas into reality."
            .to_string(),
        contact_email: "your.email@example.com".to_string(),
        skills: [
            "React",
            "TypeScript",
            "Node.js",
            "UI/UX Design",
            "Framer Motion",
            "Next.js",
            "GraphQL",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        socials: Socials {
            github: "https://github.com".to_string(),
            linkedin: "https://linkedin.com".to_string(),
            twitter: "https://twitter.com".to_string(),
        },
        education: vec![Education {
            id: "edu1".to_string(),
            institution: "Institute of Technology".to_string(),
            degree: "B.S. in Cybernetics".to_string(),
            duration: "2020 - 2024".to_string(),
        }],
        experience: vec![Experience {
            id: "exp1".to_string(),
            role: "Frontend Engineer".to_string(),
            company: "Future Systems Corp.".to_string(),
            duration: "2024 - Present".to_string(),
            description: "Engineered and maintained hyper-responsive web applications using \
                          bleeding-edge technologies, boosting user engagement by 30%."
                .to_string(),
        }],
        projects: vec![
            Project {
                id: "proj1".to_string(),
                name: "Project Neo".to_string(),
                description: "A revolutionary app that changes the way people interact with \
                              decentralized technology."
                    .to_string(),
                image_url: "https://picsum.photos/seed/neo/600/400".to_string(),
                link: "#".to_string(),
            },
            Project {
                id: "proj2".to_string(),
                name: "Project Cygnus".to_string(),
                description: "An innovative platform for creative professionals to showcase \
                              their work in immersive 3D."
                    .to_string(),
                image_url: "https://picsum.photos/seed/cygnus/600/400".to_string(),
                link: "#".to_string(),
            },
        ],
        achievements: vec![
            Achievement {
                id: "ach1".to_string(),
                title: "Innovation Award 2024".to_string(),
                description: "Awarded for developing a novel UI component library that increased \
                              development speed by 40%."
                    .to_string(),
            },
            Achievement {
                id: "ach2".to_string(),
                title: "Global Hackathon Winner".to_string(),
                description: "First place in the annual global hackathon for creating a real-time \
                              data visualization tool for climate change."
                    .to_string(),
            },
        ],
        theme_settings: ThemeSettings {
            template_id: "futuristic".to_string(),
            primary_color: "#22d3ee".to_string(),
            font_pair: "orbitron-poppins".to_string(),
            mode: ThemeMode::Dark,
        },
        section_order: default_section_order(),
    }
}
