use serde::{Serialize, Deserialize};
use crate::types::{Project, Profile, SocialLink, LinkButton};

/// Everything the page can swap without rebuilding the wasm module: the
/// storage slot, the admin secret, the decorative tuning knobs and the
/// static link data. The host passes this as a plain JS object at engine
/// construction; any missing field keeps its default.
///
/// The secret lives here so it is at least injected rather than compiled
/// in, but it still reaches the client in plain text. This gate is a
/// convenience latch, not access control.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EngineConfig {
    pub storage_key: String,
    pub admin_secret: String,
    /// Particle population is floor(surface area / this divisor).
    pub star_density: f64,
    /// Alpha of the per-frame fade fill that produces the motion trail.
    pub trail_alpha: f64,
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
    pub link_buttons: Vec<LinkButton>,
    pub seed_projects: Vec<Project>,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            storage_key: "linktree-projects".to_string(),
            admin_secret: "admin123".to_string(),
            star_density: 3000.0,
            trail_alpha: 0.15,
            profile: Profile {
                name: "Soumik Biswas".to_string(),
                bio: "full time coder, part time editor".to_string(),
                avatar_url: "/assets/avatar.png".to_string(),
            },
            social_links: default_social_links(),
            link_buttons: default_link_buttons(),
            seed_projects: default_projects(),
        }
    }
}

fn default_social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "LinkedIn".to_string(),
            url: "https://linkedin.com/in/soumikpaul".to_string(),
            icon: "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z".to_string(),
        },
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/soumikk01".to_string(),
            icon: "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12".to_string(),
        },
        SocialLink {
            name: "YouTube".to_string(),
            url: "https://youtube.com/@soumikpaul".to_string(),
            icon: "M23.498 6.186a3.016 3.016 0 0 0-2.122-2.136C19.505 3.545 12 3.545 12 3.545s-7.505 0-9.377.505A3.017 3.017 0 0 0 .502 6.186C0 8.07 0 12 0 12s0 3.93.502 5.814a3.016 3.016 0 0 0 2.122 2.136c1.871.505 9.376.505 9.376.505s7.505 0 9.377-.505a3.015 3.015 0 0 0 2.122-2.136C24 15.93 24 12 24 12s0-3.93-.502-5.814zM9.545 15.568V8.432L15.818 12l-6.273 3.568z".to_string(),
        },
        SocialLink {
            name: "Instagram".to_string(),
            url: "https://instagram.com/logcos2x".to_string(),
            icon: "M12 0C8.74 0 8.333.015 7.053.072 5.775.132 4.905.333 4.14.63c-.789.306-1.459.717-2.126 1.384S.935 3.35.63 4.14C.333 4.905.131 5.775.072 7.053.012 8.333 0 8.74 0 12s.015 3.667.072 4.947c.06 1.277.261 2.148.558 2.913.306.788.717 1.459 1.384 2.126.667.666 1.336 1.079 2.126 1.384.766.296 1.636.499 2.913.558C8.333 23.988 8.74 24 12 24s3.667-.015 4.947-.072c1.277-.06 2.148-.262 2.913-.558.788-.306 1.459-.718 2.126-1.384.666-.667 1.079-1.335 1.384-2.126.296-.765.499-1.636.558-2.913.06-1.28.072-1.687.072-4.947s-.015-3.667-.072-4.947c-.06-1.277-.262-2.149-.558-2.913-.306-.789-.718-1.459-1.384-2.126C21.319 1.347 20.651.935 19.86.63c-.765-.297-1.636-.499-2.913-.558C15.667.012 15.26 0 12 0z".to_string(),
        },
    ]
}

fn default_link_buttons() -> Vec<LinkButton> {
    vec![
        LinkButton { name: "LinkedIn".to_string(), url: "https://linkedin.com/in/soumikpaul".to_string() },
        LinkButton { name: "GitHub".to_string(), url: "https://github.com/soumikk01".to_string() },
        LinkButton { name: "YouTube".to_string(), url: "https://youtube.com/@soumikpaul".to_string() },
        LinkButton { name: "Instagram Editing Page".to_string(), url: "https://instagram.com/logcos2x".to_string() },
    ]
}

pub fn default_projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            name: "Portfolio Website".to_string(),
            description: "A modern portfolio website built with React and animated backgrounds.".to_string(),
            tech: vec!["React".to_string(), "CSS3".to_string(), "Vite".to_string()],
            url: "https://github.com/soumikk01/My_Portfolio".to_string(),
            demo: "#".to_string(),
        },
        Project {
            id: "2".to_string(),
            name: "Exam Portal".to_string(),
            description: "Student examination portal with QR code integration and schedule management.".to_string(),
            tech: vec!["PHP".to_string(), "MySQL".to_string(), "JavaScript".to_string()],
            url: "https://github.com/soumikk01".to_string(),
            demo: "#".to_string(),
        },
        Project {
            id: "3".to_string(),
            name: "Video Editor Projects".to_string(),
            description: "Professional video editing and motion graphics portfolio.".to_string(),
            tech: vec!["After Effects".to_string(), "Premiere Pro".to_string()],
            url: "https://youtube.com/@soumikpaul".to_string(),
            demo: "#".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: EngineConfig = serde_json::from_str(r#"{"admin_secret": "hunter2"}"#).unwrap();
        assert_eq!(config.admin_secret, "hunter2");
        assert_eq!(config.storage_key, "linktree-projects");
        assert_eq!(config.seed_projects.len(), 3);
    }

    #[test]
    fn default_seed_list_has_unique_ids() {
        let seeds = default_projects();
        for (i, a) in seeds.iter().enumerate() {
            for b in &seeds[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
