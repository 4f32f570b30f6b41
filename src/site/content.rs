//! Landing page copy.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::ui::Section;

/// One card in the services grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const SERVICES: [Service; 5] = [
    Service {
        icon: "zap",
        title: "AI Automation",
        description: "Transform manual tasks into intelligent automated systems.",
    },
    Service {
        icon: "message-square",
        title: "AI Chatbots",
        description: "24/7 customer support, lead-generation bots, WhatsApp bots, and more.",
    },
    Service {
        icon: "bot",
        title: "AI Strategy & Consulting",
        description: "Identify the right AI tools and build a clear automation roadmap.",
    },
    Service {
        icon: "book-open",
        title: "AI Training",
        description: "Practical training for teams and individuals, simple, clear, and effective.",
    },
    Service {
        icon: "file-text",
        title: "AI Document Systems",
        description: "Automate document processing and knowledge management.",
    },
];

const BENEFITS: [&str; 5] = [
    "Professional corporate quality",
    "Affordable for all business sizes",
    "Fast and reliable delivery",
    "End-to-end support",
    "Modern & future-proof solutions",
];

const ABOUT: [&str; 2] = [
    "Excelsior AI Solutions is a modern, tech-focused consultancy helping businesses unlock the power of AI. We specialize in practical solutions that save time, reduce costs, and drive growth.",
    "Our mission is to make advanced AI technology accessible and practical for businesses of all sizes.",
];

/// Everything the page template needs besides per-request state.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub contact_email: String,
    pub phone: String,
    /// `tel:` link target, digits and leading `+` only.
    pub phone_href: String,
    pub sections: Vec<&'static str>,
    pub services: Vec<Service>,
    pub benefits: Vec<&'static str>,
    pub about: Vec<&'static str>,
}

impl SiteContent {
    /// Build the page content from site configuration.
    pub fn from_config(site: &SiteConfig) -> Self {
        Self {
            name: site.name.clone(),
            tagline: site.tagline.clone(),
            description: site.description.clone(),
            contact_email: site.contact_email.clone(),
            phone: site.phone.clone(),
            phone_href: phone_href(&site.phone),
            sections: Section::ALL.iter().map(Section::id).collect(),
            services: SERVICES.to_vec(),
            benefits: BENEFITS.to_vec(),
            about: ABOUT.to_vec(),
        }
    }

    /// Short brand name for the navigation bar.
    pub fn short_name(&self) -> &str {
        self.name.strip_suffix(" Solutions").unwrap_or(&self.name)
    }
}

fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .enumerate()
        .filter(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '+'))
        .map(|(_, c)| c)
        .collect()
}
