#[derive(PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

#[derive(PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Brand Strategy",
        summary: "Positioning, naming and messaging that give your company a voice people remember.",
        icon: "◎",
    },
    Service {
        title: "Visual Identity",
        summary: "Logos, type systems and colour palettes built to work from a favicon to a billboard.",
        icon: "◆",
    },
    Service {
        title: "Web Design",
        summary: "Fast, responsive sites that look as deliberate on a phone as they do on a 27\" display.",
        icon: "▣",
    },
    Service {
        title: "Campaigns",
        summary: "Launch and seasonal campaigns planned, produced and measured end to end.",
        icon: "✦",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "They understood what we were trying to say before we did.",
        author: "Maya Lindqvist",
        role: "Founder, Halden Coffee",
    },
    Testimonial {
        quote: "Our new site doubled newsletter signups in the first month.",
        author: "Tomás Reyes",
        role: "Marketing Lead, Fieldnote",
    },
    Testimonial {
        quote: "Calm, precise and always a week ahead of schedule.",
        author: "Priya Natarajan",
        role: "COO, Brightwell Health",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Identity projects run six to eight weeks. Websites usually take eight to twelve, depending on content.",
    },
    FaqEntry {
        question: "Do you work with early-stage startups?",
        answer: "Yes. We offer a fixed-scope starter package for teams that need a solid foundation before their first raise.",
    },
    FaqEntry {
        question: "Can you take over an existing brand?",
        answer: "Often. We start with an audit of what already works and keep as much of it as we can.",
    },
    FaqEntry {
        question: "What happens after launch?",
        answer: "Every project includes thirty days of support, and most clients stay on a light monthly retainer.",
    },
];

pub const CONTACT_EMAIL: &str = "hello@northlight.studio";
pub const CONTACT_PHONE: &str = "+44 20 7946 0321";
pub const CONTACT_ADDRESS: &str = "14 Harbour Lane, Bristol BS1 4RN";
