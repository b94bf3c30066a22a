//! Static copy rendered by the page views.

pub(crate) const COMPANY: &str = "Fisker IT";
pub(crate) const CONTACT_EMAIL: &str = "naveen@fiskerit.org";

pub(crate) struct Slide {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) cta: &'static str,
    pub(crate) anchor: &'static str,
}

pub(crate) static SLIDES: [Slide; 3] = [
    Slide {
        title: "Connect Talent with Opportunity",
        description: "We help skilled IT professionals find their perfect role with leading companies like Tech Mahindra, United Therapeutics, and GE Aviation.",
        cta: "Our Story",
        anchor: "about",
    },
    Slide {
        title: "SAP Expertise That Delivers",
        description: "Specialized in SAP solutions with proven success across Finance, CRM, and ABAP development.",
        cta: "Our Clients",
        anchor: "clients",
    },
    Slide {
        title: "Build Your Career",
        description: "Join our team of 20+ contractors working on cutting-edge projects with industry-leading companies.",
        cta: "Join Our Team",
        anchor: "join",
    },
];

pub(crate) struct Stat {
    pub(crate) value: &'static str,
    pub(crate) label: &'static str,
}

pub(crate) static HOME_STATS: [Stat; 4] = [
    Stat { value: "20+", label: "Active Contractors" },
    Stat { value: "6", label: "Projects Delivered" },
    Stat { value: "4", label: "Partner Companies" },
    Stat { value: "90%", label: "Retention Rate" },
];

pub(crate) static CLIENTS: [&str; 4] = [
    "Tech Mahindra",
    "United Therapeutics",
    "GE Aerospace",
    "ERPfixers",
];

pub(crate) struct Job {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) salary: &'static str,
}

pub(crate) static JOBS: [Job; 2] = [
    Job {
        title: "SAP CRM Consultant",
        description: "Customer Relationship Management specialist to optimize client interactions and drive business growth.",
        salary: "Competitive",
    },
    Job {
        title: "SAP Finance Consultant",
        description: "Financial systems expert to streamline accounting processes and financial reporting.",
        salary: "Competitive",
    },
];

pub(crate) struct Service {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) features: [&'static str; 6],
}

pub(crate) static SERVICES: [Service; 6] = [
    Service {
        title: "Permanent Placement",
        description: "Find the perfect long-term fit for your organization with our comprehensive permanent recruitment service.",
        features: [
            "Executive search for senior IT positions",
            "Mid-level and junior developer placement",
            "Comprehensive candidate screening",
            "Skills assessment & technical interviews",
            "Cultural fit evaluation",
            "90-day placement guarantee",
        ],
    },
    Service {
        title: "Contract & Temporary",
        description: "Flexible staffing solutions for project-based work and temporary coverage needs.",
        features: [
            "Short-term & long-term contracts",
            "Project-based specialist placement",
            "Emergency cover solutions",
            "Contract-to-permanent options",
            "Rapid deployment within 48 hours",
            "Flexible engagement models",
        ],
    },
    Service {
        title: "Executive Search",
        description: "Specialized recruitment for C-level executives, VPs, and senior leadership positions in technology.",
        features: [
            "CTO, CIO, VP Engineering searches",
            "Board-level technology appointments",
            "Confidential & discreet process",
            "Global talent network access",
            "Leadership assessment & profiling",
            "Succession planning support",
        ],
    },
    Service {
        title: "Talent Acquisition Consulting",
        description: "Strategic consulting to optimize your internal recruitment processes and employer branding.",
        features: [
            "Recruitment process optimization",
            "Employer branding strategy",
            "Talent pipeline development",
            "Interview training & best practices",
            "Market intelligence & salary benchmarking",
            "Diversity & inclusion initiatives",
        ],
    },
    Service {
        title: "Managed Recruitment Services",
        description: "Outsource your entire recruitment function or specific elements to our dedicated team.",
        features: [
            "Dedicated recruitment team setup",
            "End-to-end process management",
            "Volume recruitment solutions",
            "Technology stack management",
            "Reporting & analytics",
            "Cost-effective scaling",
        ],
    },
    Service {
        title: "Specialized Tech Recruitment",
        description: "Expert recruitment in emerging technologies and niche IT specializations.",
        features: [
            "AI/ML & Data Science specialists",
            "Cybersecurity experts",
            "Cloud architecture & DevOps",
            "Blockchain & Web3 developers",
            "IoT & embedded systems",
            "Quantum computing researchers",
        ],
    },
];

pub(crate) static SERVICE_STATS: [Stat; 4] = [
    Stat { value: "6", label: "Active Projects" },
    Stat { value: "20+", label: "Skilled Contractors" },
    Stat { value: "24hrs", label: "Average Response Time" },
    Stat { value: "18", label: "Long-Term Placements" },
];

pub(crate) static PROCESS_STEPS: [(&str, &str); 6] = [
    ("Discovery & Strategy", "Understand requirements, culture, and objectives."),
    ("Talent Sourcing", "Identify top IT professionals through our network."),
    ("Screening & Assessment", "Technical and cultural evaluation with assessments."),
    ("Client Presentation", "Present qualified candidates with recommendations."),
    ("Interview Coordination", "Manage interviews and provide feedback."),
    ("Offer & Onboarding", "Support negotiations and smooth onboarding."),
];

pub(crate) struct Faq {
    pub(crate) question: &'static str,
    pub(crate) answer: &'static str,
}

pub(crate) static FAQS: [Faq; 5] = [
    Faq {
        question: "How long does the recruitment process take?",
        answer: "We typically schedule initial calls within 2–3 business days. The full process is usually 1–2 weeks depending on the role.",
    },
    Faq {
        question: "Do I need to be local to apply?",
        answer: "We primarily serve U.S.-based roles, but many positions are fully remote.",
    },
    Faq {
        question: "Can I apply to multiple positions simultaneously?",
        answer: "Yes. Submit once and note “Multiple Positions”. We’ll match you appropriately.",
    },
    Faq {
        question: "What kind of roles do you specialize in?",
        answer: "IT and technical roles: engineering, data, cybersecurity, DevOps, cloud.",
    },
    Faq {
        question: "Do you charge candidates any fees?",
        answer: "No. Our services are free to applicants; partner companies cover fees.",
    },
];

pub(crate) struct TimelineEntry {
    pub(crate) year: &'static str,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
}

pub(crate) static TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry {
        year: "2022",
        title: "Fisker IT is Founded",
        description: "Vijay and Naveen launched Fisker IT with a vision to connect exceptional SAP talent with industry-leading companies, starting with a focus on quality over quantity.",
    },
    TimelineEntry {
        year: "2022",
        title: "First Client Partnerships",
        description: "Secured partnerships with Tech Mahindra and United Therapeutics, establishing our reputation for delivering highly-skilled SAP consultants who exceed client expectations.",
    },
    TimelineEntry {
        year: "2023",
        title: "Rapid Growth & Expansion",
        description: "Expanded our client portfolio to include GE Aviation, ERP Fixers, and V-DART. Our team of contractors grew to 10+ professionals across SAP modules including ABAP, SD, FI/CO, and CRM.",
    },
    TimelineEntry {
        year: "2024",
        title: "20+ Contractors Strong",
        description: "Reached a major milestone with 20+ active contractors successfully placed across our partner companies. Maintained an exceptional 90% retention rate, demonstrating our commitment to perfect matches.",
    },
    TimelineEntry {
        year: "2025",
        title: "6 Major Projects Delivered",
        description: "Successfully delivered 6 significant SAP implementation and optimization projects. Established our 24-hour response time commitment and currently hiring for SAP CRM and Finance consultant positions.",
    },
];
