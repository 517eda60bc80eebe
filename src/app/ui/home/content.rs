//! Marketing copy for the landing page sections.

pub struct Capability {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Speaker {
    pub name: &'static str,
    pub initials: &'static str,
    pub bio: &'static str,
}

pub struct AgendaItem {
    pub title: &'static str,
    pub speaker: &'static str,
    pub description: &'static str,
}

pub const CAPABILITIES: &[Capability] = &[
    Capability {
        title: "Skills Decay",
        description: "every 2-3 years\nfaster for technical skills",
    },
    Capability {
        title: "Manager Role Shift",
        description: "orchestrating\npeople + AI agents",
    },
    Capability {
        title: "Leaders + AI Co-Pilots",
        description: "requires sensemaking\nand systems thinking",
    },
    Capability {
        title: "Frontline Capability",
        description: "now depends\non digital fluency",
    },
    Capability {
        title: "Core Human Capabilities",
        description: "analytical reasoning\nand scenario planning",
    },
    Capability {
        title: "Winning Organizations",
        description: "predict skills\nahead of demand",
    },
];

pub const SPEAKERS: &[Speaker] = &[
    Speaker {
        name: "Rob Lauber",
        initials: "RL",
        bio: "Rob Lauber is a global workforce and capability-building leader with over 25 years \
            of experience helping organizations prepare leaders and frontline teams for change. \
            Most recently, he served as SVP and Chief Learning Officer at McDonald's, leading \
            learning and development across 37,000+ restaurants worldwide. His perspective is \
            especially relevant as organizations rethink leadership and capability models in the \
            age of AI.",
    },
    Speaker {
        name: "Krishna Kumar",
        initials: "KK",
        bio: "Krishna Kumar is the Founder and CEO of Simplilearn, working closely with \
            enterprises navigating workforce transformation driven by AI and digital change. At \
            the center of the learning and skills ecosystem, he brings a unique perspective on \
            how roles, leadership expectations, and capabilities are evolving across industries. \
            Through direct engagement with enterprise leaders and education partners, he sees \
            what scales, and what doesn't, in building workforce readiness for the AI era, \
            offering a cross-enterprise view of the priorities shaping workforce strategy today.",
    },
    Speaker {
        name: "Sudipto Mitra",
        initials: "SM",
        bio: "Sudipto Mitra is a senior transformation and growth leader with over 20 years of \
            experience helping enterprises navigate large-scale change across technology, \
            operations, and talent. As Chief Revenue Officer at Simplilearn, he works with \
            executive teams to address workforce capability gaps as AI reshapes roles and \
            operating models. He previously held leadership roles at Accenture, IBM Consulting, \
            and WorkFusion.",
    },
];

pub const TAKEAWAYS: &[&str] = &[
    "A clear view of the leadership & workforce capabilities that will matter most over the \
        next 24-36 months.",
    "Insights from high-scale operating environments including the former CLO of McDonald's \
        on what truly scales and what breaks under pressure.",
    "Signals for where capability gaps may already be forming in your organization.",
    "Peer-validated perspectives from leaders running workforce, talent, and transformation \
        ecosystems at scale.",
    "Actionable insights you can take straight into your next exec meeting.",
];

pub const AGENDA: &[AgendaItem] = &[
    AgendaItem {
        title: "Welcome & Opening",
        speaker: "Sudipto Mitra, CRO Simplilearn",
        description: "Why capability-building is now a board-level issue and what's changing in \
            the workforce landscape.",
    },
    AgendaItem {
        title: "Keynote:\nWhat Enterprise Leaders Are Seeing on the Ground",
        speaker: "Rob Lauber, Former CLO McDonald's",
        description: "A grounded view of how AI and AI agents are reshaping work, workflows, and \
            leadership across industries.",
    },
    AgendaItem {
        title: "Lunch & Executive Conversation",
        speaker: "Industry Experts Invited",
        description: "What large enterprise talent ecosystems are learning about \
            capability-building at scale.",
    },
];
