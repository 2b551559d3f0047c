use crate::models::skill::{SkillCategory, SkillLink};

/// Skills recommended to every user, in display order. The skill gap is
/// computed against this list.
pub const IN_DEMAND_SKILLS: &[SkillLink] = &[
    SkillLink::new("SQL", "https://www.w3schools.com/sql/"),
    SkillLink::new("React", "https://react.dev/learn"),
    SkillLink::new("Python", "https://www.python.org/about/gettingstarted/"),
    SkillLink::new(
        "Data Science",
        "https://www.coursera.org/specializations/jhu-data-science",
    ),
    SkillLink::new(
        "Machine Learning",
        "https://www.coursera.org/learn/machine-learning",
    ),
];

/// Autocomplete vocabulary for the course search box.
pub const SKILL_SUGGESTIONS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "Machine Learning",
    "Data Science",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "C++",
    "Java",
    "Cybersecurity",
    "Blockchain",
    "UI/UX",
    "Figma",
    "TensorFlow",
    "Artificial Intelligence",
];

pub const CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming",
        skills: &[
            SkillLink::new(
                "JavaScript",
                "https://developer.mozilla.org/en-US/docs/Web/JavaScript",
            ),
            SkillLink::new("Python", "https://www.python.org/about/gettingstarted/"),
            SkillLink::new("C++", "https://www.learncpp.com/"),
        ],
    },
    SkillCategory {
        name: "Data Science",
        skills: &[
            SkillLink::new(
                "Machine Learning",
                "https://www.coursera.org/learn/machine-learning",
            ),
            SkillLink::new("SQL", "https://www.w3schools.com/sql/"),
            SkillLink::new("Data Visualization", "https://www.tableau.com/learn/training"),
        ],
    },
    SkillCategory {
        name: "Design",
        skills: &[
            SkillLink::new("UI/UX", "https://www.interaction-design.org/courses"),
            SkillLink::new(
                "Figma",
                "https://help.figma.com/hc/en-us/articles/360040328654-Learn-Design-with-Figma",
            ),
            SkillLink::new("Graphic Design", "https://www.canva.com/learn/graphic-design/"),
        ],
    },
    SkillCategory {
        name: "AI & Cloud",
        skills: &[
            SkillLink::new("AI/ML", "https://www.udemy.com/topic/machine-learning/"),
            SkillLink::new("AWS", "https://aws.amazon.com/training/"),
            SkillLink::new("Azure", "https://learn.microsoft.com/en-us/training/azure/"),
        ],
    },
];

pub const TRENDING_SKILLS: &[SkillLink] = &[
    SkillLink::new("AI/ML", "https://www.coursera.org/learn/machine-learning"),
    SkillLink::new("Cloud Computing", "https://aws.amazon.com/training/"),
    SkillLink::new("Cybersecurity", "https://www.udemy.com/topic/cyber-security/"),
    SkillLink::new("Data Engineering", "https://www.datacamp.com/tracks/data-engineer"),
    SkillLink::new("React.js", "https://react.dev/learn"),
];
