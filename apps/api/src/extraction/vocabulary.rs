// Word lists driving the rule-based field extraction.
// Matching ignores case except where noted; the spelling here is what ends up in the output.

/// Known skills, reported in this spelling. Multi-word entries match as phrases;
/// terms of three characters or fewer match case-sensitively.
pub const SKILLS: &[&str] = &[
    // Languages
    "Rust",
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "Go",
    "Golang",
    "Kotlin",
    "Swift",
    "Scala",
    "Ruby",
    "PHP",
    "R",
    "MATLAB",
    "Perl",
    "Haskell",
    "Elixir",
    "Bash",
    "COBOL",
    "SQL",
    "HTML",
    "CSS",
    // Frameworks and libraries
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "Spring Boot",
    "Rails",
    ".NET",
    "Tokio",
    "Axum",
    "TensorFlow",
    "PyTorch",
    "Keras",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Spark",
    "Hadoop",
    // Data stores
    "PostgreSQL",
    "MySQL",
    "SQLite",
    "MongoDB",
    "Redis",
    "Cassandra",
    "Elasticsearch",
    "Kafka",
    "RabbitMQ",
    // Infrastructure
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "Git",
    "Linux",
    "CI/CD",
    "Microservices",
    "REST",
    "GraphQL",
    "gRPC",
    // Disciplines
    "Machine Learning",
    "Deep Learning",
    "Natural Language Processing",
    "NLP",
    "Computer Vision",
    "Data Analysis",
    "Data Science",
    "Statistics",
    "Distributed Systems",
    "System Design",
    "Agile",
    "Scrum",
    "Excel",
    "Tableau",
    "Power BI",
    "Figma",
    "Photoshop",
    // Soft skills
    "Leadership",
    "Communication",
    "Project Management",
    "Mentoring",
    "Teamwork",
    "Problem Solving",
];

/// Heading text (lowercased, trailing colon removed) that opens the experience section.
pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "employment history",
    "work history",
    "career history",
    "internships",
    "internship",
];

/// Any other heading closes the section that came before it.
pub const OTHER_HEADINGS: &[&str] = &[
    "education",
    "academic background",
    "qualifications",
    "skills",
    "technical skills",
    "key skills",
    "core competencies",
    "projects",
    "personal projects",
    "certifications",
    "certificates",
    "achievements",
    "awards",
    "publications",
    "summary",
    "professional summary",
    "profile",
    "objective",
    "career objective",
    "interests",
    "hobbies",
    "languages",
    "references",
    "contact",
    "personal details",
    "declaration",
];

/// Degree markers. Terms of three characters or fewer match case-sensitively.
pub const DEGREES: &[&str] = &[
    "Bachelor",
    "Master",
    "Doctor of",
    "PhD",
    "Ph.D",
    "MBA",
    "B.Tech",
    "M.Tech",
    "B.E",
    "M.E",
    "B.Sc",
    "M.Sc",
    "BSc",
    "MSc",
    "B.S",
    "M.S",
    "BA",
    "BS",
    "MS",
    "B.Com",
    "M.Com",
    "BCA",
    "MCA",
    "Associate Degree",
    "Diploma",
    "High School",
];

/// Words that mark a line as naming an employer. Compared after stripping punctuation.
pub const COMPANY_SUFFIXES: &[&str] = &[
    "inc",
    "ltd",
    "llc",
    "llp",
    "corp",
    "corporation",
    "company",
    "co",
    "gmbh",
    "pvt",
    "limited",
    "technologies",
    "solutions",
    "systems",
    "labs",
    "group",
    "consulting",
];

/// Words that mark a line as naming a job title.
pub const DESIGNATIONS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "architect",
    "manager",
    "analyst",
    "consultant",
    "intern",
    "scientist",
    "designer",
    "administrator",
    "lead",
    "director",
    "specialist",
    "associate",
    "officer",
    "head",
    "vp",
    "cto",
    "ceo",
];
