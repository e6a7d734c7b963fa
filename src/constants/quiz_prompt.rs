use crate::models::domain::Difficulty;

/// Category name and its topics.
pub type TopicCategory = (&'static str, &'static [&'static str]);

const EASY_TOPICS: &[TopicCategory] = &[
    ("physics", &["States of matter", "Simple machines", "Basic forces", "Light and sound"]),
    ("chemistry", &["Elements and compounds", "States of water", "Basic acids and bases"]),
    ("biology", &["Cell structure", "Food chains", "Plant parts", "Animal groups"]),
    ("astronomy", &["Solar system basics", "Moon phases", "Day and night"]),
    ("geography", &["Continents", "Oceans", "Basic landforms", "Cardinal directions"]),
    ("world-history", &["Ancient civilizations basics", "Famous explorers", "Medieval period"]),
    ("sports-general", &["Popular sports", "Basic rules", "Famous athletes"]),
    ("technology", &["Computer basics", "Internet basics", "Simple inventions"]),
];

const MEDIUM_TOPICS: &[TopicCategory] = &[
    ("physics", &["Newton's laws", "Energy transfer", "Electromagnetic spectrum", "Waves"]),
    ("chemistry", &["Chemical bonds", "Periodic table trends", "Chemical reactions", "pH scale"]),
    ("biology", &["Mitosis and meiosis", "DNA and RNA", "Cellular respiration", "Evolution"]),
    ("astronomy", &["Star life cycles", "Galaxy types", "Space missions", "Planets"]),
    ("geography", &["Climate zones", "Mountain ranges", "Rivers", "Country capitals"]),
    ("world-history", &["World wars", "Industrial revolution", "Renaissance", "Colonialism"]),
    ("modern-history", &["Cold War", "Independence movements", "Space race", "Digital age"]),
    ("sports-general", &["Olympic history", "Sports records", "Tournament formats"]),
    ("football", &["FIFA World Cup", "Famous players", "League systems"]),
    ("cricket", &["Cricket formats", "Famous players", "World Cup history"]),
];

const HARD_TOPICS: &[TopicCategory] = &[
    ("physics", &["Quantum mechanics", "Relativity", "Nuclear physics", "Thermodynamics"]),
    ("chemistry", &["Organic reactions", "Molecular geometry", "Electrochemistry", "Biochemistry"]),
    ("biology", &["Genetic engineering", "Molecular biology", "Evolutionary biology", "Neuroscience"]),
    ("astronomy", &["Black holes", "Dark matter", "Cosmology", "Exoplanets"]),
    ("modern-science", &["CRISPR", "Quantum computing", "AI breakthroughs", "Climate science"]),
    ("geography", &["Plate tectonics", "Geographic theories", "Climate patterns", "Geopolitics"]),
    ("modern-history", &["Globalization", "Technological revolutions", "Modern conflicts", "21st century politics"]),
    ("discoveries", &["Recent scientific breakthroughs", "Space discoveries", "Medical advances"]),
    ("space-exploration", &["Mars missions", "James Webb telescope", "ISS", "SpaceX achievements"]),
    ("olympics", &["Olympic records", "Memorable moments", "Host cities history"]),
    ("technology", &["AI development", "Blockchain", "Quantum computing", "Biotechnology"]),
];

pub fn topic_categories(difficulty: Difficulty) -> &'static [TopicCategory] {
    match difficulty {
        Difficulty::Easy => EASY_TOPICS,
        Difficulty::Medium => MEDIUM_TOPICS,
        Difficulty::Hard => HARD_TOPICS,
    }
}

pub fn difficulty_guidance(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "EASY: Basic concepts, simple terminology",
        Difficulty::Medium => "MEDIUM: Require understanding of concepts and relationships",
        Difficulty::Hard => "HARD: Advanced knowledge, complex principles",
    }
}

pub const QUIZ_OUTPUT_FORMAT: &str = "QUESTION: [Write a clear, specific question here]
A) [First option]
B) [Second option]
C) [Third option]
D) [Fourth option]
CORRECT: [Single letter: A, B, C, or D]
EXPLANATION: [Write a 2-3 sentence explanation of why the correct answer is right and what makes it important]";

pub const QUIZ_FORMAT_FOOTER: &str =
    "Do NOT include any other text, markdown, or formatting. Follow the format exactly.";
