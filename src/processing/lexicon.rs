//! English word classes used by the rule-based tagger

use crate::processing::annotator::PosTag;
use std::collections::{HashMap, HashSet};

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "all", "both", "such", "what", "which", "whatever",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "who",
    "whom", "whose", "someone", "anyone", "everyone", "something", "anything", "everything",
    "nothing", "nobody", "somebody", "anybody", "everybody", "one",
];

/// Pronouns that can be the subject of a finite verb
const SUBJECT_PRONOUNS: &[&str] = &["he", "she", "it", "who", "that", "which", "everyone", "someone"];

/// Possessives that are followed by a noun, never a verb
const POSSESSIVES: &[&str] = &["my", "our", "your", "his", "her", "its", "their", "whose"];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "from", "up", "down", "out",
    "off", "over", "under", "across", "along", "among", "around", "behind", "beside", "beyond",
    "despite", "inside", "near", "onto", "outside", "per", "since", "toward", "towards", "upon",
    "via", "within", "without", "throughout", "like", "than", "including",
];

const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "plus", "&"];

const SUBORDINATING_CONJUNCTIONS: &[&str] = &[
    "if", "because", "although", "though", "while", "whereas", "unless", "until", "whether",
    "as", "so", "once", "when", "where", "whenever", "wherever",
];

const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "ca", "wo", "'ll", "'d", "'re", "'ve", "'m",
];

const PARTICLES: &[&str] = &["to", "not", "n't", "'s"];

const INTERJECTIONS: &[&str] = &["yes", "oh", "hello", "hi", "please", "thanks", "ok", "okay"];

const NUMBER_WORDS: &[&str] = &[
    "zero", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "thirty", "fifty", "hundred", "thousand", "million", "billion",
];

const ADVERBS: &[&str] = &[
    "also", "well", "often", "always", "never", "sometimes", "already", "still", "just", "very",
    "too", "again", "ever", "soon", "then", "now", "here", "there", "together", "perhaps",
    "thus", "however", "therefore", "moreover", "furthermore", "almost", "quite", "rather",
    "instead", "abroad", "ahead", "afterwards", "otherwise", "hence", "only", "even", "more",
    "most", "less", "least", "much", "far", "fast", "hard", "further", "how", "why",
];

const ADJECTIVES: &[&str] = &[
    "good", "better", "best", "bad", "worse", "worst", "strong", "excellent", "great", "new",
    "old", "senior", "junior", "large", "small", "big", "high", "low", "key", "main", "top",
    "complex", "solid", "deep", "broad", "clear", "fast", "quick", "agile", "remote", "hybrid",
    "able", "full", "same", "different", "other", "several", "many", "few", "various", "own",
    "real", "modern", "open", "simple", "proficient", "fluent", "passionate", "eager",
    "hands-on", "cross-functional", "preferred", "plus", "relevant", "current", "recent",
    "previous", "successful", "effective", "efficient", "robust", "scalable", "reliable",
    "secure", "responsible", "independent", "competitive", "familiar", "comfortable", "ideal",
    "early", "daily", "weekly", "monthly", "quarterly", "yearly", "friendly", "likely",
    "timely", "costly", "first", "second", "third", "last", "next", "more", "most", "less",
];

/// Past participles that read as adjectives when they precede another word
const PARTICIPLE_ADJECTIVES: &[&str] = &[
    "experienced", "skilled", "detailed", "motivated", "qualified", "dedicated", "talented",
    "seasoned", "advanced", "proven", "self-motivated", "organized", "organised", "certified",
    "accomplished", "distinguished", "licensed", "required", "desired",
];

/// Base-form verbs common in resumes and job postings
const COMMON_VERBS: &[&str] = &[
    "build", "develop", "design", "manage", "lead", "create", "implement", "maintain", "use",
    "work", "deploy", "collaborate", "write", "test", "improve", "optimize", "optimise",
    "support", "drive", "deliver", "ensure", "analyze", "analyse", "mentor", "communicate",
    "automate", "integrate", "migrate", "scale", "monitor", "review", "define", "establish",
    "execute", "coordinate", "plan", "launch", "reduce", "increase", "achieve", "participate",
    "contribute", "help", "join", "seek", "look", "need", "require", "apply", "learn",
    "understand", "solve", "troubleshoot", "debug", "configure", "document", "present",
    "report", "own", "architect", "ship", "partner", "translate", "evaluate", "identify",
    "provide", "prepare", "perform", "conduct", "oversee", "train", "hire", "grow", "make",
    "take", "give", "get", "keep", "bring", "know", "think", "see", "find", "become", "finish",
    "publish", "establish", "streamline", "refactor", "enhance", "recommend", "resolve",
    "prioritize", "prioritise", "negotiate", "facilitate", "research", "assist", "handle",
    "join", "thrive", "excel", "enjoy", "love", "want", "include", "involve",
];

/// Nouns ending in -ing
const ING_NOUNS: &[&str] = &[
    "engineering", "marketing", "accounting", "training", "learning", "programming", "testing",
    "computing", "networking", "scheduling", "manufacturing", "consulting", "banking",
    "billing", "staffing", "meeting", "building", "funding", "hiring", "onboarding",
    "recruiting", "logging", "modeling", "modelling", "processing", "reporting", "planning",
    "budgeting", "forecasting", "hosting", "caching", "messaging", "pricing", "routing",
    "scripting", "writing", "understanding", "thing", "something", "anything", "nothing",
    "everything", "morning", "evening", "spring", "string", "king", "ring", "wing", "ceiling",
    "clothing", "wedding", "offering", "opening", "setting", "understanding", "background",
];

/// Words ending in -ly that are not adverbs
const LY_NON_ADVERBS: &[(&str, PosTag)] = &[
    ("supply", PosTag::Noun), ("family", PosTag::Noun), ("assembly", PosTag::Noun),
    ("anomaly", PosTag::Noun), ("monopoly", PosTag::Noun), ("july", PosTag::Propn),
    ("italy", PosTag::Propn), ("ally", PosTag::Noun), ("reply", PosTag::Noun),
    ("rally", PosTag::Noun), ("butterfly", PosTag::Noun), ("apply", PosTag::Verb),
    ("comply", PosTag::Verb), ("rely", PosTag::Verb), ("multiply", PosTag::Verb),
    ("fly", PosTag::Verb), ("daily", PosTag::Adj), ("weekly", PosTag::Adj),
    ("monthly", PosTag::Adj), ("quarterly", PosTag::Adj), ("yearly", PosTag::Adj),
    ("friendly", PosTag::Adj), ("early", PosTag::Adj), ("likely", PosTag::Adj),
    ("lovely", PosTag::Adj), ("costly", PosTag::Adj), ("timely", PosTag::Adj),
    ("orderly", PosTag::Adj), ("elderly", PosTag::Adj), ("holy", PosTag::Adj),
    ("ugly", PosTag::Adj), ("only", PosTag::Adv),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish"];

/// Open-class words whose ending looks adjectival
const ADJECTIVE_SUFFIX_EXCEPTIONS: &[&str] = &[
    "objective", "executive", "initiative", "representative", "perspective", "incentive",
    "directive", "alternative", "detective", "relative", "native", "motive", "archive",
    "drive", "hive", "five", "live", "give", "olive", "table", "cable", "variable",
    "deliverable", "vegetable", "timetable", "bible", "proposal", "approval", "portal",
    "terminal", "signal", "rental", "capital", "hospital", "journal", "manual", "material",
    "potential", "interval", "total", "animal", "arrival", "renewal", "removal", "referral",
    "tutorial", "editorial", "festival", "survival", "principal", "individual", "official",
    "professional", "criminal", "general", "rival", "goal", "deal", "meal", "coal", "steal",
    "real", "ideal", "appeal", "reveal", "heal", "seal", "dial", "trial", "denial", "tribal",
    "logic", "topic", "music", "traffic", "graphic", "mechanic", "clinic", "republic",
    "rhetoric", "arithmetic", "fabric", "magic", "comic", "panic", "critic", "epic", "tunic",
    "metric", "lyric", "relic", "tactic", "mimic", "attic", "picnic", "public", "ethic",
    "english", "finish", "publish", "establish", "polish", "wish", "fish", "dish", "radish",
    "spanish", "diminish", "accomplish", "abolish", "relish", "nourish", "punish", "vanish",
    "flourish", "cherish", "perish", "banish", "furnish", "demolish", "extinguish",
    "distinguish", "varnish", "unless", "bless", "kiss", "dismiss",
];

/// Word-class lookup tables, built once and shared read-only
pub struct Lexicon {
    closed_class: HashMap<&'static str, PosTag>,
    subject_pronouns: HashSet<&'static str>,
    possessives: HashSet<&'static str>,
    number_words: HashSet<&'static str>,
    adverbs: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    participle_adjectives: HashSet<&'static str>,
    common_verbs: HashSet<&'static str>,
    ing_nouns: HashSet<&'static str>,
    ly_non_adverbs: HashMap<&'static str, PosTag>,
    adjective_suffix_exceptions: HashSet<&'static str>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon {
    pub fn english() -> Self {
        let mut closed_class = HashMap::new();
        // Later tables override earlier ones for words listed twice ("to" is a particle).
        for (words, tag) in [
            (ADPOSITIONS, PosTag::Adp),
            (SUBORDINATING_CONJUNCTIONS, PosTag::Sconj),
            (COORDINATING_CONJUNCTIONS, PosTag::Cconj),
            (PRONOUNS, PosTag::Pron),
            (DETERMINERS, PosTag::Det),
            (AUXILIARIES, PosTag::Aux),
            (PARTICLES, PosTag::Part),
            (INTERJECTIONS, PosTag::Intj),
        ] {
            for &word in words {
                closed_class.insert(word, tag);
            }
        }

        Self {
            closed_class,
            subject_pronouns: SUBJECT_PRONOUNS.iter().copied().collect(),
            possessives: POSSESSIVES.iter().copied().collect(),
            number_words: NUMBER_WORDS.iter().copied().collect(),
            adverbs: ADVERBS.iter().copied().collect(),
            adjectives: ADJECTIVES.iter().copied().collect(),
            participle_adjectives: PARTICIPLE_ADJECTIVES.iter().copied().collect(),
            common_verbs: COMMON_VERBS.iter().copied().collect(),
            ing_nouns: ING_NOUNS.iter().copied().collect(),
            ly_non_adverbs: LY_NON_ADVERBS.iter().copied().collect(),
            adjective_suffix_exceptions: ADJECTIVE_SUFFIX_EXCEPTIONS.iter().copied().collect(),
        }
    }

    pub fn closed_class(&self, word: &str) -> Option<PosTag> {
        self.closed_class.get(word).copied()
    }

    pub fn is_subject_pronoun(&self, word: &str) -> bool {
        self.subject_pronouns.contains(word)
    }

    pub fn is_possessive(&self, word: &str) -> bool {
        self.possessives.contains(word)
    }

    pub fn is_number_word(&self, word: &str) -> bool {
        self.number_words.contains(word)
    }

    pub fn is_adverb(&self, word: &str) -> bool {
        self.adverbs.contains(word)
    }

    pub fn is_adjective(&self, word: &str) -> bool {
        self.adjectives.contains(word)
    }

    pub fn is_participle_adjective(&self, word: &str) -> bool {
        self.participle_adjectives.contains(word)
    }

    pub fn is_common_verb(&self, word: &str) -> bool {
        self.common_verbs.contains(word)
    }

    pub fn is_ing_noun(&self, word: &str) -> bool {
        self.ing_nouns.contains(word)
    }

    /// Tag for a word ending in -ly: an exception's tag, or ADV
    pub fn ly_word(&self, word: &str) -> PosTag {
        self.ly_non_adverbs.get(word).copied().unwrap_or(PosTag::Adv)
    }

    pub fn has_adjective_suffix(&self, word: &str) -> bool {
        word.len() > 4
            && !self.adjective_suffix_exceptions.contains(word)
            && ADJECTIVE_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
    }
}
